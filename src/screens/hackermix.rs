//! The word scrambler: a lazily-grown collection of look-alike respellings,
//! with a caret for stepping individual letters through their variants.

use crate::Result;
use crate::event::Key;
use crate::fmt;
use crate::mixer::LetterMixer;
use crate::nav::{NavGroup, NavItem};
use crate::navigator::{Generate, Growing, Navigator};
use crate::outcome::Outcome;
use crate::query::Groups;
use crate::screen::pad::MouseHit;
use crate::screen::runloop::runloop;
use crate::screen::{App, Ctl, Frame};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixCmd {
    Next,
    Prev,
    CaretLeft,
    CaretRight,
    VariantUp,
    VariantDown,
    ChangeText,
}

/// The growing collection's generator: the mixer applied to the current
/// word.
pub struct WordMixer {
    mixer: LetterMixer<'static>,
    word: String,
}

impl WordMixer {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn mixer(&self) -> &LetterMixer<'static> {
        &self.mixer
    }
}

impl Generate for WordMixer {
    fn generate(&mut self) -> String {
        self.mixer.mix_word(&self.word)
    }
}

/// Scramble a word with unicode look-alikes, one variation per entry.
pub struct Hackermix {
    cursor: Growing<WordMixer>,
    /// Caret over the word's characters.
    pos: usize,
}

impl Hackermix {
    pub fn new(word: &str) -> Hackermix {
        let mixer = LetterMixer::new(&Groups::shared());
        let mut cursor = Growing::new(WordMixer {
            mixer,
            word: word.to_owned(),
        });
        // Generate the first entry so the screen opens populated.
        cursor.next();
        Hackermix { cursor, pos: 0 }
    }

    pub fn nav(&self) -> NavGroup<MixCmd> {
        let mut nav = NavGroup::new();
        // The arrow keys step variants here, so the default scroll bindings
        // give way.
        nav.remove(Key::Up);
        nav.remove(Key::Down);
        nav.insert(NavItem::app('n', "Random Next", MixCmd::Next));
        nav.insert(NavItem::app('p', "Previous", MixCmd::Prev));
        nav.insert(NavItem::app('l', "shift right", MixCmd::CaretRight).alias(Key::Right));
        nav.insert(NavItem::app('h', "shift left", MixCmd::CaretLeft).alias(Key::Left));
        nav.insert(NavItem::app('j', "next variant", MixCmd::VariantUp).alias(Key::Up));
        nav.insert(NavItem::app('k', "previous variant", MixCmd::VariantDown).alias(Key::Down));
        nav.insert(NavItem::app('c', "change text", MixCmd::ChangeText));
        nav
    }

    pub fn run(&mut self) -> Result<()> {
        let nav = self.nav();
        runloop(self, &nav)
    }

    fn word(&self) -> String {
        self.cursor.generator().word.clone()
    }

    /// The character under the caret in the original word, lowercased for
    /// candidate lookup.
    fn caret_char(&self) -> Option<char> {
        self.word()
            .chars()
            .nth(self.pos)
            .map(|c| c.to_ascii_lowercase())
    }

    /// The glyph under the caret in the current respelling.
    fn caret_glyph(&self) -> Option<String> {
        self.cursor
            .current()
            .and_then(|w| w.chars().nth(self.pos))
            .map(|c| c.to_string())
    }

    /// The caret glyph's position within its candidate list.
    fn variant_index(&self) -> usize {
        let (Some(letter), Some(glyph)) = (self.caret_char(), self.caret_glyph()) else {
            return 0;
        };
        self.cursor
            .generator()
            .mixer
            .candidates(letter)
            .iter()
            .position(|c| *c == glyph)
            .unwrap_or(0)
    }

    fn has_variants(&self, pos: usize) -> bool {
        self.word()
            .chars()
            .nth(pos)
            .map(|c| {
                !self
                    .cursor
                    .generator()
                    .mixer
                    .candidates(c.to_ascii_lowercase())
                    .is_empty()
            })
            .unwrap_or(false)
    }

    /// Move the caret to the nearest character with variants in `dir`,
    /// staying put when there is none.
    fn shift_caret(&mut self, dir: isize) {
        let len = self.word().chars().count();
        let mut pos = self.pos as isize + dir;
        while pos >= 0 && (pos as usize) < len {
            if self.has_variants(pos as usize) {
                self.pos = pos as usize;
                return;
            }
            pos += dir;
        }
    }

    /// Replace the caret glyph with the candidate at `index` and save the
    /// respelling over the current entry.
    fn set_variant(&mut self, index: usize) {
        let (Some(letter), Some(current)) = (self.caret_char(), self.cursor.current()) else {
            return;
        };
        let candidates = self.cursor.generator().mixer.candidates(letter);
        let Some(glyph) = candidates.get(index) else {
            return;
        };
        let respelled: String = current
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i == self.pos {
                    glyph.clone()
                } else {
                    c.to_string()
                }
            })
            .collect();
        self.cursor.cursor_mut().replace_current(respelled);
    }

    fn change_text(&mut self, ctl: &mut dyn Ctl) -> Result<()> {
        let Some(text) = ctl.input("Set new text")? else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        self.cursor.generator_mut().word = text;
        self.cursor.reset();
        self.cursor.next();
        self.pos = 0;
        Ok(())
    }
}

impl App for Hackermix {
    type Cmd = MixCmd;

    fn body(&mut self, _frame: &Frame) -> String {
        let current = self.cursor.current().unwrap_or_default().to_owned();
        let index = self
            .cursor
            .cursor()
            .index()
            .map(|i| i as i64)
            .unwrap_or(-1);
        let variant = self.variant_index();
        let total = self
            .caret_char()
            .map(|c| self.cursor.generator().mixer.candidates(c).len())
            .unwrap_or(0);
        let caret = format!("{}^", " ".repeat(self.pos));

        let record_line = self
            .caret_char()
            .zip(self.caret_glyph())
            .and_then(|(letter, glyph)| self.cursor.generator().mixer.record_for(letter, &glyph))
            .map(|rec| fmt::line(rec))
            .unwrap_or_default();

        [
            format!(
                "index:{} pos:{} uidx:{}/{}",
                index,
                self.pos,
                variant + 1,
                total
            ),
            String::new(),
            current,
            caret,
            record_line,
        ]
        .join("\n")
    }

    fn highlights(&self) -> Vec<String> {
        Vec::new()
    }

    fn dispatch(&mut self, ctl: &mut dyn Ctl, cmd: &MixCmd) -> Result<Outcome> {
        match cmd {
            MixCmd::Next => self.cursor.next(),
            MixCmd::Prev => self.cursor.prev(),
            MixCmd::CaretRight => self.shift_caret(1),
            MixCmd::CaretLeft => self.shift_caret(-1),
            MixCmd::VariantUp => {
                let i = self.variant_index();
                self.set_variant(i + 1);
            }
            MixCmd::VariantDown => {
                let i = self.variant_index();
                if i > 0 {
                    self.set_variant(i - 1);
                }
            }
            MixCmd::ChangeText => self.change_text(ctl)?,
        }
        Ok(Outcome::Continue)
    }

    fn mouse(&mut self, _hit: &MouseHit) -> Result<()> {
        Ok(())
    }

    fn notices(&mut self) -> Vec<String> {
        self.cursor.cursor_mut().take_notices()
    }

    fn notify(&mut self, msg: String) {
        self.cursor.cursor_mut().notify(msg);
    }
}

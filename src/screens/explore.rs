//! The interactive group browser: one line per indexed token, a glyph row
//! for the current group, and a movable highlight over its characters.

use textwrap::indent;

use crate::Result;
use crate::catalog::Record;
use crate::event::Key;
use crate::fmt;
use crate::nav::{NavCmd, NavGroup, NavItem};
use crate::navigator::{Navigator, Revolving};
use crate::outcome::Outcome;
use crate::query::Groups;
use crate::screen::pad::MouseHit;
use crate::screen::runloop::runloop;
use crate::screen::{App, Ctl, Frame};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCmd {
    Next,
    Prev,
    ResetHighlight,
    Search,
    ToggleDetail,
    PrevChar,
    NextChar,
}

/// Browse the tokenized catalog group by group.
pub struct Explore {
    groups: Groups<'static>,
    cursor: Revolving,
    highlight_pos: usize,
    detail: bool,
}

impl Explore {
    pub fn new() -> Explore {
        let groups = Groups::shared();
        let mut cursor = Revolving::default();
        let items: Vec<String> = groups
            .all_groups()
            .into_iter()
            .map(|(token, recs)| {
                let mut glyphs: Vec<&str> = recs.iter().map(|r| r.chr.as_str()).collect();
                glyphs.sort_unstable();
                format!("{} {}", token, glyphs.join(" "))
            })
            .collect();
        cursor.setup(items);
        Explore {
            groups,
            cursor,
            highlight_pos: 0,
            detail: false,
        }
    }

    /// The screen's bindings, on top of the hidden defaults.
    pub fn nav(&self) -> NavGroup<ExploreCmd> {
        let mut nav = NavGroup::new();
        nav.insert(
            NavItem::app('n', "Next", ExploreCmd::Next)
                .pre(ExploreCmd::ResetHighlight)
                .alias('j'),
        );
        nav.insert(
            NavItem::app('p', "Previous", ExploreCmd::Prev)
                .pre(ExploreCmd::ResetHighlight)
                .alias('k'),
        );
        nav.insert(
            NavItem::app('s', "search start text", ExploreCmd::Search)
                .pre(ExploreCmd::ResetHighlight),
        );
        nav.insert(NavItem::app(
            'd',
            "toggle show all details",
            ExploreCmd::ToggleDetail,
        ));
        nav.insert(
            NavItem::app('h', "previous character", ExploreCmd::PrevChar).alias(Key::Left),
        );
        nav.insert(NavItem::app('l', "next character", ExploreCmd::NextChar).alias(Key::Right));
        nav.insert(NavItem::new(
            'm',
            "toggle mouse interaction",
            NavCmd::ToggleMouse,
        ));
        nav
    }

    /// Enter the blocking event loop.
    pub fn run(&mut self) -> Result<()> {
        let nav = self.nav();
        runloop(self, &nav)
    }

    /// The token of the current group line.
    fn token(&self) -> Option<String> {
        self.cursor
            .current()
            .and_then(|line| line.split_whitespace().next())
            .map(str::to_owned)
    }

    /// Records of the current group, ordered by glyph.
    fn detail_records(&self) -> Vec<&'static Record> {
        let Some(token) = self.token() else {
            return Vec::new();
        };
        let Ok(recs) = self.groups.records(&token) else {
            return Vec::new();
        };
        let mut out: Vec<&Record> = recs.collect();
        out.sort_by(|a, b| a.chr.cmp(&b.chr));
        out
    }

    fn current_record(&self) -> Option<&'static Record> {
        self.detail_records().get(self.highlight_pos).copied()
    }

    fn search(&mut self, ctl: &mut dyn Ctl) -> Result<()> {
        let Some(query) = ctl.input("Search string")? else {
            return Ok(());
        };
        let query = query.to_lowercase();
        let found = self
            .cursor
            .cursor()
            .items()
            .iter()
            .position(|line| line.to_lowercase().starts_with(&query));
        match found {
            Some(idx) => self.cursor.cursor_mut().jump(idx),
            None => self
                .cursor
                .cursor_mut()
                .notify(format!("Could not find anything starting with: '{query}'")),
        }
        Ok(())
    }
}

impl Default for Explore {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Explore {
    type Cmd = ExploreCmd;

    fn body(&mut self, frame: &Frame) -> String {
        let details = self.detail_records();
        let index = self.cursor.cursor().index().unwrap_or(0);

        let glyph_row = details
            .iter()
            .map(|r| r.chr.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let width = (frame.width.saturating_sub(40)).max(20) as usize;
        let wrapped = indent(&textwrap::fill(&glyph_row, width), "  ");

        let detail_block = if self.detail {
            fmt::group_detail("Details:", &details)
        } else {
            match self.current_record() {
                Some(rec) => format!("Details:\n{}", fmt::line(rec)),
                None => "Details:".to_owned(),
            }
        };

        [
            format!(
                "index:{} cur_pos:{} mouse_enabled:{}",
                index, self.highlight_pos, frame.mouse
            ),
            String::new(),
            self.token().unwrap_or_default(),
            wrapped,
            String::new(),
            detail_block,
        ]
        .join("\n")
    }

    fn highlights(&self) -> Vec<String> {
        if self.detail {
            return Vec::new();
        }
        self.current_record()
            .map(|r| vec![r.chr.clone()])
            .unwrap_or_default()
    }

    fn dispatch(&mut self, ctl: &mut dyn Ctl, cmd: &ExploreCmd) -> Result<Outcome> {
        match cmd {
            ExploreCmd::Next => self.cursor.next(),
            ExploreCmd::Prev => self.cursor.prev(),
            ExploreCmd::ResetHighlight => self.highlight_pos = 0,
            ExploreCmd::Search => self.search(ctl)?,
            ExploreCmd::ToggleDetail => self.detail = !self.detail,
            ExploreCmd::NextChar => {
                let len = self.detail_records().len();
                if len > 0 {
                    self.highlight_pos = (self.highlight_pos + 1).min(len - 1);
                }
            }
            ExploreCmd::PrevChar => self.highlight_pos = self.highlight_pos.saturating_sub(1),
        }
        Ok(Outcome::Continue)
    }

    fn mouse(&mut self, hit: &MouseHit) -> Result<()> {
        if hit.word.is_empty() {
            return Ok(());
        }
        if let Some(idx) = self
            .detail_records()
            .iter()
            .position(|r| r.chr == hit.word)
        {
            self.highlight_pos = idx;
        }
        Ok(())
    }

    fn notices(&mut self) -> Vec<String> {
        self.cursor.cursor_mut().take_notices()
    }

    fn notify(&mut self, msg: String) {
        self.cursor.cursor_mut().notify(msg);
    }
}

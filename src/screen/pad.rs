//! The virtual pad: a scrollable buffer of styled text rebuilt from scratch
//! on every state change, projected one viewport at a time onto the physical
//! screen.

use std::collections::HashSet;

use crate::geom::Point;
use crate::nav::Scroll;

/// Hard cap on virtual pad height. Writes past it are discarded rather than
/// failing the redraw.
const PAD_MAX_HEIGHT: usize = 30_000;

/// One styled fragment of a pad line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasis: bool,
}

/// What a mouse click resolved to. Whitespace and out-of-range clicks carry
/// empty strings; they are forwarded, not rejected.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MouseHit {
    pub chr: String,
    pub word: String,
    pub line: String,
}

pub struct Pad {
    lines: Vec<Vec<Span>>,
    width: u16,
    height: u16,
    offset: usize,
}

impl Pad {
    pub fn new(width: u16, height: u16) -> Pad {
        Pad {
            lines: Vec::new(),
            width,
            height,
            offset: 0,
        }
    }

    /// Re-initialize for a new physical size, dropping content and scroll
    /// position. The next redraw repopulates.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.lines.clear();
        self.offset = 0;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Replace the pad content. Each line is split on single spaces so that
    /// column positions survive; a token exactly matching a highlight value
    /// is emitted with the emphasis attribute.
    pub fn set_content(&mut self, text: &str, highlights: &HashSet<String>) {
        self.lines.clear();
        for line in text.lines() {
            if self.lines.len() >= PAD_MAX_HEIGHT {
                break;
            }
            let mut spans = Vec::new();
            for (i, word) in line.split(' ').enumerate() {
                if i > 0 {
                    spans.push(Span {
                        text: " ".to_owned(),
                        emphasis: false,
                    });
                }
                if !word.is_empty() {
                    spans.push(Span {
                        text: word.to_owned(),
                        emphasis: highlights.contains(word),
                    });
                }
            }
            self.lines.push(spans);
        }
        self.clamp();
    }

    /// Scroll by a signed number of lines, clamped to the content.
    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.clamp();
    }

    pub fn apply_scroll(&mut self, s: Scroll) {
        match s {
            Scroll::Top => self.offset = 0,
            Scroll::Bottom => self.offset = usize::MAX,
            Scroll::PageUp => return self.scroll_by(-(self.height as isize)),
            Scroll::PageDown => return self.scroll_by(self.height as isize),
            Scroll::LineUp => return self.scroll_by(-1),
            Scroll::LineDown => return self.scroll_by(1),
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        let max = self.lines.len().saturating_sub(self.height as usize);
        self.offset = self.offset.min(max);
    }

    /// The styled lines currently in view.
    pub fn visible(&self) -> &[Vec<Span>] {
        let end = (self.offset + self.height as usize).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }

    /// The raw text of a virtual row; empty when out of range.
    pub fn line_text(&self, row: usize) -> String {
        self.lines
            .get(row)
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
            .unwrap_or_default()
    }

    /// Resolve a click at physical coordinates to the character, the
    /// whitespace-delimited word containing the column, and the full row.
    pub fn hit(&self, click: Point) -> MouseHit {
        let row = self.offset + click.y as usize;
        let line = self.line_text(row);
        let chars: Vec<char> = line.chars().collect();
        let col = click.x as usize;
        let Some(&ch) = chars.get(col) else {
            return MouseHit::default();
        };
        let word = if ch.is_whitespace() {
            String::new()
        } else {
            let mut start = col;
            while start > 0 && !chars[start - 1].is_whitespace() {
                start -= 1;
            }
            let mut end = col;
            while end < chars.len() && !chars[end].is_whitespace() {
                end += 1;
            }
            chars[start..end].iter().collect()
        };
        MouseHit {
            chr: ch.to_string(),
            word,
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad_with(text: &str) -> Pad {
        let mut pad = Pad::new(80, 5);
        pad.set_content(text, &HashSet::new());
        pad
    }

    #[test]
    fn hit_resolves_words_and_whitespace() {
        let pad = pad_with("ab cd  ef");
        assert_eq!(pad.hit(Point { x: 1, y: 0 }).word, "ab");
        assert_eq!(pad.hit(Point { x: 3, y: 0 }).word, "cd");
        // A click on whitespace resolves to an empty word.
        assert_eq!(pad.hit(Point { x: 5, y: 0 }).word, "");
        assert_eq!(pad.hit(Point { x: 5, y: 0 }).chr, " ");
        assert_eq!(pad.hit(Point { x: 7, y: 0 }).word, "ef");
    }

    #[test]
    fn hit_out_of_range_is_empty() {
        let pad = pad_with("ab");
        let hit = pad.hit(Point { x: 40, y: 0 });
        assert_eq!(hit, MouseHit::default());
        assert_eq!(pad.hit(Point { x: 0, y: 4 }), MouseHit::default());
    }

    #[test]
    fn hit_respects_scroll_offset() {
        let text: Vec<String> = (0..20).map(|i| format!("row{i}")).collect();
        let mut pad = Pad::new(80, 5);
        pad.set_content(&text.join("\n"), &HashSet::new());
        pad.scroll_by(10);
        assert_eq!(pad.hit(Point { x: 0, y: 0 }).word, "row10");
    }

    #[test]
    fn scroll_clamps_to_content() {
        let text: Vec<String> = (0..20).map(|i| format!("row{i}")).collect();
        let mut pad = Pad::new(80, 5);
        pad.set_content(&text.join("\n"), &HashSet::new());
        pad.scroll_by(-10);
        assert_eq!(pad.offset(), 0);
        pad.scroll_by(1000);
        assert_eq!(pad.offset(), 15);
        pad.apply_scroll(Scroll::Top);
        assert_eq!(pad.offset(), 0);
        pad.apply_scroll(Scroll::Bottom);
        assert_eq!(pad.offset(), 15);
        pad.apply_scroll(Scroll::PageUp);
        assert_eq!(pad.offset(), 10);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut pad = pad_with("one\ntwo");
        pad.apply_scroll(Scroll::Bottom);
        assert_eq!(pad.offset(), 0);
        pad.apply_scroll(Scroll::LineDown);
        assert_eq!(pad.offset(), 0);
    }

    #[test]
    fn highlight_marks_exact_tokens_only() {
        let mut pad = Pad::new(80, 5);
        let mut hl = HashSet::new();
        hl.insert("cd".to_owned());
        pad.set_content("ab cd cde", &hl);
        let spans = &pad.visible()[0];
        let flags: Vec<(&str, bool)> = spans
            .iter()
            .map(|s| (s.text.as_str(), s.emphasis))
            .collect();
        assert!(flags.contains(&("cd", true)));
        assert!(flags.contains(&("ab", false)));
        assert!(flags.contains(&("cde", false)));
    }

    #[test]
    fn column_positions_survive_multiple_spaces() {
        let pad = pad_with("ab  cd");
        assert_eq!(pad.line_text(0), "ab  cd");
        assert_eq!(pad.hit(Point { x: 4, y: 0 }).word, "cd");
    }

    #[test]
    fn visible_window_tracks_offset() {
        let text: Vec<String> = (0..8).map(|i| format!("r{i}")).collect();
        let mut pad = Pad::new(80, 3);
        pad.set_content(&text.join("\n"), &HashSet::new());
        pad.scroll_by(2);
        let rows: Vec<String> = pad
            .visible()
            .iter()
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
            .collect();
        assert_eq!(rows, vec!["r2", "r3", "r4"]);
    }
}

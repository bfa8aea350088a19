//! Bidirectional cursor disciplines over a result collection. One shared
//! state holder, one interface, three behaviors at the boundaries: clamp,
//! wrap around, or grow lazily through a generator hook.

use std::collections::HashSet;

/// Per-session cursor state shared by every discipline. Boundary conditions
/// append advisory notices here; they are shown on the next redraw and are
/// not errors.
#[derive(Debug, Default)]
pub struct Cursor {
    items: Vec<String>,
    index: Option<usize>,
    notices: Vec<String>,
}

impl Cursor {
    pub fn new() -> Cursor {
        Cursor::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cursor position; `None` until a lazily-grown collection produces
    /// its first entry.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.items.get(self.index?).map(String::as_str)
    }

    /// Jump to a position, ignored when out of range.
    pub fn jump(&mut self, index: usize) {
        if index < self.items.len() {
            self.index = Some(index);
        }
    }

    /// Overwrite the entry under the cursor.
    pub fn replace_current(&mut self, value: String) {
        if let Some(i) = self.index {
            self.items[i] = value;
        }
    }

    pub fn notify(&mut self, msg: impl Into<String>) {
        self.notices.push(msg.into());
    }

    /// Drain pending notices for display.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn set_items(&mut self, items: Vec<String>) {
        self.index = if items.is_empty() { None } else { Some(0) };
        self.items = items;
    }

    fn push(&mut self, value: String) {
        self.items.push(value);
        self.index = Some(self.items.len() - 1);
    }
}

/// The discipline interface: populate, step, and read the cursor.
pub trait Navigator {
    fn cursor(&self) -> &Cursor;
    fn cursor_mut(&mut self) -> &mut Cursor;
    fn setup(&mut self, items: Vec<String>);
    fn next(&mut self);
    fn prev(&mut self);

    fn current(&self) -> Option<&str> {
        self.cursor().current()
    }
}

/// Stops at both ends, noting "no next/previous entry".
#[derive(Debug, Default)]
pub struct Clamped {
    cur: Cursor,
}

impl Navigator for Clamped {
    fn cursor(&self) -> &Cursor {
        &self.cur
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cur
    }

    fn setup(&mut self, items: Vec<String>) {
        self.cur.set_items(items);
    }

    fn next(&mut self) {
        match self.cur.index() {
            Some(i) if i + 1 < self.cur.len() => self.cur.index = Some(i + 1),
            _ => self.cur.notify("No next entry"),
        }
    }

    fn prev(&mut self) {
        match self.cur.index() {
            Some(i) if i > 0 => self.cur.index = Some(i - 1),
            _ => self.cur.notify("No previous entry"),
        }
    }
}

/// Wraps around at both ends.
#[derive(Debug, Default)]
pub struct Revolving {
    cur: Cursor,
}

impl Navigator for Revolving {
    fn cursor(&self) -> &Cursor {
        &self.cur
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cur
    }

    fn setup(&mut self, items: Vec<String>) {
        self.cur.set_items(items);
    }

    fn next(&mut self) {
        if let Some(i) = self.cur.index() {
            self.cur.index = Some(if i + 1 == self.cur.len() { 0 } else { i + 1 });
        }
    }

    fn prev(&mut self) {
        if let Some(i) = self.cur.index() {
            self.cur.index = Some(if i == 0 { self.cur.len() - 1 } else { i - 1 });
        }
    }
}

/// Produces one new entry for a lazily-grown collection.
pub trait Generate {
    fn generate(&mut self) -> String;
}

/// Starts empty and grows through the generator when stepped past the end.
/// Previously generated values are tracked; a duplicate leaves the cursor
/// untouched and notes exhaustion.
pub struct Growing<G: Generate> {
    cur: Cursor,
    seen: HashSet<String>,
    generator: G,
}

impl<G: Generate> Growing<G> {
    pub fn new(generator: G) -> Growing<G> {
        Growing {
            cur: Cursor::new(),
            seen: HashSet::new(),
            generator,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Forget the collection and the dedup history; the next step generates
    /// afresh.
    pub fn reset(&mut self) {
        self.cur.set_items(Vec::new());
        self.seen.clear();
    }

    fn grow(&mut self) {
        let value = self.generator.generate();
        if !self.seen.insert(value.clone()) {
            self.cur.notify(format!(
                "{value} has been seen before, try again (possibly ran out of values)"
            ));
            return;
        }
        self.cur.push(value);
    }
}

impl<G: Generate> Navigator for Growing<G> {
    fn cursor(&self) -> &Cursor {
        &self.cur
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cur
    }

    fn setup(&mut self, items: Vec<String>) {
        self.seen.extend(items.iter().cloned());
        self.cur.set_items(items);
    }

    fn next(&mut self) {
        match self.cur.index() {
            Some(i) if i + 1 < self.cur.len() => self.cur.index = Some(i + 1),
            _ => self.grow(),
        }
    }

    fn prev(&mut self) {
        match self.cur.index() {
            Some(i) if i > 0 => self.cur.index = Some(i - 1),
            _ => self.cur.notify("No previous entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item{i}")).collect()
    }

    #[test]
    fn clamped_stops_and_notes() {
        let mut nav = Clamped::default();
        nav.setup(items(3));
        assert_eq!(nav.current(), Some("item0"));
        nav.next();
        nav.next();
        assert_eq!(nav.cursor().index(), Some(2));
        // Each step past the end appends exactly one notice.
        nav.next();
        nav.next();
        assert_eq!(nav.cursor().index(), Some(2));
        assert_eq!(
            nav.cursor_mut().take_notices(),
            vec!["No next entry", "No next entry"]
        );
        nav.prev();
        nav.prev();
        nav.prev();
        assert_eq!(nav.cursor().index(), Some(0));
        assert_eq!(nav.cursor_mut().take_notices(), vec!["No previous entry"]);
    }

    #[test]
    fn revolving_wraps_both_ways() {
        let n = 5;
        let mut nav = Revolving::default();
        nav.setup(items(n));
        for _ in 0..n {
            nav.next();
        }
        assert_eq!(nav.cursor().index(), Some(0));
        nav.prev();
        assert_eq!(nav.cursor().index(), Some(n - 1));
    }

    struct Fixed {
        vals: Vec<&'static str>,
        at: usize,
    }

    impl Generate for Fixed {
        fn generate(&mut self) -> String {
            let v = self.vals[self.at % self.vals.len()];
            self.at += 1;
            v.to_owned()
        }
    }

    #[test]
    fn growing_starts_at_sentinel_and_grows() {
        let mut nav = Growing::new(Fixed {
            vals: vec!["a", "b"],
            at: 0,
        });
        assert_eq!(nav.cursor().index(), None);
        nav.next();
        assert_eq!(nav.current(), Some("a"));
        nav.next();
        assert_eq!(nav.current(), Some("b"));
        assert_eq!(nav.cursor().len(), 2);
    }

    #[test]
    fn growing_duplicate_is_exhaustion_not_growth() {
        let mut nav = Growing::new(Fixed {
            vals: vec!["a", "b"],
            at: 0,
        });
        nav.next();
        nav.next();
        // Generator cycles back to "a": no advance, no append, one notice.
        nav.next();
        assert_eq!(nav.cursor().index(), Some(1));
        assert_eq!(nav.cursor().len(), 2);
        let notices = nav.cursor_mut().take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("seen before"));
    }

    #[test]
    fn growing_prev_below_zero_notes() {
        let mut nav = Growing::new(Fixed {
            vals: vec!["a"],
            at: 0,
        });
        nav.prev();
        assert_eq!(nav.cursor().index(), None);
        nav.next();
        nav.prev();
        assert_eq!(nav.cursor().index(), Some(0));
        assert_eq!(nav.cursor_mut().take_notices().len(), 2);
    }

    #[test]
    fn growing_interior_next_does_not_generate() {
        let mut nav = Growing::new(Fixed {
            vals: vec!["a", "b", "c"],
            at: 0,
        });
        nav.next();
        nav.next();
        nav.prev();
        nav.next();
        // Stepping back over known ground consumes nothing new.
        assert_eq!(nav.cursor().len(), 2);
        assert_eq!(nav.current(), Some("b"));
    }
}

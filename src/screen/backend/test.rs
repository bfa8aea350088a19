use super::Backend;
use crate::Result;
use crate::geom::Point;

/// An in-memory backend recording every write, for asserting on rendered
/// output without a terminal.
#[derive(Default)]
pub struct TestRender {
    writes: Vec<(Point, String, bool)>,
    emphasis: bool,
    pub clears: usize,
    pub flushes: usize,
}

impl TestRender {
    pub fn new() -> TestRender {
        TestRender::default()
    }

    /// Reconstruct the visible rows from the recorded writes.
    pub fn lines(&self) -> Vec<String> {
        let rows = self
            .writes
            .iter()
            .map(|(p, _, _)| p.y as usize + 1)
            .max()
            .unwrap_or(0);
        let mut out = vec![String::new(); rows];
        let mut writes = self.writes.clone();
        writes.sort_by_key(|(p, _, _)| (p.y, p.x));
        for (p, txt, _) in writes {
            let line = &mut out[p.y as usize];
            while line.chars().count() < p.x as usize {
                line.push(' ');
            }
            line.push_str(&txt);
        }
        out
    }

    /// Every fragment written with the emphasis attribute on.
    pub fn emphasized(&self) -> Vec<String> {
        self.writes
            .iter()
            .filter(|(_, _, e)| *e)
            .map(|(_, t, _)| t.clone())
            .collect()
    }
}

impl Backend for TestRender {
    fn clear(&mut self) -> Result<()> {
        self.writes.clear();
        self.clears += 1;
        Ok(())
    }

    fn emphasis(&mut self, on: bool) -> Result<()> {
        self.emphasis = on;
        Ok(())
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        self.writes.push((loc, txt.to_owned(), self.emphasis));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

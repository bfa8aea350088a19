pub mod crossterm;
pub mod test;

use crate::Result;
use crate::geom::Point;

/// Render sink for the pad. The interactive session drives the crossterm
/// implementation; tests drive the in-memory one.
pub trait Backend {
    fn clear(&mut self) -> Result<()>;
    /// Toggle the visual emphasis attribute for subsequent text.
    fn emphasis(&mut self, on: bool) -> Result<()>;
    fn text(&mut self, loc: Point, txt: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

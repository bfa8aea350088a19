use std::io::Write;

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use super::Backend;
use crate::Result;
use crate::geom::Point;

/// Renders to stdout. Diagnostics go to stderr, so tracing output never
/// corrupts the pad.
pub struct Crossterm {
    fp: std::io::Stdout,
}

impl Default for Crossterm {
    fn default() -> Crossterm {
        Crossterm {
            fp: std::io::stdout(),
        }
    }
}

impl Backend for Crossterm {
    fn clear(&mut self) -> Result<()> {
        self.fp.queue(Clear(ClearType::All))?;
        Ok(())
    }

    fn emphasis(&mut self, on: bool) -> Result<()> {
        if on {
            self.fp.queue(SetAttribute(Attribute::Reverse))?;
        } else {
            self.fp.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        self.fp.queue(MoveTo(loc.x, loc.y))?;
        self.fp.queue(Print(txt))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.fp.flush()?;
        Ok(())
    }
}

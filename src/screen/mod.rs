//! The interactive session framework: the screen interface, the full-redraw
//! renderer, and the blocking event loop.

pub mod backend;
pub mod pad;
pub mod runloop;

use std::collections::HashSet;

use self::backend::Backend;
use self::pad::{MouseHit, Pad};

use crate::Result;
use crate::fmt::tab_shift;
use crate::geom::Point;
use crate::nav::NavGroup;
use crate::outcome::Outcome;

/// Viewport geometry and session flags available while building the body.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub mouse: bool,
}

/// Terminal services handed to screen commands that need more than state
/// mutation.
pub trait Ctl {
    /// Prompt for one line of input; `None` when cancelled.
    fn input(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// An interactive screen driven by the event loop. The renderer owns the
/// surrounding chrome; the screen supplies the body, highlight set, notices,
/// and command handling.
pub trait App {
    type Cmd: Clone;

    /// The screen body: header and content. Notices and the key legend are
    /// appended by the renderer.
    fn body(&mut self, frame: &Frame) -> String;

    /// Tokens to emphasize on this redraw.
    fn highlights(&self) -> Vec<String>;

    /// Handle one screen command.
    fn dispatch(&mut self, ctl: &mut dyn Ctl, cmd: &Self::Cmd) -> Result<Outcome>;

    /// Handle a resolved mouse click.
    fn mouse(&mut self, hit: &MouseHit) -> Result<()>;

    /// Drain pending advisory notices.
    fn notices(&mut self) -> Vec<String>;

    /// Record an advisory notice.
    fn notify(&mut self, msg: String);
}

/// Full redraw: rebuild the menu text, load it into the pad with the current
/// highlight set, and project the visible window onto the backend.
pub fn redraw<A: App>(
    app: &mut A,
    nav: &NavGroup<A::Cmd>,
    frame: &Frame,
    pad: &mut Pad,
    be: &mut dyn Backend,
) -> Result<()> {
    let mut block = app.body(frame);
    let notices = app.notices();
    if !notices.is_empty() {
        block.push('\n');
        block.push_str(&notices.join("\n"));
    }
    block.push('\n');
    block.push_str(&nav.legend());

    // A blank top line, a one-column left margin, and no raw NULs on the wire.
    let text = format!("\n{}", tab_shift(&block, 1)).replace('\0', "NULL");
    let highlights: HashSet<String> = app.highlights().into_iter().collect();
    pad.set_content(&text, &highlights);

    be.clear()?;
    for (row, spans) in pad.visible().iter().enumerate() {
        let mut x = 0u16;
        for span in spans {
            be.emphasis(span.emphasis)?;
            be.text(
                Point {
                    x,
                    y: row as u16,
                },
                &span.text,
            )?;
            x = x.saturating_add(span.text.chars().count() as u16);
        }
    }
    be.emphasis(false)?;
    be.flush()
}

//! Terminal session lifecycle and the blocking event loop. Setup mirrors
//! teardown on every exit path: normal quit, error, and panic.

use std::panic;

use color_backtrace::{BacktracePrinter, default_output_stream};
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
    },
};
use pad::PadStr;
use scopeguard::defer;
use tracing::debug;

use super::backend::Backend;
use super::backend::crossterm::Crossterm;
use super::pad::Pad;
use super::{App, Ctl, Frame, redraw};
use crate::Result;
use crate::event::{Event, EventSource, Key};
use crate::geom::Point;
use crate::nav::{NavCmd, NavGroup};
use crate::outcome::Outcome;

/// Run a screen to completion: enter the terminal session, block on input,
/// dispatch through the binding registry, redraw, and restore the terminal
/// before printing the farewell line.
pub fn runloop<A: App>(app: &mut A, nav: &NavGroup<A::Cmd>) -> Result<()> {
    enable_raw_mode()?;
    let res = {
        defer! {
            restore();
        }
        execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        panic::set_hook(Box::new(|pi| {
            restore();
            BacktracePrinter::new().print_panic_info(pi, &mut default_output_stream());
        }));
        event_loop(app, nav)
    };
    let _ = panic::take_hook();
    res?;
    println!("Bye!");
    Ok(())
}

fn restore() {
    let mut out = std::io::stdout();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    let _ = disable_raw_mode();
}

struct TermCtl<'a> {
    events: &'a EventSource,
    be: &'a mut Crossterm,
}

impl Ctl for TermCtl<'_> {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut buf = String::new();
        loop {
            let line = format!(" {prompt}: {buf}_").pad_to_width(60);
            self.be.text(Point { x: 0, y: 0 }, &line)?;
            self.be.flush()?;
            match self.events.next()? {
                Event::Key(Key::Enter) => return Ok(Some(buf)),
                Event::Key(Key::Esc) => return Ok(None),
                Event::Key(Key::Backspace) => {
                    buf.pop();
                }
                Event::Key(Key::Char(c)) => buf.push(c),
                _ => {}
            }
        }
    }
}

fn event_loop<A: App>(app: &mut A, nav: &NavGroup<A::Cmd>) -> Result<()> {
    let mut be = Crossterm::default();
    let events = EventSource::new();
    let (w, h) = size()?;
    let mut frame = Frame {
        width: w,
        height: h,
        mouse: true,
    };
    let mut pad = Pad::new(w, h);
    let mut last_click = Point::default();
    redraw(app, nav, &frame, &mut pad, &mut be)?;

    loop {
        let key = match events.next()? {
            Event::Key(k) => k,
            Event::Mouse(p) => {
                last_click = p;
                Key::Mouse
            }
            Event::Resize(w, h) => {
                frame.width = w;
                frame.height = h;
                Key::Resize
            }
        };
        debug!(%key, "input");

        let Some(item) = nav.resolve(key) else {
            app.notify(format!("Invalid key / {key}"));
            redraw(app, nav, &frame, &mut pad, &mut be)?;
            continue;
        };

        let mut ctl = TermCtl {
            events: &events,
            be: &mut be,
        };
        for cmd in item.pre_cmds() {
            app.dispatch(&mut ctl, cmd)?;
        }
        match item.cmd() {
            NavCmd::Quit => break,
            NavCmd::Scroll(s) => pad.apply_scroll(*s),
            NavCmd::Resize => {
                let (w, h) = size()?;
                frame.width = w;
                frame.height = h;
                pad.resize(w, h);
            }
            NavCmd::Mouse => {
                if frame.mouse {
                    let hit = pad.hit(last_click);
                    app.mouse(&hit)?;
                }
            }
            NavCmd::ToggleMouse => {
                frame.mouse = !frame.mouse;
                if frame.mouse {
                    execute!(std::io::stdout(), EnableMouseCapture)?;
                } else {
                    execute!(std::io::stdout(), DisableMouseCapture)?;
                }
            }
            NavCmd::App(cmd) => {
                if app.dispatch(&mut ctl, cmd)? == Outcome::Exit {
                    break;
                }
            }
        }
        redraw(app, nav, &frame, &mut pad, &mut be)?;
    }
    Ok(())
}

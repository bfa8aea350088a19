//! Input events, translated from the terminal capability layer into the
//! small vocabulary the navigation framework understands.

pub mod key;

pub use key::Key;

use crossterm::event::{
    self as cevent, Event as CEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
};

use crate::Result;
use crate::geom::Point;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    Key(Key),
    /// A left-button press at a screen location.
    Mouse(Point),
    Resize(u16, u16),
}

/// The session's single blocking wait point. `next` parks on the terminal
/// until an event we care about arrives.
#[derive(Default)]
pub struct EventSource;

impl EventSource {
    pub fn new() -> EventSource {
        EventSource
    }

    pub fn next(&self) -> Result<Event> {
        loop {
            match cevent::read()? {
                CEvent::Key(k) if k.kind != KeyEventKind::Release => {
                    if let Some(key) = translate(k.code) {
                        return Ok(Event::Key(key));
                    }
                }
                CEvent::Mouse(m) => match m.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        return Ok(Event::Mouse(Point {
                            x: m.column,
                            y: m.row,
                        }));
                    }
                    MouseEventKind::ScrollUp => return Ok(Event::Key(Key::Up)),
                    MouseEventKind::ScrollDown => return Ok(Event::Key(Key::Down)),
                    _ => {}
                },
                CEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                _ => {}
            }
        }
    }
}

fn translate(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Null => Key::Null,
        _ => return None,
    })
}

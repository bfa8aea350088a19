//! End-to-end redraw assertions: a small screen over a clamped cursor,
//! rendered through the in-memory backend.

use unidex::nav::{NavGroup, NavItem};
use unidex::navigator::{Clamped, Navigator};
use unidex::screen::backend::test::TestRender;
use unidex::screen::pad::{MouseHit, Pad};
use unidex::screen::{App, Ctl, Frame, redraw};
use unidex::{Outcome, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cmd {
    Next,
    Prev,
}

struct Demo {
    cursor: Clamped,
    highlight: Option<String>,
}

impl Demo {
    fn new(items: &[&str]) -> Demo {
        let mut cursor = Clamped::default();
        cursor.setup(items.iter().map(|s| (*s).to_owned()).collect());
        Demo {
            cursor,
            highlight: None,
        }
    }

    fn nav() -> NavGroup<Cmd> {
        let mut nav = NavGroup::new();
        nav.insert(NavItem::app('n', "Next", Cmd::Next));
        nav.insert(NavItem::app('p', "Previous", Cmd::Prev));
        nav
    }
}

impl App for Demo {
    type Cmd = Cmd;

    fn body(&mut self, _frame: &Frame) -> String {
        format!(
            "index:{}\n\n{}",
            self.cursor.cursor().index().unwrap_or(0),
            self.cursor.current().unwrap_or("")
        )
    }

    fn highlights(&self) -> Vec<String> {
        self.highlight.iter().cloned().collect()
    }

    fn dispatch(&mut self, _ctl: &mut dyn Ctl, cmd: &Cmd) -> Result<Outcome> {
        match cmd {
            Cmd::Next => self.cursor.next(),
            Cmd::Prev => self.cursor.prev(),
        }
        Ok(Outcome::Continue)
    }

    fn mouse(&mut self, hit: &MouseHit) -> Result<()> {
        if !hit.word.is_empty() {
            self.highlight = Some(hit.word.clone());
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

fn frame() -> Frame {
    Frame {
        width: 80,
        height: 24,
        mouse: true,
    }
}

#[test]
fn redraw_renders_body_and_legend() -> Result<()> {
    let mut app = Demo::new(&["first entry", "second entry"]);
    let nav = Demo::nav();
    let mut pad = Pad::new(80, 24);
    let mut be = TestRender::new();
    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;

    let lines = be.lines();
    // Blank top line, then the one-column margin on every content row.
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], " index:0");
    assert!(lines.iter().any(|l| l.contains("first entry")));
    assert!(lines.iter().any(|l| l.contains("Make Selection:")));
    assert!(lines.iter().any(|l| l.contains("(n)")));
    // Hidden defaults stay out of the legend.
    assert!(!lines.iter().any(|l| l.contains("page up")));
    assert_eq!(be.flushes, 1);
    Ok(())
}

#[test]
fn notices_render_once_then_drain() -> Result<()> {
    let mut app = Demo::new(&["only"]);
    let nav = Demo::nav();
    let mut pad = Pad::new(80, 24);
    let mut be = TestRender::new();

    app.notify("Invalid key / x".to_owned());
    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;
    assert!(be.lines().iter().any(|l| l.contains("Invalid key / x")));

    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;
    assert!(!be.lines().iter().any(|l| l.contains("Invalid key / x")));
    Ok(())
}

#[test]
fn boundary_notice_appears_after_dispatch() -> Result<()> {
    struct NoCtl;
    impl Ctl for NoCtl {
        fn input(&mut self, _prompt: &str) -> Result<Option<String>> {
            Ok(None)
        }
    }

    let mut app = Demo::new(&["only"]);
    let nav = Demo::nav();
    let mut pad = Pad::new(80, 24);
    let mut be = TestRender::new();

    app.dispatch(&mut NoCtl, &Cmd::Next)?;
    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;
    assert!(be.lines().iter().any(|l| l.contains("No next entry")));
    Ok(())
}

#[test]
fn highlight_tokens_render_emphasized() -> Result<()> {
    let mut app = Demo::new(&["alpha beta gamma"]);
    app.highlight = Some("beta".to_owned());
    let nav = Demo::nav();
    let mut pad = Pad::new(80, 24);
    let mut be = TestRender::new();
    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;

    assert_eq!(be.emphasized(), vec!["beta".to_owned()]);
    Ok(())
}

#[test]
fn click_resolves_to_word_and_sets_highlight() -> Result<()> {
    let mut app = Demo::new(&["alpha beta gamma"]);
    let nav = Demo::nav();
    let mut pad = Pad::new(80, 24);
    let mut be = TestRender::new();
    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;

    // The current value renders on virtual row 3 ("\n" + header + blank),
    // shifted one column right.
    let row = pad.line_text(3);
    assert_eq!(row, " alpha beta gamma");
    let hit = pad.hit(unidex::geom::Point { x: 7, y: 3 });
    assert_eq!(hit.word, "beta");
    app.mouse(&hit)?;

    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;
    assert_eq!(be.emphasized(), vec!["beta".to_owned()]);
    Ok(())
}

#[test]
fn small_viewport_scrolls_and_clamps() -> Result<()> {
    let mut app = Demo::new(&["entry"]);
    let nav = Demo::nav();
    let mut pad = Pad::new(80, 3);
    let mut be = TestRender::new();
    redraw(&mut app, &nav, &frame(), &mut pad, &mut be)?;

    assert!(pad.total_lines() > 3);
    pad.apply_scroll(unidex::Scroll::Bottom);
    assert_eq!(pad.offset(), pad.total_lines() - 3);
    pad.apply_scroll(unidex::Scroll::Top);
    assert_eq!(pad.offset(), 0);
    Ok(())
}

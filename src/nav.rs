//! The key-binding registry: immutable binding items built with a builder,
//! grouped per screen, resolved by direct key match with a linear alias
//! fallback.

use pad::PadStr;

use crate::event::Key;

const SEP: &str = "    ";

/// Scroll motions owned by the hidden default bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Top,
    Bottom,
    PageUp,
    PageDown,
    LineUp,
    LineDown,
}

/// What a resolved binding asks the session to do. `App` commands are
/// interpreted by the screen's dispatch; the rest belong to the framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCmd<C> {
    Quit,
    Scroll(Scroll),
    Resize,
    Mouse,
    ToggleMouse,
    App(C),
}

/// One key binding: a primary command, optional pre-commands run first, and
/// alias keys. Built once, immutable afterwards.
pub struct NavItem<C> {
    key: Key,
    description: String,
    cmd: NavCmd<C>,
    pre: Vec<C>,
    aliases: Vec<Key>,
    hidden: bool,
}

impl<C> NavItem<C> {
    pub fn new(key: impl Into<Key>, description: &str, cmd: NavCmd<C>) -> NavItem<C> {
        NavItem {
            key: key.into(),
            description: description.to_owned(),
            cmd,
            pre: Vec::new(),
            aliases: Vec::new(),
            hidden: false,
        }
    }

    /// A binding for a screen command.
    pub fn app(key: impl Into<Key>, description: &str, cmd: C) -> NavItem<C> {
        NavItem::new(key, description, NavCmd::App(cmd))
    }

    /// Add an alias key resolved by the fallback scan.
    pub fn alias(mut self, key: impl Into<Key>) -> Self {
        self.aliases.push(key.into());
        self
    }

    /// Add a pre-command run before the primary command, in registration
    /// order.
    pub fn pre(mut self, cmd: C) -> Self {
        self.pre.push(cmd);
        self
    }

    /// Omit this binding from the legend.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn cmd(&self) -> &NavCmd<C> {
        &self.cmd
    }

    pub fn pre_cmds(&self) -> &[C] {
        &self.pre
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// A screen's bindings. Keys are unique (inserting an existing key replaces
/// its item); registration order drives the legend. Every group is seeded
/// with the hidden default set: quit plus the scroll/resize/mouse bindings.
pub struct NavGroup<C> {
    items: Vec<NavItem<C>>,
}

impl<C> Default for NavGroup<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> NavGroup<C> {
    pub fn new() -> NavGroup<C> {
        let mut g = NavGroup { items: Vec::new() };
        g.insert(NavItem::new('q', "Quit", NavCmd::Quit).hidden());
        g.insert(NavItem::new(Key::Mouse, "mouse", NavCmd::Mouse).hidden());
        g.insert(NavItem::new(Key::Resize, "resize", NavCmd::Resize).hidden());
        g.insert(NavItem::new(Key::Home, "top", NavCmd::Scroll(Scroll::Top)).hidden());
        g.insert(NavItem::new(Key::End, "bottom", NavCmd::Scroll(Scroll::Bottom)).hidden());
        g.insert(NavItem::new(Key::PageUp, "page up", NavCmd::Scroll(Scroll::PageUp)).hidden());
        g.insert(
            NavItem::new(Key::PageDown, "page down", NavCmd::Scroll(Scroll::PageDown)).hidden(),
        );
        g.insert(NavItem::new(Key::Up, "up", NavCmd::Scroll(Scroll::LineUp)).hidden());
        g.insert(NavItem::new(Key::Down, "down", NavCmd::Scroll(Scroll::LineDown)).hidden());
        g
    }

    /// Add a binding, replacing any existing item with the same key.
    pub fn insert(&mut self, item: NavItem<C>) -> &mut Self {
        if let Some(slot) = self.items.iter_mut().find(|i| i.key == item.key) {
            *slot = item;
        } else {
            self.items.push(item);
        }
        self
    }

    /// Drop the binding for a key, freeing it for reuse.
    pub fn remove(&mut self, key: Key) -> Option<NavItem<C>> {
        let pos = self.items.iter().position(|i| i.key == key)?;
        Some(self.items.remove(pos))
    }

    /// Resolve an input code: direct key match first, then a linear scan of
    /// aliases.
    pub fn resolve(&self, key: Key) -> Option<&NavItem<C>> {
        self.items
            .iter()
            .find(|i| i.key == key)
            .or_else(|| self.items.iter().find(|i| i.aliases.contains(&key)))
    }

    /// The key legend shown at the bottom of every screen. Hidden items are
    /// omitted.
    pub fn legend(&self) -> String {
        let vis: Vec<(String, &str)> = self
            .items
            .iter()
            .filter(|i| !i.hidden)
            .map(|i| (format!("({})", i.key), i.description.as_str()))
            .collect();
        let width = vis.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let lines: Vec<String> = vis
            .iter()
            .map(|(k, d)| format!("{} {}", k.pad_to_width(width), d))
            .collect();
        format!("Make Selection:\n{SEP}{}", lines.join(&format!("\n{SEP}")))
    }
}

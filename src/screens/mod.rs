//! The CLI-facing screens: two interactive browsers and the stdout
//! formatters.

pub mod all;
pub mod explore;
pub mod groups;
pub mod hackermix;
pub mod pairs;

pub use explore::Explore;
pub use hackermix::Hackermix;

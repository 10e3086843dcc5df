//! Presentation side of the shopping list.
//!
//! - config/: reference lists and fuzzy-filter tolerance
//! - setup/: dependency wiring and the scripted demo run
//! - session/: the command/view facade a rendering surface talks to

pub mod config;
pub mod session;
pub mod setup;

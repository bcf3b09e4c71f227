//! Command-line interface module.

mod args;
pub mod background;
pub mod icon;
pub mod tray;

pub use args::{Cli, Commands};

//! Icon assets derived from a single source image.
//!
//! - [`squircle`]: 1024px app icon clipped to a rounded square
//! - [`tray`]: 32px menu-bar / tray icon

pub mod squircle;
pub mod tray;

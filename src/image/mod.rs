//! Image processing.
//!
//! # Modules
//!
//! - [`backdrop`]: DMG installer background composer
//! - [`icon`]: App icon masking and tray icon resizing
//! - [`draw`]: Shape rasterization, compositing and blur
//! - [`io`]: PNG load/save with path-aware errors

pub mod backdrop;
pub mod draw;
pub mod icon;
pub mod io;

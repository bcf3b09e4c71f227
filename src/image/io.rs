//! Decode and encode helpers with path-carrying errors.

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::AssetError;

/// Decode `path` into an RGBA buffer.
///
/// A missing file is reported as [`AssetError::MissingInput`] so callers can
/// tell "nothing to read" apart from "unreadable data".
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::MissingInput(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|e| AssetError::Decode(path.to_path_buf(), e))?;
    Ok(img.to_rgba8())
}

/// Write `img` as PNG, creating parent directories as needed.
///
/// Existing files are overwritten.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), AssetError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| AssetError::Io(parent.to_path_buf(), e))?;
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| AssetError::Encode(path.to_path_buf(), e))
}

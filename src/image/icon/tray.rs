//! Menu-bar tray icon.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::error::AssetError;
use crate::image::io::{load_rgba, save_png};

/// Tray icons are a fixed 32x32.
pub const TRAY_ICON_SIZE: u32 = 32;

/// Resize to [`TRAY_ICON_SIZE`] square. Aspect ratio is not preserved.
pub fn resize_tray_icon(src: &RgbaImage) -> RgbaImage {
    imageops::resize(src, TRAY_ICON_SIZE, TRAY_ICON_SIZE, FilterType::Lanczos3)
}

/// Read `source`, resize it and overwrite `dest`.
///
/// `dest` may be the same path as `source`.
pub fn generate_tray_icon(source: &Path, dest: &Path) -> Result<(), AssetError> {
    let src = load_rgba(source)?;
    save_png(&resize_tray_icon(&src), dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_non_square_source_becomes_32x32() {
        let src = RgbaImage::from_pixel(128, 64, Rgba([0, 0, 0, 255]));
        assert_eq!(resize_tray_icon(&src).dimensions(), (32, 32));
    }

    #[test]
    fn test_overwrites_source_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tray_icon.png");
        save_png(&RgbaImage::from_pixel(256, 256, Rgba([255, 0, 0, 255])), &path).unwrap();

        generate_tray_icon(&path, &path).unwrap();

        let out = load_rgba(&path).unwrap();
        assert_eq!(out.dimensions(), (32, 32));
        assert_eq!(out.get_pixel(16, 16), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_missing_source_is_an_error_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tray_icon.png");

        let err = generate_tray_icon(&path, &path).unwrap_err();
        assert!(err.is_missing_input());
        assert!(!path.exists());
    }
}

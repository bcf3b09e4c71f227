//! `assetkit tray-icon`: 32x32 tray icon.

use std::path::Path;

use anyhow::{Context, Result};

use crate::image::icon::tray::generate_tray_icon;
use crate::log;
use crate::logger::status_success;
use crate::project::ProjectPaths;
use crate::utils::path::expand_user_path;

/// Resize `source` (default `<root>/assets/images/logo.png`) into
/// `<root>/assets/images/tray_icon.png`.
pub fn run(paths: &ProjectPaths, source: Option<&Path>) -> Result<()> {
    let source = source.map_or_else(|| paths.logo(), |p| expand_user_path(p, paths.root()));
    let dest = paths.tray_icon();

    log!("tray"; "generating tray icon from {}", source.display());
    generate_tray_icon(&source, &dest).context("failed to generate tray icon")?;
    log!("tray"; "saved {}", dest.display());

    status_success("tray icon generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::io::{load_rgba, save_png};
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_logo_in_project() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());
        save_png(&RgbaImage::from_pixel(512, 512, Rgba([1, 2, 3, 255])), &paths.logo()).unwrap();

        run(&paths, None).unwrap();

        assert_eq!(load_rgba(&paths.tray_icon()).unwrap().dimensions(), (32, 32));
    }

    #[test]
    fn test_missing_source_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path());

        let err = run(&paths, Some(Path::new("does-not-exist.png"))).unwrap_err();
        assert!(err.to_string().contains("tray icon"));
        assert!(!paths.tray_icon().exists());
    }
}

//! `assetkit background`: DMG installer window background.

use std::path::Path;

use anyhow::{Context, Result};

use crate::image::backdrop::{DMG_WINDOW, create_background};
use crate::{debug, log};
use crate::logger::{status_success, status_warning};
use crate::project::ProjectPaths;
use crate::utils::path::expand_user_path;

/// Compose the background into `output` (default `<root>/installer/dmg`).
pub fn run(paths: &ProjectPaths, output: Option<&Path>, mascot: Option<&Path>) -> Result<()> {
    let out_dir = output.map_or_else(|| paths.dmg_dir(), |p| expand_user_path(p, paths.root()));
    let mascot = mascot.map_or_else(|| paths.mascot(), |p| expand_user_path(p, paths.root()));

    let out = create_background(DMG_WINDOW, &mascot, &out_dir)
        .with_context(|| format!("failed to create background in {}", out_dir.display()))?;

    if !out.mascot {
        status_warning(&format!("mascot skipped ({})", mascot.display()));
    }
    debug!("background"; "wrote {} and {}", out.retina.display(), out.standard.display());
    status_success("background images created");
    log!("background"; "DMG window size: {}x{}", DMG_WINDOW.width, DMG_WINDOW.height);
    Ok(())
}

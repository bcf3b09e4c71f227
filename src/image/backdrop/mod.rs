//! Installer (DMG) window background.
//!
//! The background is painted at high density and then downsampled:
//!
//! ```text
//! gradient → soft glow → top shine → mascot (optional) → arrow
//!     └─ save background@2x.png ─ Lanczos3 ÷ scale ─ save background.png
//! ```
//!
//! Only the mascot is best-effort: a missing or unreadable mascot is logged
//! and skipped, every other failure aborts.

mod arrow;
mod glow;
mod gradient;
mod mascot;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::image::draw::composite;
use crate::image::io::save_png;
use crate::logger::format_chain;
use crate::{debug, log};

use arrow::ArrowShape;
use glow::{add_soft_glow, add_top_shine, default_glows};
use gradient::{Gradient, LAVENDER_STOPS};
use mascot::place_mascot;

pub const RETINA_FILE: &str = "background@2x.png";
pub const STANDARD_FILE: &str = "background.png";

/// Nominal window size and high-density factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropSize {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

/// Compact DMG window: 540x380 points, painted at 2x.
pub const DMG_WINDOW: BackdropSize = BackdropSize {
    width: 540,
    height: 380,
    scale: 2,
};

impl BackdropSize {
    /// Pixel size of the high-density canvas.
    pub fn retina(&self) -> (u32, u32) {
        (self.width * self.scale, self.height * self.scale)
    }
}

/// Files written by [`create_background`].
#[derive(Debug)]
pub struct BackdropOutput {
    pub retina: PathBuf,
    pub standard: PathBuf,
    /// `false` when the mascot layer was skipped.
    pub mascot: bool,
}

/// Paint the high-density background.
///
/// Glow and shadow layers are blurred in premultiplied alpha and every layer
/// is alpha-composited over an opaque canvas, so the result stays fully
/// opaque with no dark fringes around the soft edges. A straight-alpha blur
/// with mask-pasting would lower canvas alpha under the translucent layers.
///
/// Returns the canvas and whether the mascot made it on.
pub fn compose(size: BackdropSize, mascot: &Path) -> Result<(RgbaImage, bool)> {
    let (width, height) = size.retina();
    let mut canvas = RgbaImage::new(width, height);

    log!("background"; "creating gradient background");
    Gradient::new(LAVENDER_STOPS.to_vec())?.paint_vertical(&mut canvas);

    log!("background"; "adding soft glow effects");
    add_soft_glow(&mut canvas, &default_glows(width, height));
    add_top_shine(&mut canvas);

    log!("background"; "adding mascot");
    let placed = match place_mascot(&mut canvas, mascot) {
        Ok(p) => {
            debug!("background"; "mascot {}x{} at ({}, {})", p.width, p.height, p.x, p.y);
            true
        }
        Err(e) => {
            let err = anyhow::Error::new(e);
            log!("warning"; "could not load mascot image: {}", format_chain(&err));
            false
        }
    };

    log!("background"; "creating arrow");
    let arrow = ArrowShape::default();
    let (ax, ay) = arrow.position(width, height);
    composite(&mut canvas, &arrow.render(), ax, ay);

    Ok((canvas, placed))
}

/// Downsample the high-density canvas to the nominal size.
pub fn downsample(canvas: &RgbaImage, size: BackdropSize) -> RgbaImage {
    imageops::resize(canvas, size.width, size.height, FilterType::Lanczos3)
}

/// Compose and write both densities into `out_dir`.
pub fn create_background(size: BackdropSize, mascot: &Path, out_dir: &Path) -> Result<BackdropOutput> {
    let (canvas, placed) = compose(size, mascot)?;

    log!("background"; "saving background images");
    let retina = out_dir.join(RETINA_FILE);
    save_png(&canvas, &retina).context("failed to save high-density background")?;
    log!("background"; "saved {} ({}x{})", retina.display(), canvas.width(), canvas.height());

    let standard_img = downsample(&canvas, size);
    let standard = out_dir.join(STANDARD_FILE);
    save_png(&standard_img, &standard).context("failed to save standard background")?;
    log!("background"; "saved {} ({}x{})", standard.display(), size.width, size.height);

    Ok(BackdropOutput {
        retina,
        standard,
        mascot: placed,
    })
}

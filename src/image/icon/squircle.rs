//! Rounded-square ("squircle") app icon masking.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::error::AssetError;
use crate::image::draw::{Rect, fill_rounded_rect};
use crate::image::io::{load_rgba, save_png};

/// Side of the master app icon.
pub const ICON_SIZE: u32 = 1024;

/// Corner radius as a fraction of the side, approximating the macOS icon shape.
pub const CORNER_RADIUS_RATIO: f32 = 0.2237;

/// Corner radius in pixels for a square of `side` pixels (truncated).
pub fn corner_radius(side: u32) -> u32 {
    (side as f32 * CORNER_RADIUS_RATIO) as u32
}

/// Binary stencil: 255 inside the rounded square, 0 in the cut corners.
pub fn squircle_mask(size: u32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    let side = i64::from(size);
    fill_rounded_rect(
        &mut mask,
        Rect::new(0, 0, side, side),
        i64::from(corner_radius(size)),
        Luma([255]),
    );
    mask
}

/// Paste `src` onto a transparent canvas through `mask`.
///
/// Every channel, alpha included, is scaled by the mask value, so 0 yields
/// a fully transparent pixel and 255 copies `src` unchanged.
pub fn apply_mask(src: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(src.dimensions(), mask.dimensions());

    RgbaImage::from_fn(src.width(), src.height(), |x, y| {
        let m = u32::from(mask.get_pixel(x, y)[0]);
        match m {
            0 => Rgba([0, 0, 0, 0]),
            255 => *src.get_pixel(x, y),
            _ => {
                let p = src.get_pixel(x, y);
                Rgba(p.0.map(|c| ((u32::from(c) * m + 127) / 255) as u8))
            }
        }
    })
}

/// Resize `src` to [`ICON_SIZE`] and clip it to the squircle.
pub fn mask_to_squircle(src: &RgbaImage) -> RgbaImage {
    let resized = imageops::resize(src, ICON_SIZE, ICON_SIZE, FilterType::Lanczos3);
    apply_mask(&resized, &squircle_mask(ICON_SIZE))
}

/// Load `source`, mask it and write the PNG to `dest`.
pub fn mask_file(source: &Path, dest: &Path) -> Result<(), AssetError> {
    let src = load_rgba(source)?;
    save_png(&mask_to_squircle(&src), dest)
}

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::error::AssetError;
use crate::image::draw::{blur_rgba, composite, fill_ellipse};
use crate::image::io::load_rgba;

/// Mascot height on the high-density canvas.
pub const MASCOT_HEIGHT: u32 = 240;
const MARGIN_RIGHT: i64 = 60;
const MARGIN_BOTTOM: i64 = 40;

const SHADOW_HEIGHT: u32 = 60;
const SHADOW_PAD: u32 = 20;
/// Shadow layer top sits this far above the mascot's bottom edge.
const SHADOW_LIFT: i64 = 40;
const SHADOW_COLOR: Rgba<u8> = Rgba([80, 40, 120, 40]);
const SHADOW_BLUR_SIGMA: f32 = 15.0;

/// Where the mascot and its shadow land on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MascotPlacement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl MascotPlacement {
    /// Bottom-right placement for a source of `src_w x src_h` pixels,
    /// scaled to [`MASCOT_HEIGHT`] with its aspect ratio kept.
    pub fn for_source(src_w: u32, src_h: u32, canvas_w: u32, canvas_h: u32) -> Self {
        let ratio = MASCOT_HEIGHT as f32 / src_h.max(1) as f32;
        let width = ((src_w as f32 * ratio) as u32).max(1);
        let height = MASCOT_HEIGHT;
        Self {
            x: i64::from(canvas_w) - i64::from(width) - MARGIN_RIGHT,
            y: i64::from(canvas_h) - i64::from(height) - MARGIN_BOTTOM,
            width,
            height,
        }
    }

    /// Top-left of the shadow layer: centered under the mascot's feet.
    pub fn shadow_origin(&self) -> (i64, i64) {
        (
            self.x - i64::from(SHADOW_PAD),
            self.y + i64::from(self.height) - SHADOW_LIFT,
        )
    }
}

/// Soft elliptical shadow as wide as the mascot.
fn shadow_layer(mascot_width: u32) -> RgbaImage {
    let mut shadow = RgbaImage::new(mascot_width + SHADOW_PAD * 2, SHADOW_HEIGHT);
    let pad = SHADOW_PAD as f32;
    fill_ellipse(
        &mut shadow,
        [pad, 10.0, mascot_width as f32 + pad, 50.0],
        SHADOW_COLOR,
    );
    blur_rgba(&shadow, SHADOW_BLUR_SIGMA)
}

/// Scale `mascot` and paint it with its shadow onto `canvas`.
pub fn paint_mascot(canvas: &mut RgbaImage, mascot: &RgbaImage) -> MascotPlacement {
    let placement = MascotPlacement::for_source(
        mascot.width(),
        mascot.height(),
        canvas.width(),
        canvas.height(),
    );
    let scaled = imageops::resize(
        mascot,
        placement.width,
        placement.height,
        FilterType::Lanczos3,
    );

    let (sx, sy) = placement.shadow_origin();
    composite(canvas, &shadow_layer(placement.width), sx, sy);
    composite(canvas, &scaled, placement.x, placement.y);
    placement
}

/// Load the mascot at `path` and paint it onto `canvas`.
pub fn place_mascot(canvas: &mut RgbaImage, path: &Path) -> Result<MascotPlacement, AssetError> {
    let mascot = load_rgba(path)?;
    Ok(paint_mascot(canvas, &mascot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_keeps_aspect_ratio() {
        let p = MascotPlacement::for_source(500, 400, 1080, 760);
        assert_eq!((p.width, p.height), (300, 240));
        assert_eq!((p.x, p.y), (1080 - 300 - 60, 760 - 240 - 40));
        assert_eq!(p.shadow_origin(), (p.x - 20, p.y + 200));
    }

    #[test]
    fn test_paint_mascot_draws_in_bottom_right() {
        let mut canvas = RgbaImage::from_pixel(1080, 760, Rgba([0, 0, 255, 255]));
        let mascot = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));

        let p = paint_mascot(&mut canvas, &mascot);
        assert_eq!((p.width, p.height), (240, 240));

        let mid = canvas.get_pixel(
            (p.x + i64::from(p.width) / 2) as u32,
            (p.y + i64::from(p.height) / 2) as u32,
        );
        assert_eq!(mid, &Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(10, 10), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_place_mascot_missing_file_leaves_canvas_untouched() {
        let mut canvas = RgbaImage::from_pixel(50, 50, Rgba([1, 2, 3, 255]));
        let before = canvas.clone();

        let err = place_mascot(&mut canvas, Path::new("/nonexistent/cat.png")).unwrap_err();
        assert!(err.is_missing_input());
        assert_eq!(canvas, before);
    }
}

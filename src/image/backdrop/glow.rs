use image::{Rgba, RgbaImage};

use crate::image::draw::{blur_rgba, composite, fill_ellipse, fill_row};

/// Blur applied to the whole glow overlay.
pub const GLOW_BLUR_SIGMA: f32 = 20.0;
/// Rings are drawn every `RING_STEP` pixels of radius.
const RING_STEP: usize = 2;

/// Shine covers this fraction of the canvas height, from the top.
pub const SHINE_FRACTION: f32 = 0.3;
/// Alpha of the topmost shine row.
pub const SHINE_ALPHA: f32 = 20.0;

/// One radial glow blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowSpec {
    pub cx: f32,
    pub cy: f32,
    pub radius: u32,
    pub color: Rgba<u8>,
}

impl GlowSpec {
    /// Alpha of the ring of radius `r`: `a * (1 - (R - r) / R)²`, truncated.
    pub fn ring_alpha(&self, r: u32) -> u8 {
        let big_r = self.radius as f32;
        let falloff = 1.0 - (big_r - r as f32) / big_r;
        (f32::from(self.color[3]) * falloff * falloff) as u8
    }

    /// Ring radii from the outside in: `R, R-2, ...` down to 1 or 2.
    pub fn rings(&self) -> impl Iterator<Item = u32> {
        (1..=self.radius).rev().step_by(RING_STEP)
    }

    /// Render the rings into a layer just big enough to hold them.
    ///
    /// Inner rings overwrite outer ones, so each pixel ends up with the
    /// alpha of the smallest ring covering it. Returns the layer and its
    /// top-left position on the canvas.
    fn render(&self) -> (RgbaImage, i64, i64) {
        let r = self.radius as f32;
        let ox = (self.cx - r).floor();
        let oy = (self.cy - r).floor();
        let side = self.radius * 2 + 2;
        let mut layer = RgbaImage::new(side, side);

        let (lx, ly) = (self.cx - ox, self.cy - oy);
        for ring in self.rings() {
            let rr = ring as f32;
            let [red, green, blue, _] = self.color.0;
            let px = Rgba([red, green, blue, self.ring_alpha(ring)]);
            fill_ellipse(&mut layer, [lx - rr, ly - rr, lx + rr, ly + rr], px);
        }
        (layer, ox as i64, oy as i64)
    }
}

/// The three decorative glows, positioned relative to the canvas size.
pub fn default_glows(width: u32, height: u32) -> [GlowSpec; 3] {
    let (w, h) = (width as f32, height as f32);
    let white = |a| Rgba([255, 255, 255, a]);
    [
        GlowSpec { cx: w * 0.08, cy: h * 0.15, radius: 80, color: white(25) },
        GlowSpec { cx: w * 0.92, cy: h * 0.1, radius: 60, color: white(20) },
        GlowSpec { cx: w * 0.05, cy: h * 0.85, radius: 50, color: white(18) },
    ]
}

/// Build the transparent glow overlay: every glow blended in, then blurred.
pub fn glow_overlay(width: u32, height: u32, glows: &[GlowSpec]) -> RgbaImage {
    let mut overlay = RgbaImage::new(width, height);
    for glow in glows.iter().filter(|g| g.radius > 0) {
        let (layer, x, y) = glow.render();
        composite(&mut overlay, &layer, x, y);
    }
    blur_rgba(&overlay, GLOW_BLUR_SIGMA)
}

/// Composite soft glows onto `canvas`.
pub fn add_soft_glow(canvas: &mut RgbaImage, glows: &[GlowSpec]) {
    let overlay = glow_overlay(canvas.width(), canvas.height(), glows);
    composite(canvas, &overlay, 0, 0);
}

/// Alpha of shine row `y` for a canvas `height` rows tall.
///
/// `None` once `y` is past the shine band.
pub fn shine_alpha(y: u32, height: u32) -> Option<u8> {
    let band = height as f32 * SHINE_FRACTION;
    if y >= band as u32 {
        return None;
    }
    let falloff = 1.0 - y as f32 / band;
    Some((SHINE_ALPHA * falloff * falloff) as u8)
}

/// Composite a white band fading out from the top edge.
pub fn add_top_shine(canvas: &mut RgbaImage) {
    let (width, height) = canvas.dimensions();
    let mut overlay = RgbaImage::new(width, height);
    for y in 0..height {
        let Some(alpha) = shine_alpha(y, height) else {
            break;
        };
        fill_row(&mut overlay, y, Rgba([255, 255, 255, alpha]));
    }
    composite(canvas, &overlay, 0, 0);
}

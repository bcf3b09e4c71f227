//! Software raster primitives.
//!
//! Every `fill_*` function overwrites pixels (no blending) and silently clips
//! to the target bounds, so layers can be built up shape by shape and then
//! alpha-composited with [`composite`]. Primitives are generic over the pixel
//! type, which lets the same rounded rectangle paint an RGBA layer or a
//! single-channel mask.

use image::{GenericImage, Rgba, RgbaImage, imageops};

/// Inclusive pixel rectangle `[x0, x1] x [y0, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Same rectangle moved by `(dx, dy)`.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }
}

/// Overwrite the pixel at `(x, y)` if it lies inside `img`.
#[inline]
fn put<I: GenericImage>(img: &mut I, x: i64, y: i64, px: I::Pixel) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u64, y as u64);
    if x >= u64::from(img.width()) || y >= u64::from(img.height()) {
        return;
    }
    img.put_pixel(x as u32, y as u32, px);
}

/// Clip an inclusive span to `[0, len)`; `None` if nothing is left.
#[inline]
fn clip(lo: i64, hi: i64, len: u32) -> Option<(i64, i64)> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(len) - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Fill the full-width row `y`.
pub fn fill_row<I: GenericImage>(img: &mut I, y: u32, px: I::Pixel) {
    if y >= img.height() {
        return;
    }
    for x in 0..img.width() {
        img.put_pixel(x, y, px);
    }
}

/// Fill the ellipse inscribed in the box `(x0, y0)..(x1, y1)`.
///
/// A pixel is inside when its center satisfies the ellipse equation.
pub fn fill_ellipse<I: GenericImage>(img: &mut I, bbox: [f32; 4], px: I::Pixel) {
    let [x0, y0, x1, y1] = bbox;
    let (rx, ry) = ((x1 - x0) / 2.0, (y1 - y0) / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (cx, cy) = (x0 + rx, y0 + ry);

    let Some((ys, ye)) = clip(y0.floor() as i64, y1.ceil() as i64, img.height()) else {
        return;
    };
    let Some((xs, xe)) = clip(x0.floor() as i64, x1.ceil() as i64, img.width()) else {
        return;
    };

    for y in ys..=ye {
        let dy = (y as f32 + 0.5 - cy) / ry;
        for x in xs..=xe {
            let dx = (x as f32 + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                put(img, x, y, px);
            }
        }
    }
}

/// Fill a rectangle with circular corners of `radius`.
///
/// The radius is capped at half the shorter side, so a radius equal to
/// half the height yields a pill.
pub fn fill_rounded_rect<I: GenericImage>(img: &mut I, rect: Rect, radius: i64, px: I::Pixel) {
    if rect.x1 < rect.x0 || rect.y1 < rect.y0 {
        return;
    }
    let r = radius
        .min((rect.x1 - rect.x0) / 2)
        .min((rect.y1 - rect.y0) / 2)
        .max(0);
    let r_sq = r * r;

    let Some((ys, ye)) = clip(rect.y0, rect.y1, img.height()) else {
        return;
    };
    let Some((xs, xe)) = clip(rect.x0, rect.x1, img.width()) else {
        return;
    };

    for y in ys..=ye {
        let cy = y.clamp(rect.y0 + r, rect.y1 - r);
        for x in xs..=xe {
            // Nearest point of the inner (radius-shrunk) rectangle
            let cx = x.clamp(rect.x0 + r, rect.x1 - r);
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r_sq {
                put(img, x, y, px);
            }
        }
    }
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

/// Fill a convex polygon (winding order does not matter).
pub fn fill_polygon<I: GenericImage>(img: &mut I, points: &[(f32, f32)], px: I::Pixel) {
    if points.len() < 3 {
        return;
    }
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for &(x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let Some((ys, ye)) = clip(min_y.floor() as i64, max_y.ceil() as i64, img.height()) else {
        return;
    };
    let Some((xs, xe)) = clip(min_x.floor() as i64, max_x.ceil() as i64, img.width()) else {
        return;
    };

    for y in ys..=ye {
        for x in xs..=xe {
            if point_in_convex(x as f32 + 0.5, y as f32 + 0.5, points) {
                put(img, x, y, px);
            }
        }
    }
}

fn point_in_convex(px: f32, py: f32, points: &[(f32, f32)]) -> bool {
    let mut has_neg = false;
    let mut has_pos = false;
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        let c = cross(x2 - x1, y2 - y1, px - x1, py - y1);
        has_neg |= c < 0.0;
        has_pos |= c > 0.0;
        if has_neg && has_pos {
            return false;
        }
    }
    true
}

// ============================================================================
// Compositing
// ============================================================================

/// Alpha-composite `layer` over `base` with its top-left corner at `(x, y)`.
pub fn composite(base: &mut RgbaImage, layer: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(base, layer, x, y);
}

/// Gaussian blur on premultiplied color.
///
/// Blurring straight RGBA drags the color of fully transparent pixels into
/// the result and leaves dark fringes; premultiplying keeps a white glow white.
pub fn blur_rgba(img: &RgbaImage, sigma: f32) -> RgbaImage {
    let mut premultiplied = img.clone();
    for px in premultiplied.pixels_mut() {
        let a = u32::from(px[3]);
        for c in 0..3 {
            px[c] = ((u32::from(px[c]) * a + 127) / 255) as u8;
        }
    }

    let mut blurred = imageops::blur(&premultiplied, sigma);
    for px in blurred.pixels_mut() {
        let a = u32::from(px[3]);
        if a == 0 {
            *px = Rgba([0, 0, 0, 0]);
            continue;
        }
        for c in 0..3 {
            px[c] = ((u32::from(px[c]) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    blurred
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_fill_row_covers_full_width() {
        let mut img = RgbaImage::new(4, 3);
        fill_row(&mut img, 1, RED);
        fill_row(&mut img, 7, RED); // out of bounds: ignored

        for x in 0..4 {
            assert_eq!(img.get_pixel(x, 1), &RED);
            assert_eq!(img.get_pixel(x, 0)[3], 0);
        }
    }

    #[test]
    fn test_fill_ellipse_center_and_corner() {
        let mut img = RgbaImage::new(21, 21);
        fill_ellipse(&mut img, [0.0, 0.0, 21.0, 21.0], RED);

        assert_eq!(img.get_pixel(10, 10), &RED);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(20, 20)[3], 0);
        assert_eq!(img.get_pixel(10, 0), &RED);
    }

    #[test]
    fn test_fill_ellipse_clips_outside_canvas() {
        let mut img = RgbaImage::new(8, 8);
        fill_ellipse(&mut img, [-20.0, -20.0, 6.0, 6.0], RED);
        assert_eq!(img.get_pixel(0, 0), &RED);
        assert_eq!(img.get_pixel(7, 7)[3], 0);
    }

    #[test]
    fn test_fill_rounded_rect_cuts_corners() {
        let mut mask = GrayImage::new(40, 40);
        fill_rounded_rect(&mut mask, Rect::new(0, 0, 39, 39), 10, Luma([255]));

        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(39, 39)[0], 0);
        assert_eq!(mask.get_pixel(20, 20)[0], 255);
        // Straight edges stay filled
        assert_eq!(mask.get_pixel(0, 20)[0], 255);
        assert_eq!(mask.get_pixel(20, 0)[0], 255);
    }

    #[test]
    fn test_fill_rounded_rect_radius_is_capped() {
        let mut img = RgbaImage::new(30, 10);
        fill_rounded_rect(&mut img, Rect::new(0, 2, 29, 8), 100, RED);
        // Radius capped to 3 (half of height 6): pill ends
        assert_eq!(img.get_pixel(15, 5), &RED);
        assert_eq!(img.get_pixel(0, 2)[3], 0);
        assert_eq!(img.get_pixel(15, 0)[3], 0);
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut img = RgbaImage::new(20, 20);
        fill_polygon(&mut img, &[(0.0, 0.0), (20.0, 10.0), (0.0, 20.0)], RED);

        assert_eq!(img.get_pixel(2, 10), &RED);
        assert_eq!(img.get_pixel(19, 1)[3], 0);
        assert_eq!(img.get_pixel(19, 18)[3], 0);

        // Reversed winding fills the same pixels
        let mut rev = RgbaImage::new(20, 20);
        fill_polygon(&mut rev, &[(0.0, 20.0), (20.0, 10.0), (0.0, 0.0)], RED);
        assert_eq!(img, rev);
    }

    #[test]
    fn test_composite_blends_alpha() {
        let mut base = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let layer = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        composite(&mut base, &layer, 1, 1);

        let px = base.get_pixel(1, 1);
        assert!((120..=136).contains(&px[0]), "got {px:?}");
        assert_eq!(px[3], 255);
        assert_eq!(base.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_blur_keeps_white_glow_white() {
        let mut img = RgbaImage::new(31, 31);
        fill_ellipse(&mut img, [10.0, 10.0, 21.0, 21.0], Rgba([255, 255, 255, 200]));

        let blurred = blur_rgba(&img, 3.0);
        let center = blurred.get_pixel(15, 15);
        assert!(center[3] > 0);
        assert!(center[0] >= 250, "color darkened: {center:?}");

        // Alpha spreads past the original edge
        assert!(blurred.get_pixel(15, 8)[3] > 0);
        assert!(blurred.get_pixel(15, 8)[0] >= 250);
    }
}

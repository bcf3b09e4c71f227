use image::{Rgba, RgbaImage};

use crate::image::draw::{Rect, fill_polygon, fill_rounded_rect};

/// The drag-to-install arrow: a pill-shaped body ending in a triangular head,
/// with a purple drop shadow offset down-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowShape {
    /// Nominal arrow size; the layer is twice this in each axis.
    pub width: u32,
    pub height: u32,
    pub body_start: i64,
    /// Distance from the layer's right edge to the end of the body.
    pub body_end_inset: i64,
    /// Half the body height; also its corner radius.
    pub body_thickness: i64,
    pub head_size: f32,
    pub shadow_offset: i64,
    pub color: Rgba<u8>,
    pub shadow_color: Rgba<u8>,
    /// Shift applied after vertical centering (negative is up).
    pub vertical_offset: i64,
}

impl Default for ArrowShape {
    fn default() -> Self {
        Self {
            width: 180,
            height: 60,
            body_start: 30,
            body_end_inset: 80,
            body_thickness: 8,
            head_size: 28.0,
            shadow_offset: 4,
            color: Rgba([255, 255, 255, 220]),
            shadow_color: Rgba([103, 58, 183, 100]),
            vertical_offset: -30,
        }
    }
}

impl ArrowShape {
    /// Layer dimensions.
    pub fn layer_size(&self) -> (u32, u32) {
        (self.width * 2, self.height * 2)
    }

    fn center_y(&self) -> i64 {
        i64::from(self.height)
    }

    fn body_end(&self) -> i64 {
        i64::from(self.width * 2) - self.body_end_inset
    }

    /// Body rectangle in layer coordinates.
    pub fn body(&self) -> Rect {
        let cy = self.center_y();
        Rect::new(
            self.body_start,
            cy - self.body_thickness,
            self.body_end(),
            cy + self.body_thickness,
        )
    }

    /// Head triangle: top, tip, bottom.
    pub fn head(&self) -> [(f32, f32); 3] {
        let cy = self.center_y() as f32;
        let end = self.body_end() as f32;
        [
            (end - 5.0, cy - self.head_size),
            (end + self.head_size + 15.0, cy),
            (end - 5.0, cy + self.head_size),
        ]
    }

    /// Draw shadow first, then the arrow over it.
    pub fn render(&self) -> RgbaImage {
        let (w, h) = self.layer_size();
        let mut layer = RgbaImage::new(w, h);
        let off = self.shadow_offset;
        let radius = self.body_thickness;

        fill_rounded_rect(&mut layer, self.body().offset(off, off), radius, self.shadow_color);
        fill_rounded_rect(&mut layer, self.body(), radius, self.color);

        let shift = off as f32;
        let shadow_head = self.head().map(|(x, y)| (x + shift, y + shift));
        fill_polygon(&mut layer, &shadow_head, self.shadow_color);
        fill_polygon(&mut layer, &self.head(), self.color);

        layer
    }

    /// Top-left of the layer on a `canvas_w x canvas_h` canvas: centered
    /// horizontally, centered vertically and then shifted by `vertical_offset`.
    pub fn position(&self, canvas_w: u32, canvas_h: u32) -> (i64, i64) {
        let (w, h) = self.layer_size();
        let x = (i64::from(canvas_w) - i64::from(w)).div_euclid(2);
        let y = (i64::from(canvas_h) - i64::from(h)).div_euclid(2) + self.vertical_offset;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_matches_fixed_proportions() {
        let arrow = ArrowShape::default();
        assert_eq!(arrow.layer_size(), (360, 120));
        assert_eq!(arrow.body(), Rect::new(30, 52, 280, 68));
        assert_eq!(arrow.head(), [(275.0, 32.0), (323.0, 60.0), (275.0, 88.0)]);
        assert_eq!(arrow.position(1080, 760), (360, 290));
    }

    #[test]
    fn test_body_is_drawn_over_shadow() {
        let arrow = ArrowShape::default();
        let layer = arrow.render();

        // Body center
        assert_eq!(layer.get_pixel(150, 60), &arrow.color);
        // Below the body only the shadow reaches
        assert_eq!(layer.get_pixel(150, 71), &arrow.shadow_color);
        // Head tip region and its shadow
        assert_eq!(layer.get_pixel(310, 60), &arrow.color);
        assert_eq!(layer.get_pixel(285, 85), &arrow.shadow_color);
        // Outside everything
        assert_eq!(layer.get_pixel(5, 5)[3], 0);
        assert_eq!(layer.get_pixel(350, 60)[3], 0);
    }
}

use anyhow::{Result, ensure};
use image::{Rgba, RgbaImage};

use crate::image::draw::fill_row;

/// One color stop of a vertical ramp; `position` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub color: [u8; 3],
}

impl GradientStop {
    pub const fn new(position: f32, color: [u8; 3]) -> Self {
        Self { position, color }
    }
}

/// Piecewise-linear color ramp over eased row positions.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

/// Deep purple → soft purple → light lavender.
pub const LAVENDER_STOPS: [GradientStop; 3] = [
    GradientStop::new(0.0, [103, 58, 183]),
    GradientStop::new(0.4, [156, 120, 210]),
    GradientStop::new(1.0, [235, 228, 248]),
];

/// Cubic ease `t²(3 − 2t)`: maps 0 → 0 and 1 → 1, flat at both ends.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

impl Gradient {
    /// Build a ramp; stops must be strictly increasing and inside `[0, 1]`.
    pub fn new(stops: Vec<GradientStop>) -> Result<Self> {
        ensure!(stops.len() >= 2, "gradient needs at least two stops");
        ensure!(
            stops
                .iter()
                .all(|s| (0.0..=1.0).contains(&s.position)),
            "gradient stop position outside [0, 1]"
        );
        ensure!(
            stops.windows(2).all(|w| w[0].position < w[1].position),
            "gradient stops must be strictly increasing"
        );
        Ok(Self { stops })
    }

    /// Color at ramp position `t`.
    ///
    /// The segment is the last one whose start is `<= t`; channels are
    /// interpolated linearly and truncated toward zero.
    pub fn sample(&self, t: f32) -> [u8; 3] {
        let last = self.stops.len() - 2;
        let seg = self.stops[..=last]
            .iter()
            .rposition(|s| s.position <= t)
            .unwrap_or(0);
        let (a, b) = (self.stops[seg], self.stops[seg + 1]);
        let r = (t - a.position) / (b.position - a.position);

        let mut out = [0u8; 3];
        for (c, o) in out.iter_mut().enumerate() {
            let from = f32::from(a.color[c]);
            let to = f32::from(b.color[c]);
            *o = (from + (to - from) * r).clamp(0.0, 255.0) as u8;
        }
        out
    }

    /// Color of row `y` in a canvas of `height` rows.
    pub fn row_color(&self, y: u32, height: u32) -> [u8; 3] {
        let ratio = y as f32 / height.max(1) as f32;
        self.sample(smoothstep(ratio))
    }

    /// Paint every row of `img` opaque with its ramp color.
    pub fn paint_vertical(&self, img: &mut RgbaImage) {
        let height = img.height();
        for y in 0..height {
            let [r, g, b] = self.row_color(y, height);
            fill_row(img, y, Rgba([r, g, b, 255]));
        }
    }
}

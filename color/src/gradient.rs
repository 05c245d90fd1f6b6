use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use wafer_common::color::Color;
use wafer_common::error::WaferError;

/// Maps `value` from `src` onto `dst`. A zero-width source maps to `0.0`.
pub fn rescale(value: f64, src: (f64, f64), dst: (f64, f64)) -> f64 {
    let span = src.1 - src.0;
    if span == 0.0 {
        return 0.0;
    }
    (value - src.0) * (dst.1 - dst.0) / span + dst.0
}

/// Like [`rescale`], then clamped into `dst`.
pub fn rescale_clip(value: f64, src: (f64, f64), dst: (f64, f64)) -> f64 {
    let (lo, hi) = if dst.0 <= dst.1 { dst } else { (dst.1, dst.0) };
    rescale(value, src, dst).clamp(lo, hi)
}

/// Interpolates between two colors in HSL space.
///
/// `t <= 0` (or NaN) returns `initial` and `t >= 1` returns `dest`, both
/// exactly, without a round trip through HSL.
pub fn linear_gradient(initial: Color, dest: Color, t: f64) -> Color {
    if t.is_nan() || t <= 0.0 {
        return initial;
    }
    if t >= 1.0 {
        return dest;
    }
    let a = rgb_to_hsl(initial.to_unit());
    let b = rgb_to_hsl(dest.to_unit());
    let hsl = [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ];
    Color::from_unit(hsl_to_rgb(hsl))
}

/// Evenly spaced color stops, blended pairwise with [`linear_gradient`].
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    pub fn new(stops: Vec<Color>) -> Result<Self, WaferError> {
        if stops.len() < 2 {
            return Err(WaferError::InvalidGradient(stops.len()));
        }
        Ok(Self { stops })
    }

    pub fn linear(low: Color, high: Color) -> Self {
        Self {
            stops: vec![low, high],
        }
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    pub fn first(&self) -> Color {
        self.stops[0]
    }

    pub fn last(&self) -> Color {
        self.stops[self.stops.len() - 1]
    }

    pub fn color_at(&self, t: f64) -> Color {
        if t.is_nan() || t <= 0.0 {
            return self.first();
        }
        if t >= 1.0 {
            return self.last();
        }
        let segments = self.stops.len() - 1;
        let width = 1.0 / segments as f64;
        let m = ((t / width).floor() as usize).min(segments - 1);
        let start = m as f64 * width;
        let local = rescale(t, (start, start + width), (0.0, 1.0));
        linear_gradient(self.stops[m], self.stops[m + 1], local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::BLACK;
    const WHITE: Color = Color::WHITE;
    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::rgb(r, g, b)
    }

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn midpoints_match_reference_values() {
        assert_eq!(linear_gradient(BLACK, WHITE, 0.5), rgb(127, 127, 127));
        assert_eq!(linear_gradient(BLACK, RED, 0.5), rgb(95, 31, 31));
        // Black carries hue 0, so the blend drifts toward red.
        assert_eq!(linear_gradient(BLACK, GREEN, 0.5), rgb(95, 95, 31));
        assert_eq!(linear_gradient(BLACK, BLUE, 0.5), rgb(31, 95, 31));
    }

    #[test]
    fn endpoints_are_exact() {
        let low = rgb(128, 0, 255);
        let high = rgb(0, 255, 128);
        for t in [0.0, -0.5, -1e9] {
            assert_eq!(linear_gradient(low, high, t), low);
        }
        for t in [1.0, 1.5, 1e9] {
            assert_eq!(linear_gradient(low, high, t), high);
        }
    }

    #[test]
    fn rescale_handles_reversed_and_empty_ranges() {
        assert_eq!(rescale(5.0, (0.0, 10.0), (0.0, 1.0)), 0.5);
        assert_eq!(rescale(5.0, (0.0, 10.0), (100.0, 0.0)), 50.0);
        assert_eq!(rescale(3.0, (3.0, 3.0), (0.0, 1.0)), 0.0);
        assert_eq!(rescale_clip(20.0, (0.0, 10.0), (0.0, 1.0)), 1.0);
        assert_eq!(rescale_clip(-20.0, (0.0, 10.0), (1.0, 0.0)), 1.0);
    }

    #[test]
    fn polylinear_passes_through_stops() {
        let g = Gradient::new(vec![RED, GREEN, BLUE]).unwrap();
        assert_eq!(g.color_at(0.0), RED);
        assert_eq!(g.color_at(0.5), GREEN);
        assert_eq!(g.color_at(1.0), BLUE);
        assert_eq!(g.color_at(0.25), linear_gradient(RED, GREEN, 0.5));
    }

    #[test]
    fn gradient_needs_two_stops() {
        assert_eq!(Gradient::new(vec![RED]), Err(WaferError::InvalidGradient(1)));
        assert!(Gradient::new(Vec::new()).is_err());
    }
}

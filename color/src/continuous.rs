use crate::gradient::{Gradient, linear_gradient, rescale};
use wafer_common::color::Color;
use wafer_common::util::config::ColorConfig;

/// Percentiles used by [`auto_range`].
pub const AUTO_RANGE_PERCENTILES: (f64, f64) = (2.0, 98.0);
pub const DEFAULT_TICK_COUNT: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRange {
    pub low: f64,
    pub high: f64,
}

impl ColorRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }
}

impl From<[f64; 2]> for ColorRange {
    fn from(r: [f64; 2]) -> Self {
        Self::new(r[0], r[1])
    }
}

/// Linear-interpolated percentile of an ascending slice. `p` is in `0..=100`.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (p / 100.0).clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// 2nd to 98th percentile of the finite values.
pub fn auto_range<I>(values: I) -> ColorRange
where
    I: IntoIterator<Item = f64>,
{
    let mut finite: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    finite.sort_by(f64::total_cmp);
    let (lo_p, hi_p) = AUTO_RANGE_PERCENTILES;
    match (percentile(&finite, lo_p), percentile(&finite, hi_p)) {
        (Some(low), Some(high)) => ColorRange::new(low, high),
        _ => {
            log::warn!("No finite values to derive a plot range from, using (0, 0)");
            ColorRange::new(0.0, 0.0)
        }
    }
}

/// Colors for continuous data, including the out-of-range sentinels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientColors {
    pub low: Color,
    pub high: Color,
    pub oor_low: Color,
    pub oor_high: Color,
    pub invalid: Color,
}

impl Default for GradientColors {
    fn default() -> Self {
        Self::from(&ColorConfig::default())
    }
}

impl From<&ColorConfig> for GradientColors {
    fn from(c: &ColorConfig) -> Self {
        Self {
            low: c.low,
            high: c.high,
            oor_low: c.oor_low,
            oor_high: c.oor_high,
            invalid: c.invalid,
        }
    }
}

/// Color for one value against `range`, blending `low` to `high` in HSL.
pub fn get_color(value: f64, range: ColorRange, colors: &GradientColors) -> Color {
    sentinel(value, range, colors).unwrap_or_else(|| {
        linear_gradient(colors.low, colors.high, position(value, range))
    })
}

fn sentinel(value: f64, range: ColorRange, colors: &GradientColors) -> Option<Color> {
    if !value.is_finite() {
        Some(colors.invalid)
    } else if value > range.high {
        Some(colors.oor_high)
    } else if value < range.low {
        Some(colors.oor_low)
    } else {
        None
    }
}

fn position(value: f64, range: ColorRange) -> f64 {
    rescale(value, (range.low, range.high), (0.0, 1.0))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContinuousMapper {
    range: ColorRange,
    colors: GradientColors,
    gradient: Gradient,
}

impl ContinuousMapper {
    pub fn new(range: ColorRange, colors: GradientColors) -> Self {
        Self {
            range,
            colors,
            gradient: Gradient::linear(colors.low, colors.high),
        }
    }

    /// Replaces the two-stop low/high blend with a polylinear one.
    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn range(&self) -> ColorRange {
        self.range
    }

    pub fn colors(&self) -> &GradientColors {
        &self.colors
    }

    pub fn color_of(&self, value: f64) -> Color {
        sentinel(value, self.range, &self.colors)
            .unwrap_or_else(|| self.gradient.color_at(position(value, self.range)))
    }

    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        ticks(self.range, count)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// `count` evenly spaced legend ticks from `range.low` to `range.high`.
pub fn ticks(range: ColorRange, count: usize) -> Vec<Tick> {
    let tick = |value: f64| Tick {
        value,
        label: format!("{:.3}", value),
    };
    match count {
        0 => Vec::new(),
        1 => vec![tick(range.low)],
        n => (0..n)
            .map(|i| tick(range.low + range.span() * i as f64 / (n - 1) as f64))
            .collect(),
    }
}

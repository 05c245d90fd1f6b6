use crate::hsl::hsl_to_rgb;
use std::collections::{BTreeSet, HashMap};
use wafer_common::color::Color;

pub const PALETTE_SATURATION: f64 = 1.0;
pub const PALETTE_LIGHTNESS: f64 = 0.75;

/// `n` hues evenly spread around the circle, reordered even indices first
/// then odd ones so that neighbours in the legend don't share similar hues.
pub fn palette(n: usize) -> Vec<Color> {
    let hues: Vec<Color> = (0..n)
        .map(|i| {
            let h = i as f64 / n as f64;
            Color::from_unit(hsl_to_rgb([h, PALETTE_SATURATION, PALETTE_LIGHTNESS]))
        })
        .collect();
    let evens = hues.iter().step_by(2);
    let odds = hues.iter().skip(1).step_by(2);
    evens.chain(odds).copied().collect()
}

/// Pairs each distinct label with a palette color, in first-seen order.
pub fn assign_colors<S: AsRef<str>>(labels: &[S]) -> Vec<(String, Color)> {
    let mut seen = BTreeSet::new();
    let distinct: Vec<String> = labels
        .iter()
        .map(|l| l.as_ref())
        .filter(|l| seen.insert(*l))
        .map(str::to_string)
        .collect();
    let colors = palette(distinct.len());
    distinct.into_iter().zip(colors).collect()
}

/// Sorted distinct labels, the default legend ordering.
pub fn unique_labels<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteMapper {
    legend: Vec<(String, Color)>,
    lookup: HashMap<String, usize>,
    invalid: Color,
}

impl DiscreteMapper {
    pub fn new<S: AsRef<str>>(labels: &[S], invalid: Color) -> Self {
        let legend = assign_colors(labels);
        let lookup = legend
            .iter()
            .enumerate()
            .map(|(i, (label, _))| (label.clone(), i))
            .collect();
        Self {
            legend,
            lookup,
            invalid,
        }
    }

    /// Pins specific labels to fixed colors. Labels outside the legend are
    /// ignored.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, Color)>,
    {
        for (label, color) in overrides {
            match self.lookup.get(&label) {
                Some(&i) => self.legend[i].1 = color,
                None => log::warn!("Color override for unknown label '{}'", label),
            }
        }
        self
    }

    pub fn legend(&self) -> &[(String, Color)] {
        &self.legend
    }

    pub fn color_of(&self, label: &str) -> Color {
        self.lookup
            .get(label)
            .map_or(self.invalid, |&i| self.legend[i].1)
    }
}

pub mod continuous;
pub mod discrete;
pub mod gradient;
pub mod hsl;

pub use continuous::{ColorRange, ContinuousMapper, GradientColors, Tick, auto_range, ticks};
pub use discrete::{DiscreteMapper, assign_colors, unique_labels};
pub use gradient::{Gradient, linear_gradient, rescale, rescale_clip};

use rayon::prelude::*;
use wafer_common::color::Color;
use wafer_common::db::core::{DataType, DieRecord, DieValue, WaferMap};

pub trait ColorMap {
    fn get_color(&self, value: &DieValue) -> Color;
}

impl ColorMap for ContinuousMapper {
    fn get_color(&self, value: &DieValue) -> Color {
        match value {
            DieValue::Number(v) => self.color_of(*v),
            DieValue::Label(_) => self.colors().invalid,
        }
    }
}

impl ColorMap for DiscreteMapper {
    fn get_color(&self, value: &DieValue) -> Color {
        match value {
            DieValue::Label(l) => self.color_of(l),
            v @ DieValue::Number(_) => self.color_of(&v.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ColorMapper {
    Continuous(ContinuousMapper),
    Discrete(DiscreteMapper),
}

impl ColorMapper {
    /// Builds the mapper for a wafer's data type.
    ///
    /// Continuous maps use `plot_range` or fall back to [`auto_range`].
    /// Discrete maps use `labels` as the legend order, or the sorted distinct
    /// die values.
    pub fn for_map(
        map: &WaferMap,
        colors: GradientColors,
        plot_range: Option<ColorRange>,
        labels: Option<&[String]>,
    ) -> Self {
        match map.data_type {
            DataType::Continuous => {
                let range = plot_range.unwrap_or_else(|| auto_range(map.numbers()));
                log::info!("Plot range: ({:.3}, {:.3})", range.low, range.high);
                Self::Continuous(ContinuousMapper::new(range, colors))
            }
            DataType::Discrete => {
                let mapper = match labels {
                    Some(l) if !l.is_empty() => DiscreteMapper::new(l, colors.invalid),
                    _ => {
                        let text: Vec<String> =
                            map.dies.iter().map(|d| d.value.to_string()).collect();
                        let unique = unique_labels(text.iter().map(String::as_str));
                        DiscreteMapper::new(&unique, colors.invalid)
                    }
                };
                log::info!("Legend has {} labels", mapper.legend().len());
                Self::Discrete(mapper)
            }
        }
    }

    /// One color per record, in record order.
    pub fn color_all(&self, dies: &[DieRecord]) -> Vec<Color> {
        dies.par_iter().map(|d| self.get_color(&d.value)).collect()
    }
}

impl ColorMap for ColorMapper {
    fn get_color(&self, value: &DieValue) -> Color {
        match self {
            Self::Continuous(m) => m.get_color(value),
            Self::Discrete(m) => m.get_color(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wafer_common::db::core::{WaferInfo, WaferSpec};
    use wafer_common::geom::coord::{DieSize, GridCenter};

    fn wafer(data_type: DataType, dies: Vec<DieRecord>) -> WaferMap {
        let info = WaferInfo::new(
            DieSize::new(5.0, 5.0).unwrap(),
            GridCenter::new(10.0, 10.0).unwrap(),
            WaferSpec::new(100.0, 5.0, 5.0).unwrap(),
        )
        .unwrap();
        WaferMap::new(info, data_type, dies)
    }

    #[test]
    fn continuous_map_uses_explicit_range() {
        let map = wafer(
            DataType::Continuous,
            vec![
                DieRecord::new(0, 0, 0.0),
                DieRecord::new(1, 0, 10.0),
                DieRecord::new(2, 0, "x"),
            ],
        );
        let colors = GradientColors::default();
        let mapper = ColorMapper::for_map(&map, colors, Some(ColorRange::new(0.0, 5.0)), None);
        let out = mapper.color_all(&map.dies);
        assert_eq!(out, vec![colors.low, colors.oor_high, colors.invalid]);
    }

    #[test]
    fn discrete_map_defaults_to_sorted_labels() {
        let map = wafer(
            DataType::Discrete,
            vec![DieRecord::new(0, 0, "c"), DieRecord::new(1, 0, "a"), DieRecord::new(2, 0, "c")],
        );
        let mapper = ColorMapper::for_map(&map, GradientColors::default(), None, None);
        let ColorMapper::Discrete(d) = &mapper else {
            panic!("expected a discrete mapper");
        };
        let names: Vec<&str> = d.legend().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        let out = mapper.color_all(&map.dies);
        assert_eq!(out[0], out[2]);
        assert_ne!(out[0], out[1]);
    }

    #[test]
    fn numeric_values_in_discrete_map_match_by_text() {
        let d = DiscreteMapper::new(&["1", "2"], Color::WHITE);
        assert_eq!(d.get_color(&DieValue::Number(1.0)), d.color_of("1"));
        assert_eq!(d.get_color(&DieValue::Number(3.0)), Color::WHITE);
    }
}

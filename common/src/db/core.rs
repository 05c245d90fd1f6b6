use crate::error::WaferError;
use crate::geom::coord::{DieSize, GridCenter, GridCoord, GridMapper};
use crate::geom::exclusion::{chord_y, flat_exclusion_chord};
use serde::Deserialize;
use std::fmt;

/// Position of a record inside a wafer's die list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DieId(pub u32);

impl DieId {
    #[inline(always)]
    pub fn new(id: usize) -> Self {
        Self(id as u32)
    }
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Continuous,
    Discrete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DieValue {
    Number(f64),
    Label(String),
}

impl DieValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(l) => Some(l),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Label(l) => f.write_str(l),
        }
    }
}

impl From<f64> for DieValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for DieValue {
    fn from(l: &str) -> Self {
        Self::Label(l.to_string())
    }
}

impl From<String> for DieValue {
    fn from(l: String) -> Self {
        Self::Label(l)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DieRecord {
    pub grid: GridCoord,
    pub value: DieValue,
}

impl DieRecord {
    pub fn new(x: i32, y: i32, value: impl Into<DieValue>) -> Self {
        Self {
            grid: GridCoord::new(x, y),
            value: value.into(),
        }
    }
}

/// Physical wafer parameters, all in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaferSpec {
    pub diameter: f64,
    pub edge_exclusion: f64,
    pub flat_exclusion: f64,
}

impl WaferSpec {
    /// A `flat_exclusion` of zero means "same as the edge exclusion".
    pub fn new(
        diameter: f64,
        edge_exclusion: f64,
        flat_exclusion: f64,
    ) -> Result<Self, WaferError> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(WaferError::InvalidDiameter(diameter));
        }
        for (name, value) in [("edge", edge_exclusion), ("flat", flat_exclusion)] {
            if !value.is_finite() || value < 0.0 {
                return Err(WaferError::NegativeExclusion { name, value });
            }
        }
        let flat_exclusion = if flat_exclusion == 0.0 {
            edge_exclusion
        } else {
            flat_exclusion
        };
        Ok(Self {
            diameter,
            edge_exclusion,
            flat_exclusion,
        })
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn exclusion_radius(&self) -> f64 {
        self.radius() - self.edge_exclusion
    }

    /// Y of the flat exclusion line dies are clipped at, for a wafer with a
    /// flat of `flat_length`. `None` when the exclusion is a plain circle.
    pub fn flat_exclusion_line(&self, flat_length: Option<f64>) -> Option<f64> {
        let y_excl = chord_y(self.radius(), flat_length?) + self.flat_exclusion;
        flat_exclusion_chord(self.exclusion_radius(), y_excl).map(|_| y_excl)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaferInfo {
    pub die_size: DieSize,
    pub grid_center: GridCenter,
    pub spec: WaferSpec,
}

impl WaferInfo {
    /// Re-checks each part, since all three can be built field by field.
    pub fn new(
        die_size: DieSize,
        grid_center: GridCenter,
        spec: WaferSpec,
    ) -> Result<Self, WaferError> {
        DieSize::new(die_size.width, die_size.height)?;
        GridCenter::new(grid_center.x, grid_center.y)?;
        let normalized = WaferSpec::new(spec.diameter, spec.edge_exclusion, spec.flat_exclusion)?;
        Ok(Self {
            die_size,
            grid_center,
            spec: normalized,
        })
    }

    pub fn mapper(&self) -> GridMapper {
        GridMapper::new(self.die_size, self.grid_center)
    }
}

impl fmt::Display for WaferInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wafer Dia: {}mm", self.spec.diameter)?;
        writeln!(f, "Die Size: ({}, {})", self.die_size.width, self.die_size.height)?;
        writeln!(f, "Grid Center XY: ({}, {})", self.grid_center.x, self.grid_center.y)?;
        writeln!(f, "Edge Excl: {}", self.spec.edge_exclusion)?;
        write!(f, "Flat Excl: {}", self.spec.flat_exclusion)
    }
}

/// One wafer's worth of die data plus the parameters needed to place it.
#[derive(Clone, Debug)]
pub struct WaferMap {
    pub info: WaferInfo,
    pub data_type: DataType,
    pub dies: Vec<DieRecord>,
}

impl WaferMap {
    pub fn new(info: WaferInfo, data_type: DataType, dies: Vec<DieRecord>) -> Self {
        Self {
            info,
            data_type,
            dies,
        }
    }

    pub fn num_dies(&self) -> usize {
        self.dies.len()
    }

    /// Numeric die values in record order. Labels are skipped.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.dies.iter().filter_map(|d| d.value.as_number())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.dies.iter().filter_map(|d| d.value.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_flat_exclusion_follows_edge() {
        let spec = WaferSpec::new(150.0, 5.0, 0.0).unwrap();
        assert_eq!(spec.flat_exclusion, 5.0);
        let spec = WaferSpec::new(150.0, 5.0, 2.0).unwrap();
        assert_eq!(spec.flat_exclusion, 2.0);
        assert_eq!(spec.exclusion_radius(), 70.0);
    }

    #[test]
    fn rejects_bad_spec() {
        assert_eq!(
            WaferSpec::new(0.0, 5.0, 5.0),
            Err(WaferError::InvalidDiameter(0.0))
        );
        assert!(matches!(
            WaferSpec::new(150.0, -1.0, 5.0),
            Err(WaferError::NegativeExclusion { name: "edge", .. })
        ));
        assert!(WaferSpec::new(150.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn value_accessors() {
        let map = WaferMap::new(
            WaferInfo::new(
                DieSize::new(1.0, 1.0).unwrap(),
                GridCenter::default(),
                WaferSpec::new(100.0, 5.0, 5.0).unwrap(),
            )
            .unwrap(),
            DataType::Continuous,
            vec![
                DieRecord::new(0, 0, 1.5),
                DieRecord::new(1, 0, "bin3"),
                DieRecord::new(2, 0, 2.5),
            ],
        );
        assert_eq!(map.numbers().collect::<Vec<_>>(), vec![1.5, 2.5]);
        assert_eq!(map.labels().collect::<Vec<_>>(), vec!["bin3"]);
        assert_eq!(map.dies[1].value.to_string(), "bin3");
    }

    #[test]
    fn info_summary() {
        let info = WaferInfo::new(
            DieSize::new(5.0, 6.0).unwrap(),
            GridCenter::new(10.5, 11.0).unwrap(),
            WaferSpec::new(150.0, 5.0, 4.0).unwrap(),
        )
        .unwrap();
        let text = info.to_string();
        assert!(text.starts_with("Wafer Dia: 150mm"));
        assert!(text.contains("Grid Center XY: (10.5, 11)"));
        assert!(text.ends_with("Flat Excl: 4"));
    }

    #[test]
    fn info_rejects_hand_built_parts() {
        let spec = WaferSpec::new(150.0, 5.0, 5.0).unwrap();
        let size = DieSize::new(5.0, 5.0).unwrap();

        let flat_size = DieSize { width: 0.0, ..size };
        assert!(matches!(
            WaferInfo::new(flat_size, GridCenter::default(), spec),
            Err(WaferError::InvalidDieSize { .. })
        ));

        let lost = GridCenter { x: f64::NAN, y: 0.0 };
        assert!(matches!(
            WaferInfo::new(size, lost, spec),
            Err(WaferError::InvalidGridCenter { .. })
        ));

        let shrunk = WaferSpec { diameter: -150.0, ..spec };
        assert_eq!(
            WaferInfo::new(size, GridCenter::default(), shrunk),
            Err(WaferError::InvalidDiameter(-150.0))
        );

        let unnormalized = WaferSpec { flat_exclusion: 0.0, ..spec };
        let info = WaferInfo::new(size, GridCenter::default(), unnormalized).unwrap();
        assert_eq!(info.spec.flat_exclusion, 5.0);
    }

    #[test]
    fn flat_exclusion_line_follows_outline_rule() {
        let spec = WaferSpec::new(150.0, 5.0, 10.0).unwrap();
        let y = spec.flat_exclusion_line(Some(57.5)).unwrap();
        assert!((y + 59.271).abs() < 1e-3);

        let deep = WaferSpec::new(150.0, 5.0, 50.0).unwrap();
        assert_eq!(deep.flat_exclusion_line(Some(57.5)), None);
        assert_eq!(spec.flat_exclusion_line(None), None);
    }
}

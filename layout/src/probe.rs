use std::fmt;
use wafer_common::geom::coord::GridCoord;
use wafer_common::geom::point::Point;

/// What sits under a world point: the enclosing die and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe {
    pub point: Point<f64>,
    pub grid: GridCoord,
    /// Distance from the wafer center to the die center.
    pub die_radius: f64,
    pub value: String,
}

impl Probe {
    pub fn point_radius(&self) -> f64 {
        self.point.radius()
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Die {} :: Radius = {:.3} :: Value = {}   Mouse ({:.3}, {:.3}) :: Radius = {:.3}",
            self.grid,
            self.die_radius,
            self.value,
            self.point.x,
            self.point.y,
            self.point_radius()
        )
    }
}

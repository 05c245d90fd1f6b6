use super::point::Point;
use crate::error::WaferError;
use std::fmt;

/// Integer (column, row) of a die. Rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Lookup keys print as `x{col}y{row}`.
impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}y{}", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DieSize {
    pub width: f64,
    pub height: f64,
}

impl DieSize {
    pub fn new(width: f64, height: f64) -> Result<Self, WaferError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(WaferError::InvalidDieSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn half(&self) -> Point<f64> {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Real-valued grid coordinate that coincides with the wafer center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridCenter {
    pub x: f64,
    pub y: f64,
}

impl GridCenter {
    pub fn new(x: f64, y: f64) -> Result<Self, WaferError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(WaferError::InvalidGridCenter { x, y });
        }
        Ok(Self { x, y })
    }
}

/// Lower-left corner of the die at `grid`, in world millimetres.
///
/// The row axis is mirrored (grid y grows down, world y grows up), the
/// column axis is not.
pub fn grid_to_world(grid: GridCoord, die_size: DieSize, grid_center: GridCenter) -> Point<f64> {
    Point::new(
        die_size.width * (f64::from(grid.x) - grid_center.x - 0.5),
        die_size.height * (grid_center.y - f64::from(grid.y) - 0.5),
    )
}

/// Grid coordinate of the die enclosing `point`.
///
/// Rounds half-up through `floor(v + 0.5)`, so a point exactly on a street
/// belongs to the die on its right (x) or below it (y).
pub fn world_to_grid(point: Point<f64>, die_size: DieSize, grid_center: GridCenter) -> GridCoord {
    let x = (grid_center.x + 0.5 + point.x / die_size.width).floor();
    let y = (grid_center.y + 0.5 - point.y / die_size.height).floor();
    GridCoord::new(x as i32, y as i32)
}

/// Center of the die whose lower-left corner is `corner`.
pub fn die_center_of(corner: Point<f64>, die_size: DieSize) -> Point<f64> {
    corner + die_size.half()
}

/// Die size and grid center bundled, so callers convert without repeating
/// the reference point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapper {
    pub die_size: DieSize,
    pub grid_center: GridCenter,
}

impl GridMapper {
    pub fn new(die_size: DieSize, grid_center: GridCenter) -> Self {
        Self {
            die_size,
            grid_center,
        }
    }

    pub fn to_world(&self, g: GridCoord) -> Point<f64> {
        grid_to_world(g, self.die_size, self.grid_center)
    }

    pub fn to_grid(&self, p: Point<f64>) -> GridCoord {
        world_to_grid(p, self.die_size, self.grid_center)
    }

    pub fn die_center(&self, g: GridCoord) -> Point<f64> {
        die_center_of(self.to_world(g), self.die_size)
    }

    /// Distance from the wafer center to the center of die `g`.
    pub fn die_radius(&self, g: GridCoord) -> f64 {
        let dx = self.die_size.width * (self.grid_center.x - f64::from(g.x));
        let dy = self.die_size.height * (self.grid_center.y - f64::from(g.y));
        dx.hypot(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(w: f64, h: f64, cx: f64, cy: f64) -> GridMapper {
        GridMapper::new(DieSize::new(w, h).unwrap(), GridCenter::new(cx, cy).unwrap())
    }

    #[test]
    fn lower_left_corner_for_integral_center() {
        let m = mapper(2.0, 4.0, 5.0, 5.0);
        assert_eq!(m.to_world(GridCoord::new(5, 5)), Point::new(-1.0, -2.0));
        // One row further down lands one die height lower in world space.
        assert_eq!(m.to_world(GridCoord::new(5, 6)), Point::new(-1.0, -6.0));
        assert_eq!(m.to_world(GridCoord::new(6, 5)), Point::new(1.0, -2.0));
    }

    #[test]
    fn fractional_center_puts_origin_on_street() {
        let m = mapper(10.0, 10.0, 5.5, 5.5);
        assert_eq!(m.to_world(GridCoord::new(6, 5)), Point::new(0.0, 0.0));
    }

    #[test]
    fn die_centers_round_trip() {
        let centers = [(0.0, 0.0), (5.5, 5.5), (12.24, -3.0), (-2.0, 7.5), (31.0, 30.76)];
        let sizes = [(1.0, 1.0), (5.3, 7.1), (0.25, 12.0)];
        for &(cx, cy) in &centers {
            for &(w, h) in &sizes {
                let m = mapper(w, h, cx, cy);
                for gx in -30..30 {
                    for gy in -30..30 {
                        let g = GridCoord::new(gx, gy);
                        assert_eq!(m.to_grid(m.die_center(g)), g, "center {cx},{cy} size {w}x{h}");
                    }
                }
            }
        }
    }

    #[test]
    fn negative_grid_values_near_zero() {
        let m = mapper(1.0, 1.0, 0.0, 0.0);
        assert_eq!(m.to_grid(Point::new(-0.4, 0.4)), GridCoord::new(0, 0));
        assert_eq!(m.to_grid(Point::new(-0.6, 0.6)), GridCoord::new(-1, -1));
        assert_eq!(m.to_grid(Point::new(-1.4, -1.4)), GridCoord::new(-1, 1));
    }

    #[test]
    fn die_radius_is_center_distance() {
        let m = mapper(3.0, 4.0, 10.0, 10.0);
        assert_eq!(m.die_radius(GridCoord::new(10, 10)), 0.0);
        assert!((m.die_radius(GridCoord::new(11, 11)) - 5.0).abs() < 1e-12);
        let c = m.die_center(GridCoord::new(11, 11));
        assert!((c.radius() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_die_size() {
        assert!(DieSize::new(0.0, 1.0).is_err());
        assert!(DieSize::new(1.0, f64::NAN).is_err());
        assert!(DieSize::new(-1.0, 1.0).is_err());
    }

    #[test]
    fn grid_key_format() {
        assert_eq!(GridCoord::new(-3, 12).to_string(), "x-3y12");
    }
}

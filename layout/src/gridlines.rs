use wafer_common::geom::coord::{DieSize, GridCenter};
use wafer_common::geom::point::Point;
use wafer_common::geom::shape::Primitive;

/// Gridline half-length as a multiple of the wafer radius.
pub const GRIDLINE_REACH: f64 = 1.05;

/// Die-boundary lattice covering the wafer.
#[derive(Clone, Debug, PartialEq)]
pub struct Gridlines {
    /// X positions of vertical lines, ascending.
    pub vertical: Vec<f64>,
    /// Y positions of horizontal lines, ascending.
    pub horizontal: Vec<f64>,
    /// Lines run from `-extent` to `extent`.
    pub extent: f64,
}

impl Gridlines {
    pub fn primitives(&self) -> Vec<Primitive> {
        let e = self.extent;
        let vertical = self
            .vertical
            .iter()
            .map(|&x| Primitive::line(Point::new(x, -e), Point::new(x, e)));
        let horizontal = self
            .horizontal
            .iter()
            .map(|&y| Primitive::line(Point::new(-e, y), Point::new(e, y)));
        vertical.chain(horizontal).collect()
    }
}

pub fn gridlines(die_size: DieSize, grid_center: GridCenter, diameter: f64) -> Gridlines {
    let extent = diameter / 2.0 * GRIDLINE_REACH;

    // The fractional part of the grid center decides where the streets fall
    // relative to the wafer origin.
    let x_ref = -grid_center.x.fract() * die_size.width + die_size.width / 2.0;
    let y_ref = grid_center.y.fract() * die_size.height + die_size.height / 2.0;

    Gridlines {
        vertical: lattice(x_ref, die_size.width, extent),
        horizontal: lattice(y_ref, die_size.height, extent),
        extent,
    }
}

/// `reference + k * step` for every k landing strictly inside `(-edge, edge)`,
/// always starting from the reference itself on the negative side.
fn lattice(reference: f64, step: f64, edge: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !edge.is_finite() {
        return Vec::new();
    }
    let mut values: Vec<f64> = (0u32..)
        .map(|k| reference - f64::from(k) * step)
        .take_while(|&v| v > -edge)
        .collect();
    values.reverse();
    values.extend(
        (1u32..)
            .map(|k| reference + f64::from(k) * step)
            .take_while(|&v| v < edge),
    );
    values
}

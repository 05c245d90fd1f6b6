use wafer_common::geom::point::Point;
use wafer_common::geom::shape::Primitive;

pub use wafer_common::geom::exclusion::chord_y;

/// Wafer flat lengths in mm, per SEMI M1-0302.
pub const FLAT_LENGTHS: [(f64, f64); 5] = [
    (50.0, 15.88),
    (75.0, 22.22),
    (100.0, 32.5),
    (125.0, 42.5),
    (150.0, 57.5),
];

/// `None` means the diameter is not tabled and the wafer gets a notch.
pub fn flat_length_for_diameter(dia: f64) -> Option<f64> {
    FLAT_LENGTHS
        .iter()
        .find(|(d, _)| *d == dia)
        .map(|&(_, len)| len)
}

/// Arc over the top of the circle plus the chord closing it at `y`.
pub(crate) fn flat_outline(x: f64, y: f64) -> Vec<Primitive> {
    vec![
        Primitive::Arc {
            center: Point::ORIGIN,
            start: Point::new(x, y),
            end: Point::new(-x, y),
        },
        Primitive::line(Point::new(-x, y), Point::new(x, y)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup() {
        assert_eq!(flat_length_for_diameter(150.0), Some(57.5));
        assert_eq!(flat_length_for_diameter(50.0), Some(15.88));
        assert_eq!(flat_length_for_diameter(151.0), None);
        assert_eq!(flat_length_for_diameter(200.0), None);
    }
}

use wafer_common::geom::point::Point;
use wafer_common::geom::shape::Primitive;

/// Half-width of the notch opening, in degrees from straight down.
pub const NOTCH_HALF_ANGLE: f64 = 2.5;
/// Notch tip depth as a fraction of the radius.
pub const NOTCH_DEPTH: f64 = 0.95;

/// Endpoints of the chord spanning `angle` degrees either side of straight
/// down, right point first.
pub fn notch_chord(radius: f64, angle: f64) -> (Point<f64>, Point<f64>) {
    let a = angle.to_radians();
    (
        Point::new(radius * a.sin(), -radius * a.cos()),
        Point::new(-radius * a.sin(), -radius * a.cos()),
    )
}

/// Circle arc with the notch opening cut out, plus the notch itself.
pub(crate) fn notch_outline(radius: f64) -> Vec<Primitive> {
    let (right, left) = notch_chord(radius, NOTCH_HALF_ANGLE);
    vec![
        Primitive::Arc {
            center: Point::ORIGIN,
            start: right,
            end: left,
        },
        Primitive::Polyline {
            points: vec![left, Point::new(0.0, -radius * NOTCH_DEPTH), right],
        },
    ]
}

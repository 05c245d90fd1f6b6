use wafer_common::geom::point::Point;
use wafer_common::geom::shape::Primitive;
use wafer_common::util::config::CrosshairStyle;

/// Crosshair half-length as a multiple of the wafer radius.
pub const CROSSHAIR_REACH: f64 = 1.05;
pub const CENTER_DOT_RADIUS: f64 = 2.5;

pub fn crosshairs(dia: f64, style: CrosshairStyle) -> Vec<Primitive> {
    match style {
        CrosshairStyle::Dot => vec![Primitive::circle(Point::ORIGIN, CENTER_DOT_RADIUS)],
        CrosshairStyle::Lines => {
            let reach = dia / 2.0 * CROSSHAIR_REACH;
            vec![
                Primitive::line(Point::new(reach, 0.0), Point::new(-reach, 0.0)),
                Primitive::line(Point::new(0.0, reach), Point::new(0.0, -reach)),
            ]
        }
    }
}

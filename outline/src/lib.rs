pub mod crosshair;
pub mod flat;
pub mod notch;

use wafer_common::db::core::WaferSpec;
use wafer_common::geom::exclusion::flat_exclusion_chord;
use wafer_common::geom::point::Point;
use wafer_common::geom::shape::Primitive;
use wafer_common::util::config::CrosshairStyle;

pub use flat::flat_length_for_diameter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    Flat { length: f64 },
    Notch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutlineGeometry {
    pub orientation: Orientation,
    /// Full wafer edge circle.
    pub edge: Primitive,
    /// Arc plus flat chord, or arc plus notch, at the wafer radius.
    pub orientation_mark: Vec<Primitive>,
    /// Empty when the edge exclusion eats the whole wafer.
    pub exclusion: Vec<Primitive>,
    pub crosshairs: Vec<Primitive>,
}

impl OutlineGeometry {
    pub fn from_spec(spec: &WaferSpec, style: CrosshairStyle) -> Self {
        build_outline_with(
            spec.diameter,
            spec.edge_exclusion,
            spec.flat_exclusion,
            style,
        )
    }

    pub fn exclusion_is_circle(&self) -> bool {
        matches!(self.exclusion.as_slice(), [p] if p.is_circle())
    }

    /// Edge, orientation mark and exclusion boundary, without crosshairs.
    pub fn outline(&self) -> impl Iterator<Item = &Primitive> {
        std::iter::once(&self.edge)
            .chain(self.orientation_mark.iter())
            .chain(self.exclusion.iter())
    }
}

pub fn build_outline(dia: f64, edge_excl: f64, flat_excl: f64) -> OutlineGeometry {
    build_outline_with(dia, edge_excl, flat_excl, CrosshairStyle::Lines)
}

pub fn build_outline_with(
    dia: f64,
    edge_excl: f64,
    flat_excl: f64,
    style: CrosshairStyle,
) -> OutlineGeometry {
    let flat_excl = if flat_excl == 0.0 { edge_excl } else { flat_excl };
    let radius = dia / 2.0;
    let excl_radius = radius - edge_excl;

    if excl_radius <= 0.0 {
        log::warn!(
            "Edge exclusion {:.3}mm leaves no usable area on a {}mm wafer.",
            edge_excl,
            dia
        );
    }

    let (orientation, orientation_mark, exclusion) = match flat_length_for_diameter(dia) {
        Some(length) => {
            let y = flat::chord_y(radius, length);
            let exclusion = flat_exclusion(excl_radius, y + flat_excl);
            (
                Orientation::Flat { length },
                flat::flat_outline(length / 2.0, y),
                exclusion,
            )
        }
        None => {
            log::debug!("{}mm has no SEMI flat length, marking with a notch", dia);
            let exclusion = if excl_radius > 0.0 {
                notch::notch_outline(excl_radius)
            } else {
                Vec::new()
            };
            (Orientation::Notch, notch::notch_outline(radius), exclusion)
        }
    };

    OutlineGeometry {
        orientation,
        edge: Primitive::circle(Point::ORIGIN, radius),
        orientation_mark,
        exclusion,
        crosshairs: crosshair::crosshairs(dia, style),
    }
}

/// Exclusion boundary for a flatted wafer.
///
/// The flat exclusion line clips the exclusion circle only while the cut is
/// a shallow chord near the flat. Otherwise the boundary is the bare circle.
fn flat_exclusion(excl_radius: f64, y_excl: f64) -> Vec<Primitive> {
    if excl_radius <= 0.0 {
        return Vec::new();
    }
    match flat_exclusion_chord(excl_radius, y_excl) {
        Some(x) => flat::flat_outline(x, y_excl),
        None => vec![Primitive::circle(Point::ORIGIN, excl_radius)],
    }
}

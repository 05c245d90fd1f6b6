//! Where the flat exclusion line cuts the exclusion circle.
//!
//! Shared by the outline builder and the demo generator so the boundary
//! that is drawn is the one die are clipped against.

/// Y of a horizontal chord of length `length` below the center.
pub fn chord_y(radius: f64, length: f64) -> f64 {
    let half = length / 2.0;
    -(radius * radius - half * half).max(0.0).sqrt()
}

/// Half-width of the flat exclusion chord at `y_excl`, or `None` when the
/// boundary relaxes to a plain circle.
///
/// The chord is kept while it subtends at most a quarter turn, i.e. its
/// half-width does not exceed its depth below the center. A line outside
/// the circle, or one cutting it higher up, only clips the circle's side.
pub fn flat_exclusion_chord(excl_radius: f64, y_excl: f64) -> Option<f64> {
    if excl_radius <= 0.0 {
        return None;
    }
    if excl_radius < y_excl.abs() {
        log::debug!(
            "Flat exclusion line y={:.3} misses exclusion radius {:.3}; using a plain circle.",
            y_excl,
            excl_radius
        );
        return None;
    }
    let x = (excl_radius * excl_radius - y_excl * y_excl).sqrt();
    if y_excl >= 0.0 || x > -y_excl {
        log::debug!(
            "Flat exclusion chord at y={:.3} is {:.3} wide each side; using a plain circle.",
            y_excl,
            x
        );
        return None;
    }
    Some(x)
}

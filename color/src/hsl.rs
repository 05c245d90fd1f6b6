//! RGB <-> HSL on unit channels. Hue is a turn fraction in `0.0..=1.0`.

// Channel spread below which a color is treated as grey.
const FLOAT_ERROR: f64 = 5e-7;

pub fn rgb_to_hsl([r, g, b]: [f64; 3]) -> [f64; 3] {
    let vmin = r.min(g).min(b);
    let vmax = r.max(g).max(b);
    let diff = vmax - vmin;
    let vsum = vmax + vmin;
    let l = vsum / 2.0;

    if diff < FLOAT_ERROR {
        return [0.0, 0.0, l];
    }

    let s = if l < 0.5 {
        diff / vsum
    } else {
        diff / (2.0 - vsum)
    };

    let dr = ((vmax - r) / 6.0 + diff / 2.0) / diff;
    let dg = ((vmax - g) / 6.0 + diff / 2.0) / diff;
    let db = ((vmax - b) / 6.0 + diff / 2.0) / diff;

    let mut h = if r == vmax {
        db - dg
    } else if g == vmax {
        1.0 / 3.0 + dr - db
    } else {
        2.0 / 3.0 + dg - dr
    };
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    [h, s, l]
}

pub fn hsl_to_rgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let v2 = if l < 0.5 {
        l * (1.0 + s)
    } else {
        (l + s) - s * l
    };
    let v1 = 2.0 * l - v2;
    [
        hue_to_channel(v1, v2, h + 1.0 / 3.0),
        hue_to_channel(v1, v2, h),
        hue_to_channel(v1, v2, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(v1: f64, v2: f64, hue: f64) -> f64 {
    let vh = if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    };
    if 6.0 * vh < 1.0 {
        v1 + (v2 - v1) * 6.0 * vh
    } else if 2.0 * vh < 1.0 {
        v2
    } else if 3.0 * vh < 2.0 {
        v1 + (v2 - v1) * (2.0 / 3.0 - vh) * 6.0
    } else {
        v1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn primaries() {
        assert!(close(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]));
        assert!(close(rgb_to_hsl([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 0.5]));
        assert!(close(rgb_to_hsl([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 0.5]));
        assert!(close(rgb_to_hsl([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn round_trips_through_hsl() {
        for rgb in [
            [0.2, 0.4, 0.6],
            [0.9, 0.1, 0.3],
            [0.5, 0.5, 0.1],
            [0.0, 0.75, 0.25],
        ] {
            assert!(close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb), "{:?}", rgb);
        }
    }
}

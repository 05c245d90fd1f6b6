use super::point::Point;
use std::f64::consts::TAU;

/// Toolkit-agnostic drawing primitive in world millimetres.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point<f64>,
        radius: f64,
    },
    /// Counter-clockwise sweep about `center` from `start` to `end`.
    Arc {
        center: Point<f64>,
        start: Point<f64>,
        end: Point<f64>,
    },
    Polyline {
        points: Vec<Point<f64>>,
    },
}

impl Primitive {
    pub fn circle(center: Point<f64>, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    pub fn line(a: Point<f64>, b: Point<f64>) -> Self {
        Self::Polyline { points: vec![a, b] }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Self::Circle { .. })
    }

    /// Points along the primitive, with curves split into at most
    /// `segments_per_turn` chords per full revolution.
    pub fn flatten(&self, segments_per_turn: usize) -> Vec<Point<f64>> {
        let per_turn = segments_per_turn.max(8) as f64;
        match self {
            Self::Circle { center, radius } => sweep(*center, *radius, 0.0, TAU, per_turn as usize),
            Self::Arc { center, start, end } => {
                let radius = start.distance(*center);
                let a0 = (start.y - center.y).atan2(start.x - center.x);
                let a1 = (end.y - center.y).atan2(end.x - center.x);
                let mut span = a1 - a0;
                if span <= 0.0 {
                    span += TAU;
                }
                let n = ((span / TAU) * per_turn).ceil().max(1.0) as usize;
                sweep(*center, radius, a0, span, n)
            }
            Self::Polyline { points } => points.clone(),
        }
    }
}

fn sweep(center: Point<f64>, radius: f64, start: f64, span: f64, n: usize) -> Vec<Point<f64>> {
    (0..=n)
        .map(|i| {
            let a = start + span * (i as f64 / n as f64);
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

use super::coord::DieSize;
use super::point::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point<f64>,
    pub max: Point<f64>,
}

impl Rect {
    pub fn new(min: Point<f64>, max: Point<f64>) -> Self {
        Self { min, max }
    }

    /// Die rectangle drawn from its lower-left corner.
    pub fn from_origin(origin: Point<f64>, size: DieSize) -> Self {
        Self::new(
            origin,
            Point::new(origin.x + size.width, origin.y + size.height),
        )
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn contains(&self, p: Point<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Squared distance from the wafer center to the farthest corner.
    ///
    /// The farthest corner sits in the same quadrant as the rectangle's
    /// center, so only that one is measured.
    pub fn max_dist_sqrd(&self) -> f64 {
        let c = self.center();
        let half_x = self.width() / 2.0;
        let half_y = self.height() / 2.0;
        let far_x = if c.x < 0.0 { c.x - half_x } else { c.x + half_x };
        let far_y = if c.y < 0.0 { c.y - half_y } else { c.y + half_y };
        far_x * far_x + far_y * far_y
    }
}

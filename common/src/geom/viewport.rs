use super::point::Point;

/// Zoom gained per unit of wheel rotation; one 120-unit notch gives 1.1x.
pub const ZOOM_FACTOR: f64 = 1.1 / 120.0;

/// Zoom multiplier for a wheel rotation. Faster wheel motion zooms further.
pub fn wheel_zoom_factor(rotation: i32) -> f64 {
    if rotation == 0 {
        return 1.0;
    }
    let base = f64::from(rotation.unsigned_abs()) * ZOOM_FACTOR;
    if rotation > 0 { base } else { base.recip() }
}

/// Uniform world <-> pixel transform. Pixel y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    scale: f64,
    center: Point<f64>,
}

impl Viewport {
    /// Shows the square `[-extent, extent]` centered in a `width` x `height`
    /// pixel canvas.
    pub fn fit(extent: f64, width: u32, height: u32) -> Self {
        let short = f64::from(width.min(height).max(1));
        let extent = if extent > 0.0 { extent } else { 1.0 };
        Self {
            width,
            height,
            scale: short / (2.0 * extent),
            center: Point::ORIGIN,
        }
    }

    /// Pixels per millimetre.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// World point under the middle of the canvas.
    pub fn center(&self) -> Point<f64> {
        self.center
    }

    fn half(&self) -> Point<f64> {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn world_to_pixel(&self, p: Point<f64>) -> Point<f64> {
        let h = self.half();
        Point::new(
            h.x + (p.x - self.center.x) * self.scale,
            h.y - (p.y - self.center.y) * self.scale,
        )
    }

    pub fn pixel_to_world(&self, px: Point<f64>) -> Point<f64> {
        let h = self.half();
        Point::new(
            self.center.x + (px.x - h.x) / self.scale,
            self.center.y - (px.y - h.y) / self.scale,
        )
    }

    /// Moves the image by a pixel delta, as a drag would.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.center.x -= dx / self.scale;
        self.center.y += dy / self.scale;
    }

    /// Scales by `factor` while the world point under `anchor` stays put.
    pub fn zoom_about(&mut self, anchor: Point<f64>, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let before = self.pixel_to_world(anchor);
        self.scale *= factor;
        let after = self.pixel_to_world(anchor);
        self.center = self.center + (before - after);
    }
}

use crate::color::Color;
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::geom::shape::Primitive;
use crate::geom::viewport::Viewport;
use image::{ImageResult, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as ImageRect;
use std::path::Path;

const SEGMENTS_PER_TURN: usize = 256;
// Below this size (px) die are drawn without a street border.
const MIN_BORDERED_DIE: u32 = 4;

#[derive(Clone, Debug)]
pub struct SceneDie {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct Stroke {
    pub primitive: Primitive,
    pub color: Color,
}

/// Everything to rasterize, in world coordinates. Strokes are drawn over
/// the die, in insertion order.
#[derive(Clone, Debug)]
pub struct Scene {
    pub background: Color,
    pub dies: Vec<SceneDie>,
    pub strokes: Vec<Stroke>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            dies: Vec::new(),
            strokes: Vec::new(),
        }
    }

    pub fn stroke_all<'a, I>(&mut self, primitives: I, color: Color)
    where
        I: IntoIterator<Item = &'a Primitive>,
    {
        self.strokes.extend(primitives.into_iter().map(|p| Stroke {
            primitive: p.clone(),
            color,
        }));
    }
}

pub fn render(scene: &Scene, view: &Viewport) -> RgbImage {
    let (w, h) = (view.width.max(1), view.height.max(1));
    let mut img = RgbImage::from_pixel(w, h, scene.background.into());

    for die in &scene.dies {
        let tl = view.world_to_pixel(Point::new(die.rect.min.x, die.rect.max.y));
        let br = view.world_to_pixel(Point::new(die.rect.max.x, die.rect.min.y));
        let pw = (br.x - tl.x).round().max(1.0) as u32;
        let ph = (br.y - tl.y).round().max(1.0) as u32;
        let rect = ImageRect::at(tl.x.round() as i32, tl.y.round() as i32).of_size(pw, ph);
        draw_filled_rect_mut(&mut img, rect, die.color.into());
        if pw >= MIN_BORDERED_DIE && ph >= MIN_BORDERED_DIE {
            draw_hollow_rect_mut(&mut img, rect, scene.background.into());
        }
    }

    for stroke in &scene.strokes {
        let points: Vec<Point<f64>> = stroke
            .primitive
            .flatten(SEGMENTS_PER_TURN)
            .into_iter()
            .map(|p| view.world_to_pixel(p))
            .collect();
        for pair in points.windows(2) {
            draw_line_segment_mut(
                &mut img,
                (pair[0].x as f32, pair[0].y as f32),
                (pair[1].x as f32, pair[1].y as f32),
                stroke.color.into(),
            );
        }
    }
    img
}

pub fn draw_scene(scene: &Scene, view: &Viewport, filename: &str) -> ImageResult<()> {
    log::info!(
        "Rendering {} die and {} strokes to {} ({}x{})",
        scene.dies.len(),
        scene.strokes.len(),
        filename,
        view.width,
        view.height
    );
    render(scene, view).save(Path::new(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::coord::DieSize;

    #[test]
    fn die_lands_where_the_viewport_puts_it() {
        let view = Viewport::fit(10.0, 100, 100);
        let mut scene = Scene::new(Color::BLACK);
        let red = Color::rgb(255, 0, 0);
        scene.dies.push(SceneDie {
            rect: Rect::from_origin(Point::new(0.0, 0.0), DieSize::new(5.0, 5.0).unwrap()),
            color: red,
        });
        let img = render(&scene, &view);
        // World (2.5, 2.5) is pixel (62.5, 37.5).
        assert_eq!(*img.get_pixel(62, 37), image::Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(25, 75), image::Rgb([0, 0, 0]));
        // Border pixels show the street.
        assert_eq!(*img.get_pixel(50, 40), image::Rgb([0, 0, 0]));
    }

    #[test]
    fn strokes_draw_over_die() {
        let view = Viewport::fit(10.0, 100, 100);
        let mut scene = Scene::new(Color::BLACK);
        scene.dies.push(SceneDie {
            rect: Rect::from_origin(Point::new(-10.0, -10.0), DieSize::new(20.0, 20.0).unwrap()),
            color: Color::rgb(0, 0, 255),
        });
        let line = Primitive::line(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
        scene.stroke_all([&line], Color::WHITE);
        let img = render(&scene, &view);
        assert_eq!(*img.get_pixel(30, 50), image::Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(30, 30), image::Rgb([0, 0, 255]));
    }
}

use rayon::prelude::*;
use std::collections::HashMap;
use wafer_common::db::core::{DieId, DieRecord, DieValue};
use wafer_common::geom::coord::{DieSize, GridCenter, GridCoord, GridMapper};
use wafer_common::geom::point::Point;
use wafer_common::geom::rect::Rect;
use wafer_common::geom::shape::Primitive;

use crate::probe::Probe;

/// Shown for a grid position that holds no die.
pub const NOT_APPLICABLE: &str = "N/A";

pub const DIE_CENTER_RADIUS: f64 = 0.5;

/// Screen-ready placement of a die list plus an O(1) grid lookup.
pub struct WaferLayout<'a> {
    dies: &'a [DieRecord],
    mapper: GridMapper,
    origins: Vec<Point<f64>>,
    index: HashMap<GridCoord, DieId>,
}

pub fn layout(dies: &[DieRecord], die_size: DieSize, grid_center: GridCenter) -> WaferLayout<'_> {
    let mapper = GridMapper::new(die_size, grid_center);

    let origins: Vec<Point<f64>> = dies.par_iter().map(|d| mapper.to_world(d.grid)).collect();

    let mut index = HashMap::with_capacity(dies.len());
    let mut duplicates = 0usize;
    for (i, die) in dies.iter().enumerate() {
        if index.insert(die.grid, DieId::new(i)).is_some() {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        log::debug!(
            "{} duplicate grid coordinates; the last record at each wins lookups.",
            duplicates
        );
    }

    WaferLayout {
        dies,
        mapper,
        origins,
        index,
    }
}

impl<'a> WaferLayout<'a> {
    pub fn len(&self) -> usize {
        self.dies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dies.is_empty()
    }

    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    pub fn die(&self, id: DieId) -> &'a DieRecord {
        &self.dies[id.index()]
    }

    /// Lower-left corner of a die, in world millimetres.
    pub fn origin(&self, id: DieId) -> Point<f64> {
        self.origins[id.index()]
    }

    pub fn find(&self, grid: GridCoord) -> Option<DieId> {
        self.index.get(&grid).copied()
    }

    pub fn origin_at(&self, grid: GridCoord) -> Option<Point<f64>> {
        self.find(grid).map(|id| self.origin(id))
    }

    /// `(grid, lower-left corner)` for each record, in record order.
    pub fn origins(&self) -> impl Iterator<Item = (GridCoord, Point<f64>)> + '_ {
        self.dies
            .iter()
            .zip(self.origins.iter())
            .map(|(d, &o)| (d.grid, o))
    }

    pub fn rects(&self) -> impl Iterator<Item = (&'a DieRecord, Rect)> + '_ {
        let size = self.mapper.die_size;
        self.dies
            .iter()
            .zip(self.origins.iter())
            .map(move |(d, &o)| (d, Rect::from_origin(o, size)))
    }

    pub fn value_at(&self, grid: GridCoord) -> Option<&'a DieValue> {
        self.find(grid).map(|id| &self.die(id).value)
    }

    /// Display text for a grid position, [`NOT_APPLICABLE`] when empty.
    pub fn value_text(&self, grid: GridCoord) -> String {
        match self.value_at(grid) {
            Some(v) => v.to_string(),
            None => NOT_APPLICABLE.to_string(),
        }
    }

    /// Small dots marking every die center.
    pub fn die_centers(&self) -> Vec<Primitive> {
        let half = self.mapper.die_size.half();
        self.origins
            .iter()
            .map(|&o| Primitive::circle(o + half, DIE_CENTER_RADIUS))
            .collect()
    }

    /// Status information for a world point, as shown on mouse-over.
    pub fn probe(&self, point: Point<f64>) -> Probe {
        let grid = self.mapper.to_grid(point);
        Probe {
            point,
            grid,
            die_radius: self.mapper.die_radius(grid),
            value: self.value_text(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DieRecord> {
        vec![
            DieRecord::new(4, 5, 1.0),
            DieRecord::new(5, 5, 2.0),
            DieRecord::new(5, 6, f64::NAN),
            DieRecord::new(6, 5, 3.0),
        ]
    }

    #[test]
    fn origins_follow_grid_to_world() {
        let dies = sample();
        let size = DieSize::new(2.0, 3.0).unwrap();
        let center = GridCenter::new(5.0, 5.0).unwrap();
        let l = layout(&dies, size, center);
        assert_eq!(l.len(), 4);
        assert_eq!(l.origin_at(GridCoord::new(5, 5)), Some(Point::new(-1.0, -1.5)));
        assert_eq!(l.origin_at(GridCoord::new(5, 6)), Some(Point::new(-1.0, -4.5)));
        let origins: Vec<_> = l.origins().collect();
        assert_eq!(origins[0], (GridCoord::new(4, 5), Point::new(-3.0, -1.5)));
        let (_, rect) = l.rects().nth(3).unwrap();
        assert_eq!(rect.min, Point::new(1.0, -1.5));
        assert_eq!(rect.max, Point::new(3.0, 1.5));
    }

    #[test]
    fn lookup_and_missing_sentinel() {
        let dies = sample();
        let l = layout(&dies, DieSize::new(1.0, 1.0).unwrap(), GridCenter::default());
        assert_eq!(l.value_at(GridCoord::new(6, 5)), Some(&DieValue::Number(3.0)));
        assert_eq!(l.value_text(GridCoord::new(6, 5)), "3");
        assert_eq!(l.value_at(GridCoord::new(0, 0)), None);
        assert_eq!(l.value_text(GridCoord::new(0, 0)), NOT_APPLICABLE);
    }

    #[test]
    fn duplicates_keep_last_record() {
        let dies = vec![
            DieRecord::new(1, 1, "a"),
            DieRecord::new(1, 1, "b"),
        ];
        let l = layout(&dies, DieSize::new(1.0, 1.0).unwrap(), GridCenter::default());
        assert_eq!(l.value_text(GridCoord::new(1, 1)), "b");
        assert_eq!(l.find(GridCoord::new(1, 1)), Some(DieId::new(1)));
    }

    #[test]
    fn probe_finds_die_under_point() {
        let dies = sample();
        let size = DieSize::new(2.0, 2.0).unwrap();
        let l = layout(&dies, size, GridCenter::new(5.0, 5.0).unwrap());
        // Just right of the center die lands in column 6.
        let p = l.probe(Point::new(1.2, 0.3));
        assert_eq!(p.grid, GridCoord::new(6, 5));
        assert_eq!(p.value, "3");
        assert!((p.die_radius - 2.0).abs() < 1e-12);

        let far = l.probe(Point::new(50.0, 50.0));
        assert_eq!(far.value, NOT_APPLICABLE);
    }

    #[test]
    fn die_center_dots() {
        let dies = sample();
        let l = layout(&dies, DieSize::new(2.0, 2.0).unwrap(), GridCenter::new(5.0, 5.0).unwrap());
        let dots = l.die_centers();
        assert_eq!(dots.len(), 4);
        assert_eq!(dots[1], Primitive::circle(Point::ORIGIN, DIE_CENTER_RADIUS));
    }
}

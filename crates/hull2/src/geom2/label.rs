//! Label placement: pole of inaccessibility of a polygon.
//!
//! Finds the interior point farthest from the boundary by a best-first
//! quad-tree search. Each square cell carries the signed distance `d` of its
//! centre and an upper bound `d + h·√2` for anything inside it; the heap pops
//! the most promising cell, and a cell is only split while its bound beats the
//! best distance so far by more than `precision`.
//!
//! Code cross-refs: `polygon::{point_to_polygon_distance, area_centroid}`

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::polygon::{area_centroid, point_to_polygon_distance};
use super::types::Point2;

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct LabelCfg {
    /// Stop refining once no cell can improve the distance by more than this.
    pub precision: f64,
    /// Hard cap on evaluated cells; the best cell so far is returned.
    pub max_cells: usize,
}

impl Default for LabelCfg {
    fn default() -> Self {
        Self {
            precision: 1.0,
            max_cells: 1_000_000,
        }
    }
}

/// Result of `polylabel`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub point: Point2,
    /// Distance to the boundary (negative if the best point lies outside,
    /// which only happens for polygons without interior).
    pub distance: f64,
    /// Number of cells evaluated.
    pub cells: usize,
}

#[derive(Clone, Copy, Debug)]
struct Cell {
    c: Point2,
    h: f64,
    d: f64,
    max: f64,
    seq: u64,
}

impl Cell {
    fn new(c: Point2, h: f64, poly: &[Point2], seq: u64) -> Self {
        let d = point_to_polygon_distance(c, poly);
        Self {
            c,
            h,
            d,
            max: d + h * std::f64::consts::SQRT_2,
            seq,
        }
    }
}

// Max-heap on `max`; among equal bounds the older cell wins.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.max
            .total_cmp(&other.max)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Cell {}

/// Pole of inaccessibility of `polygon` (any winding).
///
/// `None` for an empty polygon. A polygon whose bounding box has zero width
/// or height yields its bounding-box minimum with distance `0.0`.
pub fn polylabel(polygon: &[Point2], cfg: LabelCfg) -> Option<Label> {
    let first = *polygon.first()?;
    let (min, max) = polygon.iter().fold((first, first), |(lo, hi), p| {
        (
            Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    });
    let width = max.x - min.x;
    let height = max.y - min.y;
    let mut cell_size = width.min(height);
    if !(cell_size > 0.0 && width.is_finite() && height.is_finite()) {
        return Some(Label {
            point: min,
            distance: 0.0,
            cells: 0,
        });
    }

    // The initial grid counts against `max_cells`: coarsen it until it fits.
    let grid = |size: f64| {
        let cols = (width / size).ceil().max(1.0);
        let rows = (height / size).ceil().max(1.0);
        (cols, rows)
    };
    let budget = cfg.max_cells.max(1) as f64;
    let (mut cols, mut rows) = grid(cell_size);
    while cols * rows > budget {
        cell_size *= 2.0;
        (cols, rows) = grid(cell_size);
    }

    let mut seq = 0u64;
    let mut next_seq = || {
        seq += 1;
        seq
    };
    let mut heap = BinaryHeap::new();
    let h = cell_size / 2.0;
    // Integer indices: `x += cell_size` can stall when `x` dwarfs the step.
    for i in 0..cols as usize {
        let x = min.x + i as f64 * cell_size;
        for j in 0..rows as usize {
            let y = min.y + j as f64 * cell_size;
            heap.push(Cell::new(Point2::new(x + h, y + h), h, polygon, next_seq()));
        }
    }

    let centroid = area_centroid(polygon).unwrap_or(first);
    let mut best = Cell::new(centroid, 0.0, polygon, 0);
    let bbox_cell = Cell::new(
        Point2::new(min.x + width / 2.0, min.y + height / 2.0),
        0.0,
        polygon,
        0,
    );
    if bbox_cell.d > best.d {
        best = bbox_cell;
    }

    let mut cells = heap.len();
    while let Some(cell) = heap.pop() {
        if cell.d > best.d {
            best = cell;
        }
        if cell.max - best.d <= cfg.precision || cells >= cfg.max_cells {
            continue;
        }
        let h = cell.h / 2.0;
        for (dx, dy) in [(-h, -h), (h, -h), (-h, h), (h, h)] {
            let c = Point2::new(cell.c.x + dx, cell.c.y + dy);
            heap.push(Cell::new(c, h, polygon, next_seq()));
        }
        cells += 4;
    }

    Some(Label {
        point: best.c,
        distance: best.d,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_label_is_centre() {
        let square = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        ];
        let l = polylabel(&square, LabelCfg::default()).unwrap();
        assert!((l.point - Point2::new(5.0, 5.0)).norm() < 1e-9);
        assert!((l.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn rectangle_label_respects_precision() {
        let rect = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(8.0, 2.0),
            Point2::new(8.0, 0.0),
        ];
        let cfg = LabelCfg {
            precision: 1e-3,
            ..LabelCfg::default()
        };
        let l = polylabel(&rect, cfg).unwrap();
        // Inradius of a 8x2 rectangle is 1.
        assert!(l.distance <= 1.0 + 1e-12);
        assert!(l.distance >= 1.0 - 1e-3);
        assert!((l.point.y - 1.0).abs() < 1e-2);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(polylabel(&[], LabelCfg::default()).is_none());
        let seg = vec![Point2::new(1.0, 1.0), Point2::new(3.0, 1.0)];
        let l = polylabel(&seg, LabelCfg::default()).unwrap();
        assert_eq!(l.point, Point2::new(1.0, 1.0));
        assert_eq!(l.distance, 0.0);
        assert_eq!(l.cells, 0);
    }

    #[test]
    fn cell_cap_terminates() {
        let tri = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 3.0),
            Point2::new(4.0, 0.0),
        ];
        let cfg = LabelCfg {
            precision: 0.0,
            max_cells: 64,
        };
        let l = polylabel(&tri, cfg).unwrap();
        assert!(l.cells <= 64 + 4);
        assert!(l.distance > 0.0);
    }

    #[test]
    fn thin_polygon_grid_respects_cell_cap() {
        // Aspect ratio 1e6: the unclamped starting grid would hold 1e6 cells.
        let sliver = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1000.0, 0.001),
            Point2::new(1000.0, 0.0),
        ];
        let cfg = LabelCfg {
            precision: 1.0,
            max_cells: 64,
        };
        let l = polylabel(&sliver, cfg).unwrap();
        assert!(l.cells <= cfg.max_cells + 4, "cells = {}", l.cells);
        assert!(l.point.x >= 0.0 && l.point.x <= 1000.0);
    }

    #[test]
    fn far_from_origin_grid_terminates() {
        // At 1e17 one ulp is 16, so adding a unit step to x is a no-op.
        let x0 = 1e17;
        let strip = vec![
            Point2::new(x0, 0.0),
            Point2::new(x0, 1.0),
            Point2::new(x0 + 64.0, 1.0),
            Point2::new(x0 + 64.0, 0.0),
        ];
        let cfg = LabelCfg {
            precision: 1.0,
            max_cells: 1_000,
        };
        let l = polylabel(&strip, cfg).unwrap();
        assert!(l.cells <= cfg.max_cells + 4, "cells = {}", l.cells);
        assert!(l.point.x >= x0 && l.point.x <= x0 + 64.0);
    }
}

//! Andrew's monotone chain convex hull.
//!
//! Model
//! - Sort by `(x, y)`, collapse exact duplicates.
//! - The line `leftmost -> rightmost` splits the remaining points: strictly
//!   clockwise points feed the upper chain, strictly counter-clockwise points
//!   the lower chain, points on the line feed neither. `rightmost` closes both.
//! - Each chain is a `Vec` stack; before a push, pop while the last two stacked
//!   points and the new one fail to turn strictly the chain's way.
//!
//! Degenerate outputs
//! - 0 points: empty. 1 distinct point: that point.
//! - All collinear: `[leftmost, rightmost]`. Both chains reduce to these two
//!   anchors, and the lower chain has no interior to append.

use std::cmp::Ordering;

use super::polygon::{perimeter, signed_area};
use super::types::{is_ccw, is_cw, GeomCfg, Hs2, Point2};

/// Convex hull of `points`, clockwise, collinear boundary points dropped.
///
/// Points with a non-finite coordinate are ignored.
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts: Vec<Point2> = points
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    if pts.len() < 2 {
        return pts;
    }

    let first = pts[0];
    let last = pts[pts.len() - 1];
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    upper.push(first);
    lower.push(first);
    for (i, &p) in pts.iter().enumerate().skip(1) {
        let closing = i == pts.len() - 1;
        if closing || is_cw(first, p, last) {
            while upper.len() >= 2 && !is_cw(upper[upper.len() - 2], upper[upper.len() - 1], p) {
                upper.pop();
            }
            upper.push(p);
        }
        if closing || is_ccw(first, p, last) {
            while lower.len() >= 2 && !is_ccw(lower[lower.len() - 2], lower[lower.len() - 1], p) {
                lower.pop();
            }
            lower.push(p);
        }
    }

    let mut hull = upper;
    // Both chains start at `first` and end at `last`; only the interior of the
    // lower chain is new.
    hull.extend(lower[1..lower.len() - 1].iter().rev());
    hull
}

/// A computed hull (clockwise vertex list) with helpers for consumers.
///
/// Build it with `from_points`. The helpers assume `vertices` is a clockwise
/// convex polygon; code writing the field directly must keep it one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull2 {
    pub vertices: Vec<Point2>,
}

impl Hull2 {
    /// Build the hull of `points`; see [`convex_hull`].
    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            vertices: convex_hull(points),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than 3 vertices: empty, a single point, or a segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Enclosed area (zero for degenerate hulls).
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Boundary length. A segment counts both directions.
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices)
    }

    /// Outward half-spaces, one per edge, in vertex order.
    ///
    /// Empty for degenerate hulls; use `contains_eps` for those.
    pub fn halfspaces(&self) -> Vec<Hs2> {
        if self.is_degenerate() {
            return Vec::new();
        }
        let m = self.vertices.len();
        (0..m)
            .filter_map(|k| Hs2::right_of(self.vertices[k], self.vertices[(k + 1) % m]))
            .collect()
    }

    /// Membership with slack `eps` (positive enlarges the polygon).
    ///
    /// Degenerate hulls: a point matches within `eps` of the vertex, a segment
    /// within `eps` of the segment.
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => (p - a).norm() <= eps,
            [a, b] => super::polygon::segment_distance_sq(p, *a, *b).sqrt() <= eps,
            _ => self.halfspaces().iter().all(|h| h.satisfies_eps(p, eps)),
        }
    }

    /// `contains_eps` with the default feasibility slack.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        self.contains_eps(p, GeomCfg::default().eps_feas)
    }

    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }
}

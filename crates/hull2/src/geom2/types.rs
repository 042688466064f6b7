//! Basic 2D types, tolerances, and the orientation predicate.
//!
//! - `Point2`: plain `(x, y)` value, no identity beyond its coordinates.
//! - `Turn` / `orientation`: sign of the cross product of three points.
//! - `Hs2`: closed half-space `n·x <= c` used for the hull's H-form.
//! - `GeomCfg`: tolerances for the non-exact predicates (containment, convexity).

use nalgebra::Vector2;

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// The hull itself uses exact sign tests and ignores these; they only apply
/// to the downstream checks on a finished polygon.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Slack for half-space membership (`n·x <= c + eps_feas`).
    pub eps_feas: f64,
    /// Cross products with magnitude below this count as collinear in `is_convex`.
    pub eps_turn: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_feas: 1e-9,
            eps_turn: 1e-12,
        }
    }
}

/// Rotational direction of the path `a -> b -> c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Twice the signed area of triangle `abc`.
///
/// `< 0` clockwise, `> 0` counter-clockwise, `== 0` collinear. Equal to
/// `(b - a) × (c - a)` up to rounding.
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> f64 {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Classify the turn `a -> b -> c` by the exact sign of `orientation`.
#[inline]
pub fn turn(a: Point2, b: Point2, c: Point2) -> Turn {
    let o = orientation(a, b, c);
    if o < 0.0 {
        Turn::Clockwise
    } else if o > 0.0 {
        Turn::CounterClockwise
    } else {
        Turn::Collinear
    }
}

#[inline]
pub(crate) fn is_cw(a: Point2, b: Point2, c: Point2) -> bool {
    orientation(a, b, c) < 0.0
}

#[inline]
pub(crate) fn is_ccw(a: Point2, b: Point2, c: Point2) -> bool {
    orientation(a, b, c) > 0.0
}

/// Closed half-space `n · x <= c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }

    /// Half-space bounded by the line through `p` and `q` that keeps the
    /// right-hand side of `p -> q` (the interior of a clockwise polygon).
    /// `None` if `p == q`.
    pub fn right_of(p: Point2, q: Point2) -> Option<Self> {
        let edge = q - p;
        // Rotating a clockwise edge by +90° points outward.
        let n = Vector2::new(-edge.y, edge.x);
        let norm = n.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        let n = n / norm;
        Some(Self::new(n, n.dot(&p)))
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Point2, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }

    /// Signed distance of `p` past the boundary (negative inside).
    #[inline]
    pub fn excess(&self, p: Point2) -> f64 {
        self.n.dot(&p) - self.c
    }
}

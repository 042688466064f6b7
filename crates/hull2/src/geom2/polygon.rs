//! Measures and predicates on a closed polygon given as a vertex list.
//!
//! The last vertex connects back to the first. Winding may be either way
//! unless stated otherwise.

use super::types::{orientation, Point2};

/// Shoelace area: negative for clockwise, positive for counter-clockwise.
pub fn signed_area(poly: &[Point2]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Area centroid; `None` for polygons with (numerically) zero area.
pub fn area_centroid(poly: &[Point2]) -> Option<Point2> {
    if poly.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Point2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// Closed boundary length.
pub fn perimeter(poly: &[Point2]) -> f64 {
    if poly.len() < 2 {
        return 0.0;
    }
    (0..poly.len())
        .map(|i| (poly[(i + 1) % poly.len()] - poly[i]).norm())
        .sum()
}

/// Squared distance from `p` to the segment `ab`.
pub fn segment_distance_sq(p: Point2, a: Point2, b: Point2) -> f64 {
    let d = b - a;
    let mut closest = a;
    let len_sq = d.norm_squared();
    if len_sq > 0.0 {
        let t = (p - a).dot(&d) / len_sq;
        if t > 1.0 {
            closest = b;
        } else if t > 0.0 {
            closest = a + d * t;
        }
    }
    (p - closest).norm_squared()
}

/// Even-odd ray cast. Points exactly on the boundary may land either way.
pub fn point_in_polygon(p: Point2, poly: &[Point2]) -> bool {
    let Some(&last) = poly.last() else {
        return false;
    };
    let mut inside = false;
    let mut b = last;
    for &a in poly {
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        b = a;
    }
    inside
}

/// Distance from `p` to the polygon boundary, positive inside, negative outside.
///
/// Returns `-inf` for an empty polygon.
pub fn point_to_polygon_distance(p: Point2, poly: &[Point2]) -> f64 {
    let Some(&last) = poly.last() else {
        return f64::NEG_INFINITY;
    };
    let mut min_dist_sq = f64::INFINITY;
    let mut b = last;
    for &a in poly {
        min_dist_sq = min_dist_sq.min(segment_distance_sq(p, a, b));
        b = a;
    }
    let d = min_dist_sq.sqrt();
    if point_in_polygon(p, poly) {
        d
    } else {
        -d
    }
}

/// True if every vertex turns the same way (ignoring `|cross| <= eps_turn`)
/// and the boundary winds exactly once. Fewer than 3 vertices count as convex.
pub fn is_convex(poly: &[Point2], eps_turn: f64) -> bool {
    let m = poly.len();
    if m < 3 {
        return true;
    }
    let mut sign = 0.0f64;
    let mut total_turn = 0.0f64;
    for i in 0..m {
        let a = poly[i];
        let b = poly[(i + 1) % m];
        let c = poly[(i + 2) % m];
        let o = orientation(a, b, c);
        if o.abs() > eps_turn {
            if sign == 0.0 {
                sign = o.signum();
            } else if o.signum() != sign {
                return false;
            }
        }
        let (e1, e2) = (b - a, c - b);
        total_turn += (e1.x * e2.y - e1.y * e2.x).atan2(e1.dot(&e2));
    }
    // A star polygon turns the same way everywhere but winds more than once.
    sign != 0.0 && (total_turn.abs() - std::f64::consts::TAU).abs() < 1e-6
}

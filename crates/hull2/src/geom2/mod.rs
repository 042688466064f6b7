//! 2D convex hull geometry.
//!
//! Purpose
//! - Compute the convex hull of an unordered point set with Andrew's monotone
//!   chain (sort once, then one stack scan per chain).
//! - Provide the measures and predicates needed to check and consume a hull:
//!   area, perimeter, half-space form, containment, label placement.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (`Point2`).
//! - Hulls are returned clockwise: upper chain left to right, then the lower
//!   chain right to left. Collinear boundary points are dropped.
//! - Degenerate hulls (fewer than 3 vertices) are valid results, not errors.
//!
//! Code cross-refs: `hull::convex_hull`, `Hull2`, `types::{Hs2, Turn, GeomCfg}`

mod hull;
pub mod label;
mod polygon;
pub mod rand;
mod types;

pub use hull::{convex_hull, Hull2};
pub use label::{polylabel, Label, LabelCfg};
pub use polygon::{
    area_centroid, is_convex, perimeter, point_in_polygon, point_to_polygon_distance,
    segment_distance_sq, signed_area,
};
pub use types::{orientation, turn, GeomCfg, Hs2, Point2, Turn};

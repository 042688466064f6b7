//! Planar convex hulls and the small amount of geometry around them.
//!
//! Layout
//! - `geom2`: point type, orientation predicates, the monotone-chain hull,
//!   polygon measures, label placement, and seeded random point clouds.
//! - `io`: plain-text adapters (point lists in, SimpleFormat CSV out).
//!
//! The geometry is pure: no I/O, no global state, no logging. File handling
//! and user interaction live in the `hull2-cli` crate.

pub mod geom2;
pub mod io;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{convex_hull, GeomCfg, Hull2, Point2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_point_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
    pub use crate::geom2::{
        convex_hull, orientation, polylabel, turn, GeomCfg, Hs2, Hull2, Label, LabelCfg, Point2,
        Turn,
    };
    pub use crate::io::{read_points, write_simple_format, ReadError};
}

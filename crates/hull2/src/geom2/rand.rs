//! Seeded random point clouds (the "generated" point source).
//!
//! Model
//! - Draw a point count, then sample uniformly inside a disk or a box centred
//!   at `center`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the k-th cloud of a run can be regenerated on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug)]
pub enum CloudShape {
    /// Uniform in the disk of this radius.
    Disk { radius: f64 },
    /// Uniform in `[-half_width, half_width] × [-half_height, half_height]`.
    Box { half_width: f64, half_height: f64 },
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    pub shape: CloudShape,
    pub center: Point2,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(32),
            shape: CloudShape::Disk { radius: 1.0 },
            center: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud.
///
/// Non-positive or non-finite extents collapse the region onto `center`.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let clamp = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    (0..n)
        .map(|_| {
            let offset = match cfg.shape {
                CloudShape::Disk { radius } => {
                    // sqrt keeps the density uniform in area
                    let r = clamp(radius) * rng.gen::<f64>().sqrt();
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    Vector2::new(th.cos() * r, th.sin() * r)
                }
                CloudShape::Box {
                    half_width,
                    half_height,
                } => {
                    let u = rng.gen::<f64>() * 2.0 - 1.0;
                    let v = rng.gen::<f64>() * 2.0 - 1.0;
                    Vector2::new(u * clamp(half_width), v * clamp(half_height))
                }
            };
            cfg.center + offset
        })
        .collect()
}

//! 2-D primitives in compass coordinates.
//!
//! Angles are measured from the **+Y** axis and grow clockwise towards
//! **+X**, so a heading of `0` looks "up" the map and `π/2` looks right.
//! Everything in here is a pure value type; nothing caches mutable state.

mod aabb;
mod intersect;
mod line;
mod point;
mod ray;
mod segment;

pub use aabb::Aabb;
pub use intersect::{Hit, WallId, intersect_ray, intersecting_segments, nearest_hit, sort_by_distance};
pub use line::{Line, VERTICAL_SLOPE};
pub use point::{Compass, Point};
pub use ray::{DISTANT_POINT, Ray};
pub use segment::Segment;
pub(crate) use segment::point_key;

use thiserror::Error;

/// Slack used for every "is this point on the boundary" comparison.
pub const EPSILON: f64 = 1e-7;

/// `min ≤ value ≤ max`, widened by [`EPSILON`] on both sides.
///
/// Intersection points are recomputed from floats, so a point that lies on
/// a segment end may land a hair outside its exact bounds.
#[inline]
pub fn in_range(min: f64, max: f64, value: f64) -> bool {
    (min - EPSILON) <= value && value <= (max + EPSILON)
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}

/// Things that can go wrong when deriving geometry.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A ray or line was requested from a segment with `start == end`.
    #[error("degenerate segment ({start}) -> ({end}) has no direction")]
    DegenerateSegment { start: Point, end: Point },

    /// Ray casts need a positive, finite range.
    #[error("cast range {0} must be positive and finite")]
    InvalidRange(f64),
}

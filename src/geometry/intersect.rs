//! Probe-vs-walls intersection queries.
//!
//! A *probe* is any segment being tested: a cast ray materialised to its
//! range, or a proposed camera move. Walls are addressed by their index in
//! the slice handed in, so callers can tell neighbouring columns apart by
//! wall identity.

use super::{GeometryError, Point, Ray, Segment};

/// Index of a wall inside the slice it was found in.
pub type WallId = usize;

/// One probe/wall crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Euclidean distance from the probe's start.
    pub distance: f64,
    pub point: Point,
    pub wall: WallId,
}

/// Every wall `probe` crosses, in wall order.
pub fn intersecting_segments(probe: &Segment, walls: &[Segment]) -> Vec<Hit> {
    walls
        .iter()
        .enumerate()
        .filter_map(|(wall, seg)| {
            probe.intersection(seg).map(|point| Hit {
                distance: probe.start().distance(point),
                point,
                wall,
            })
        })
        .collect()
}

/// Cast `ray` out to `range` and collect every crossing.
pub fn intersect_ray(ray: &Ray, range: f64, walls: &[Segment]) -> Result<Vec<Hit>, GeometryError> {
    let probe = ray.to_segment(range)?;
    Ok(intersecting_segments(&probe, walls))
}

/// Closest hits first.
#[inline]
pub fn sort_by_distance(hits: &mut [Hit]) {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

/// The wall a column should show.
///
/// A zero-distance hit means the eye sits exactly on a wall; such a cast
/// draws nothing rather than a wall of infinite height.
pub fn nearest_hit(mut hits: Vec<Hit>) -> Option<Hit> {
    sort_by_distance(&mut hits);
    hits.into_iter().next().filter(|h| h.distance != 0.0)
}

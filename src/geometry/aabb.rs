use super::{Point, in_range};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Point, // (x_min, y_min)
    pub max: Point, // (x_max, y_max)
}

impl Aabb {
    /// Smallest box holding both corners, in any order.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Inclusive overlap test: boxes that only touch still overlap, so two
    /// walls meeting at a shared corner are never pruned.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Point-in-box test with [`EPSILON`](super::EPSILON) slack.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        in_range(self.min.x, self.max.x, p.x) && in_range(self.min.y, self.max.y, p.y)
    }
}

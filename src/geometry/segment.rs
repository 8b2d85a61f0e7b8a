use std::f64::consts::FRAC_PI_2;
use std::hash::{Hash, Hasher};

use super::{Aabb, Compass, GeometryError, Hit, Line, Point, Ray, VERTICAL_SLOPE, intersect};

/// Directed wall piece from `start` to `end`.
///
/// Immutable once built: the bounding box, slope and length are derived in
/// [`Segment::new`] and never need refreshing.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    start: Point,
    end: Point,
    bbox: Aabb,
    slope: f64,
    length: f64,
}

/// Bit pattern of a point, with `-0.0` folded onto `0.0` so that values
/// comparing equal also hash equal.
#[inline]
pub(crate) fn point_key(p: Point) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        let delta = end - start;
        // Orientation-free: colinear merging compares slopes of segments
        // pointing either way.
        let slope = if start.x == end.x {
            VERTICAL_SLOPE
        } else {
            delta.y / delta.x
        };
        Self {
            start,
            end,
            bbox: Aabb::from_corners(start, end),
            slope,
            length: delta.length(),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn bbox(&self) -> &Aabb {
        &self.bbox
    }

    /// Rise over run, or [`VERTICAL_SLOPE`] when `start.x == end.x`.
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn delta(&self) -> Point {
        self.end - self.start
    }

    #[inline]
    pub fn mid(&self) -> Point {
        self.start + self.delta() * 0.5
    }

    /// Unit direction `start → end` (zero for a degenerate segment).
    #[inline]
    pub fn normal(&self) -> Point {
        self.delta().normal()
    }

    /// Direction turned a quarter turn counter-clockwise: the side a wall
    /// faces.
    #[inline]
    pub fn surface_normal(&self) -> Point {
        self.normal().rotated(FRAC_PI_2)
    }

    /// Both segments run the same way or opposite ways.
    pub fn parallel(&self, other: &Segment) -> bool {
        denominator(self, other) == 0.0
    }

    /// `p` lies inside the bounding box (with float slack).
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bbox.contains(p)
    }

    pub fn line(&self) -> Result<Line, GeometryError> {
        self.check_direction()?;
        Ok(Line::new(self.start, self.slope))
    }

    /// Ray from `start` heading towards `end`.
    ///
    /// `atan2` measures from +X counter-clockwise; the compass heading is
    /// `π/2 - atan2(dy, dx)`.
    pub fn to_ray(&self) -> Result<Ray, GeometryError> {
        self.check_direction()?;
        let d = self.delta();
        Ok(Ray::new(self.start, -d.y.atan2(d.x) + FRAC_PI_2))
    }

    /// Exact crossing point of two bounded segments.
    ///
    /// Parametric form: `self(t) = p1 + t·(p2 - p1)`, `other(u) = p3 + u·(p4 - p3)`.
    /// Both `t` and `u` must fall in `[0, 1]`; parallel segments never
    /// intersect, even when colinear.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        if !self.bbox.overlaps(&other.bbox) {
            return None;
        }

        let den = denominator(self, other);
        if den == 0.0 {
            return None;
        }

        let (p1, p2) = (self.start, self.end);
        let (p3, p4) = (other.start, other.end);

        let t = ((p3.x - p1.x) * (p4.y - p3.y) - (p3.y - p1.y) * (p4.x - p3.x)) / den;
        let u = ((p1.x - p2.x) * (p3.y - p1.y) - (p1.y - p2.y) * (p3.x - p1.x)) / den;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(p1 + (p2 - p1) * t)
        } else {
            None
        }
    }

    /// Closest wall this segment crosses, zero-distance touches included.
    pub fn intersect_list(&self, walls: &[Segment]) -> Option<Hit> {
        let mut hits = intersect::intersecting_segments(self, walls);
        intersect::sort_by_distance(&mut hits);
        hits.into_iter().next()
    }

    fn check_direction(&self) -> Result<(), GeometryError> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateSegment {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Cross product of the two direction vectors; zero means parallel.
#[inline]
fn denominator(a: &Segment, b: &Segment) -> f64 {
    let da = a.delta();
    let db = b.delta();
    db.y * da.x - db.x * da.y
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        point_key(self.start).hash(state);
        point_key(self.end).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::collections::HashSet;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(dvec2(x1, y1), dvec2(x2, y2))
    }

    fn check(s: Segment, min: Point, max: Point, angle: f64) {
        assert_eq!(s.bbox().min, min);
        assert_eq!(s.bbox().max, max);
        let ray = s.to_ray().unwrap();
        assert_eq!(ray.start, s.start());
        assert!((ray.angle - angle).abs() < 1e-12, "{} vs {angle}", ray.angle);
    }

    #[test]
    fn derived_properties() {
        check(seg(0.0, 0.0, 1.0, 0.0), dvec2(0.0, 0.0), dvec2(1.0, 0.0), PI / 2.0);
        check(seg(0.0, 0.0, 1.0, 1.0), dvec2(0.0, 0.0), dvec2(1.0, 1.0), FRAC_PI_4);
        check(seg(0.0, 0.0, 1.0, -1.0), dvec2(0.0, -1.0), dvec2(1.0, 0.0), 3.0 * FRAC_PI_4);
        check(seg(0.0, 0.0, 0.0, 1.0), dvec2(0.0, 0.0), dvec2(0.0, 1.0), 0.0);
    }

    #[test]
    fn slope_length_mid() {
        let s = seg(0.0, 0.0, 2.0, 1.0);
        assert_eq!(s.slope(), 0.5);
        assert!((s.length() - 5f64.sqrt()).abs() < 1e-12);
        assert_eq!(s.mid(), dvec2(1.0, 0.5));

        assert_eq!(seg(3.0, 0.0, 3.0, 4.0).slope(), VERTICAL_SLOPE);
        assert_eq!(seg(3.0, 4.0, 3.0, 0.0).slope(), VERTICAL_SLOPE);
        assert_eq!(seg(1.0, 1.0, 0.0, 0.0).slope(), seg(0.0, 0.0, 1.0, 1.0).slope());
    }

    #[test]
    fn normals() {
        let s = seg(0.0, 0.0, 0.0, 3.0);
        assert!((s.normal() - dvec2(0.0, 1.0)).length() < 1e-12);
        assert!((s.surface_normal() - dvec2(-1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn degenerate_segment_has_no_ray() {
        let point = seg(0.0, 0.0, 0.0, 0.0);
        assert!(seg(0.0, 0.0, 1.0, 2.0).to_ray().is_ok());
        assert!(matches!(
            point.to_ray(),
            Err(GeometryError::DegenerateSegment { .. })
        ));
        assert!(point.line().is_err());
    }

    #[test]
    fn value_equality_and_hashing() {
        let a = seg(0.0, 1.0, 1.0, 1.0);
        let b = seg(0.0, 1.0, 1.0, 1.0);
        let reversed = seg(1.0, 1.0, 0.0, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, reversed);

        let set: HashSet<Segment> = [a, b, reversed].into_iter().collect();
        assert_eq!(set.len(), 2);

        // -0.0 and 0.0 compare equal, so they must hash together too
        let z = seg(-0.0, 0.0, 1.0, 0.0);
        let set: HashSet<Segment> = [z, seg(0.0, 0.0, 1.0, 0.0)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn perpendicular_cross_at_origin() {
        let h = seg(-1.0, 0.0, 1.0, 0.0);
        let v = seg(0.0, -1.0, 0.0, 1.0);
        let p = h.intersection(&v).unwrap();
        assert!(p.length() < 1e-12);
        let q = v.intersection(&h).unwrap();
        assert!(q.length() < 1e-12);
    }

    #[test]
    fn touching_ends_intersect_parallel_ones_do_not() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 1.0);
        assert_eq!(a.intersection(&b), Some(dvec2(1.0, 0.0)));

        let c = seg(1.0, 0.0, 2.0, 0.0);
        assert!(a.parallel(&c));
        assert!(a.intersection(&c).is_none());

        let far = seg(5.0, -1.0, 5.0, 1.0);
        assert!(a.intersection(&far).is_none());
    }

    #[test]
    fn in_bounds_uses_box() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert!(s.in_bounds(dvec2(1.0, 0.1)));
        assert!(!s.in_bounds(dvec2(3.0, 1.0)));
    }

    #[test]
    fn line_keeps_origin_and_slope() {
        let l = seg(1.0, 1.0, 3.0, 5.0).line().unwrap();
        assert_eq!(l.origin, dvec2(1.0, 1.0));
        assert_eq!(l.slope, 2.0);
    }

    #[test]
    fn nearest_of_list() {
        let probe = seg(0.0, 0.0, 10.0, 0.0);
        let walls = [
            seg(7.0, -1.0, 7.0, 1.0),
            seg(3.0, -1.0, 3.0, 1.0),
            seg(0.0, 5.0, 1.0, 5.0),
        ];
        let hit = probe.intersect_list(&walls).unwrap();
        assert_eq!(hit.wall, 1);
        assert!((hit.distance - 3.0).abs() < 1e-12);
        assert!(seg(0.0, 3.0, 1.0, 3.0).intersect_list(&walls).is_none());
    }
}

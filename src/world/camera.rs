use std::f64::consts::FRAC_PI_2;

use log::trace;

use crate::geometry::{
    Compass, GeometryError, Point, Ray, Segment, intersecting_segments, wrap_angle,
};

/// How the field of view is sampled into rays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Projection {
    /// Even steps along a flat plane one unit ahead. Distances need fisheye
    /// correction afterwards.
    #[default]
    Planar,
    /// Even angular steps. Already curved; no correction.
    Angular,
}

/// Player view-point on the map.
///
/// * `direction` is a compass heading (0 = +Y, clockwise), kept in `[0, 2π)`.
/// * Only ever mutated through [`Camera::rotate`] and the `try_*` moves.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    location: Point,
    direction: f64,
    fov: f64, // horizontal FoV, radians
    projection: Projection,
}

impl Camera {
    /// Create a camera at `location`, facing `direction`, with horizontal FoV `fov`.
    pub fn new(location: Point, direction: f64, fov: f64) -> Self {
        Self {
            location,
            direction: wrap_angle(direction),
            fov,
            projection: Projection::Planar,
        }
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.location
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    #[inline]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector along the heading.
    #[inline(always)]
    pub fn forward(&self) -> Point {
        Point::from_compass(self.direction)
    }

    /// Unit vector a quarter turn clockwise of the heading.
    #[inline(always)]
    pub fn right(&self) -> Point {
        Point::from_compass(self.direction + FRAC_PI_2)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Turn by `delta` radians (positive = clockwise).
    pub fn rotate(&mut self, delta: f64) {
        self.direction = wrap_angle(self.direction + delta);
    }

    /// Step `distance` along the heading unless a wall is in the way.
    pub fn try_move(&mut self, distance: f64, walls: &[Segment]) -> bool {
        self.try_move_lateral(distance, 0.0, walls)
    }

    /// Sidestep `distance` to the right (negative = left).
    pub fn try_strafe(&mut self, distance: f64, walls: &[Segment]) -> bool {
        self.try_move_lateral(distance, FRAC_PI_2, walls)
    }

    /// Step `distance` along `direction + lateral`.
    ///
    /// The straight path from here to the destination is checked against
    /// every wall; any crossing (touching included) cancels the move. A
    /// blocked move is not an error: the camera just stays put and `false`
    /// comes back.
    pub fn try_move_lateral(&mut self, distance: f64, lateral: f64, walls: &[Segment]) -> bool {
        let dest = self.location + Point::from_compass(self.direction + lateral) * distance;
        let path = Segment::new(self.location, dest);
        if path.is_degenerate() {
            return true;
        }

        let hits = intersecting_segments(&path, walls);
        if hits.is_empty() {
            self.location = dest;
            return true;
        }
        trace!(
            "move {} -> {} blocked by {} wall(s)",
            self.location,
            dest,
            hits.len()
        );
        false
    }

    /*───────────────────────── ray generation ───────────────────────*/

    /// `count` rays sweeping `[direction - fov/2, direction + fov/2]`
    /// left to right, both edges included.
    ///
    /// Every item also carries the sample point the ray was aimed through.
    /// The fan is a plain value: clone it, or call `rays` again, to sweep
    /// once more.
    pub fn rays(&self, count: usize) -> RayFan {
        let first = self.direction - self.fov * 0.5;
        let last = first + self.fov;
        let plane = match self.projection {
            Projection::Planar => Some((
                self.location + Point::from_compass(first),
                self.location + Point::from_compass(last),
            )),
            Projection::Angular => None,
        };
        RayFan {
            origin: self.location,
            first,
            fov: self.fov,
            plane,
            count,
            next: 0,
        }
    }
}

/// Iterator returned by [`Camera::rays`].
#[derive(Clone, Debug)]
pub struct RayFan {
    origin: Point,
    first: f64,
    fov: f64,
    /// Viewing-plane end points (planar mode only).
    plane: Option<(Point, Point)>,
    count: usize,
    next: usize,
}

impl RayFan {
    /// Position of sample `i` across the fan, in `[0, 1]`.
    #[inline]
    fn fraction(&self, i: usize) -> f64 {
        if self.count <= 1 {
            0.5
        } else {
            i as f64 / (self.count - 1) as f64
        }
    }
}

impl Iterator for RayFan {
    type Item = Result<(Ray, Point), GeometryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let f = self.fraction(self.next);
        self.next += 1;

        Some(match self.plane {
            Some((a, b)) => {
                let sample = a + (b - a) * f;
                Segment::new(self.origin, sample)
                    .to_ray()
                    .map(|ray| (ray, sample))
            }
            None => {
                let angle = self.first + self.fov * f;
                Ok((
                    Ray::new(self.origin, angle),
                    self.origin + Point::from_compass(angle),
                ))
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RayFan {}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

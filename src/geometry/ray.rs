use super::{Compass, GeometryError, Line, Point, Segment, VERTICAL_SLOPE};

/// Default cast range in map units.
///
/// Long enough to cross any tile map this engine is meant for, short enough
/// that the bounding-box prefilter still rejects most walls.
pub const DISTANT_POINT: f64 = 100.0;

/// Half-line from `start` along a compass heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub start: Point,
    /// Radians from +Y, clockwise.
    pub angle: f64,
}

impl Ray {
    pub fn new(start: Point, angle: f64) -> Self {
        Self { start, angle }
    }

    /// Point `distance` units along the ray.
    #[inline]
    pub fn end_point(&self, distance: f64) -> Point {
        self.start + Point::from_compass(self.angle) * distance
    }

    /// Materialise the ray as a bounded segment of length `distance`.
    pub fn to_segment(&self, distance: f64) -> Result<Segment, GeometryError> {
        if !(distance.is_finite() && distance > 0.0) {
            return Err(GeometryError::InvalidRange(distance));
        }
        Ok(Segment::new(self.start, self.end_point(distance)))
    }

    /// Segment out to [`DISTANT_POINT`].
    #[inline]
    pub fn distant_segment(&self) -> Segment {
        Segment::new(self.start, self.end_point(DISTANT_POINT))
    }

    /// Line through the ray; straight up/down rays get a signed
    /// [`VERTICAL_SLOPE`].
    pub fn to_line(&self) -> Line {
        let (s, c) = self.angle.sin_cos();
        let slope = if s.abs() <= f64::EPSILON {
            VERTICAL_SLOPE.copysign(c)
        } else {
            c / s
        };
        Line::new(self.start, slope)
    }
}

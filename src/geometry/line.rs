use super::Point;
use glam::dvec2;

/// Stand-in slope for vertical lines.
///
/// Huge but finite, so point-slope arithmetic never has to special-case
/// infinities. Rays carry its sign to tell "up" from "down".
pub const VERTICAL_SLOPE: f64 = 1e100;

/// Infinite line in point-slope form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub origin: Point,
    pub slope: f64,
}

impl Line {
    pub fn new(origin: Point, slope: f64) -> Self {
        Self { origin, slope }
    }

    /// `true` for lines using the [`VERTICAL_SLOPE`] sentinel.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.slope.abs() >= VERTICAL_SLOPE
    }

    /// `y` on this line at the given `x`.
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * (x - self.origin.x) + self.origin.y
    }

    /// Crossing point of two lines, `None` when they are parallel.
    ///
    /// ```text
    /// x = (y2 - y1 + m1*x1 - m2*x2) / (m1 - m2)
    /// ```
    pub fn intercept(&self, other: &Line) -> Option<Point> {
        if self.slope == other.slope {
            return None;
        }
        let x = (other.origin.y - self.origin.y + self.slope * self.origin.x
            - other.slope * other.origin.x)
            / (self.slope - other.slope);

        // Back-substitute into whichever line is not the vertical sentinel.
        let y = if self.is_vertical() {
            other.y_at(x)
        } else {
            self.y_at(x)
        };
        Some(dvec2(x, y))
    }
}

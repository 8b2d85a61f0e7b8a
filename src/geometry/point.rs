use glam::{DVec2, dvec2};

/// A position or displacement on the map plane.
///
/// Plain `glam` vector: `+ - * /` (componentwise and scalar), `length`,
/// `dot` and friends all come from [`DVec2`]. The compass-specific pieces
/// live on [`Compass`].
pub type Point = DVec2;

/// Compass-style helpers: angle 0 = +Y, growing clockwise towards +X.
pub trait Compass: Sized {
    /// Unit vector for a compass heading.
    fn from_compass(angle: f64) -> Self;

    /// Compass heading of this vector (`0` for the zero vector).
    fn direction(self) -> f64;

    /// Unit-length copy. Zero and already-unit vectors come back untouched.
    fn normal(self) -> Self;

    /// Counter-clockwise rotation by `angle` radians (math convention).
    fn rotated(self, angle: f64) -> Self;
}

impl Compass for DVec2 {
    #[inline]
    fn from_compass(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        dvec2(s, c) // 0 rad = +Y, clockwise positive
    }

    #[inline]
    fn direction(self) -> f64 {
        // atan2 measures from +X counter-clockwise; swapping the arguments
        // measures from +Y clockwise.
        self.x.atan2(self.y)
    }

    fn normal(self) -> Self {
        let len = self.length();
        if len == 0.0 || (len - 1.0).abs() <= 1e-9 {
            return self;
        }
        self / len
    }

    #[inline]
    fn rotated(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        dvec2(c, s) * self.x + dvec2(-s, c) * self.y
    }
}

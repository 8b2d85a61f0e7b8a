use crate::geometry::{Point, WallId};

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize, // one ray per column
    pub h: usize,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }
}

/// What one column sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnHit {
    /// Raw distance along the ray.
    pub distance: f64,
    /// Distance after fisheye correction; drives the height.
    pub corrected_distance: f64,
    /// Wall height in pixels (may exceed the screen by up to 2).
    pub height: f64,
    pub point: Point,
    pub wall: WallId,
}

/// One screen column of a cast frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub index: usize,
    /// `None` when the ray escapes or the eye sits on a wall.
    pub hit: Option<ColumnHit>,
}

impl Column {
    #[inline]
    pub fn wall(&self) -> Option<WallId> {
        self.hit.map(|h| h.wall)
    }

    /// `true` where a wall outline should be drawn: the visible wall changes
    /// from the previous column, including wall ↔ empty transitions.
    /// Column 0 is never an edge.
    pub fn is_edge(&self, previous: Option<&Column>) -> bool {
        match previous {
            None => false,
            Some(prev) => prev.wall() != self.wall(),
        }
    }
}

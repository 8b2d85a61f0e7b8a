mod camera;
mod map;

pub use camera::{Camera, Projection, RayFan};
pub use map::{
    DEMO_MAP, Tile, TileSegments, compile_map, merge_colinear, remove_shared_edges, tile_segments,
};

use std::{fs, io, path::Path};

use log::info;
use thiserror::Error;

use crate::geometry::{GeometryError, Segment, WallId};

/// Errors raised while loading a level.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The map produced a wall with no length.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Static wall set of one level (immutable after load).
#[derive(Clone, Debug, Default)]
pub struct World {
    walls: Vec<Segment>,
}

impl World {
    /// Wrap an already-built wall list, e.g. one drawn by hand.
    pub fn new(walls: Vec<Segment>) -> Self {
        Self { walls }
    }

    /// Compile a tile map string.
    pub fn from_map(map: &str) -> Result<Self, MapError> {
        let walls = compile_map(map)?;
        info!("level compiled: {} walls", walls.len());
        Ok(Self { walls })
    }

    /// Read and compile a tile map file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        Self::from_map(&text)
    }

    #[inline]
    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    #[inline]
    pub fn wall(&self, id: WallId) -> Option<&Segment> {
        self.walls.get(id)
    }
}

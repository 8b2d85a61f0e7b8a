//! Per-frame column resolution: ray fan → nearest walls → column heights.

mod caster;
mod projection;
mod types;

pub use caster::{cast_frame, cast_into};
pub use projection::{WALL_SCALE, column_height, column_span, corrected_distance};
pub use types::{Column, ColumnHit, Screen};

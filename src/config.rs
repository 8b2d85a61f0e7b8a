//! Tunable engine constants.

use std::f64::consts::PI;

use crate::engine::WALL_SCALE;
use crate::geometry::DISTANT_POINT;

/// Step length per tick for a full forward / strafe command (map units).
pub const MOVE_STEP: f64 = 0.08;
/// Turn per tick for a full turn command (radians).
pub const TURN_STEP: f64 = PI / 60.0;

/// Knobs shared by the caster and the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// How far rays are cast before giving up.
    pub cast_range: f64,
    /// Wall height scale "K" (see [`column_height`](crate::engine::column_height)).
    pub wall_scale: f64,
    pub move_step: f64,
    pub turn_step: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cast_range: DISTANT_POINT,
            wall_scale: WALL_SCALE,
            move_step: MOVE_STEP,
            turn_step: TURN_STEP,
        }
    }
}

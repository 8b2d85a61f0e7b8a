//! Wall-segment ray caster.
//!
//! Tile maps compile into wall segments ([`world`]), a camera moves
//! among them with collision checks and sweeps a fan of rays
//! ([`engine`]) whose nearest hits become per-column wall heights.
pub mod config;
pub mod engine;
pub mod geometry;
pub mod sim;
pub mod world;

use log::trace;
use thiserror::Error;

use super::InputCmd;
use crate::{
    config::EngineConfig,
    engine::{Column, Screen, cast_into},
    geometry::GeometryError,
    world::{Camera, World},
};

#[derive(Error, Debug, PartialEq)]
pub enum SimError {
    #[error("ray cast failed: {0}")]
    Geometry(#[from] GeometryError),
}

/// Owns the camera and drives one fixed tic at a time.
///
/// The wall set is borrowed for the runner's whole life, so it cannot
/// change between the move and the sweep of a tic.
pub struct TicRunner<'w> {
    world: &'w World,
    camera: Camera,
    screen: Screen,
    cfg: EngineConfig,
    columns: Vec<Column>,
    tics: u64,
}

impl<'w> TicRunner<'w> {
    pub fn new(world: &'w World, camera: Camera, screen: Screen, cfg: EngineConfig) -> Self {
        Self {
            world,
            camera,
            screen,
            cfg,
            columns: Vec::with_capacity(screen.w),
            tics: 0,
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn world(&self) -> &World {
        self.world
    }

    /// Columns of the last completed tic.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[inline]
    pub fn tics(&self) -> u64 {
        self.tics
    }

    /// Run one game tic: move, strafe, turn, then sweep the screen.
    pub fn tick(&mut self, cmd: InputCmd) -> Result<&[Column], SimError> {
        let walls = self.world.walls();

        if cmd.forward != 0.0 && !self.camera.try_move(cmd.forward * self.cfg.move_step, walls) {
            trace!("tic {}: forward move blocked", self.tics);
        }
        if cmd.strafe != 0.0 && !self.camera.try_strafe(cmd.strafe * self.cfg.move_step, walls) {
            trace!("tic {}: strafe blocked", self.tics);
        }
        if cmd.turn != 0.0 {
            self.camera.rotate(cmd.turn * self.cfg.turn_step);
        }

        cast_into(&self.camera, walls, &self.screen, &self.cfg, &mut self.columns)?;
        self.tics += 1;
        Ok(&self.columns)
    }
}

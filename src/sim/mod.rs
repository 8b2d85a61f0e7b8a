//! Fixed-step simulation: one input command in, one swept frame out.
mod components;
mod tic;

pub use components::InputCmd;
pub use tic::{SimError, TicRunner};

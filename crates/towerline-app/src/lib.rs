//! Towerline reference host.
//!
//! Runs the simulation engine on its own thread, drives the frame tick and
//! the wave spawner's wall-clock timer, and exposes a small command/snapshot
//! surface for a front end.

pub mod control;
pub mod game_loop;
pub mod state;

pub use towerline_core as core;

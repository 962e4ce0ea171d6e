//! Simulation engine for Towerline.
//!
//! Owns the hecs world, advances enemies, towers and projectiles by a
//! bounded frame delta, runs the wall-clock wave spawner, and produces
//! `SimSnapshot`s for the host.

pub mod engine;
pub mod maps;
pub mod path;
pub mod placement;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use towerline_core as core;

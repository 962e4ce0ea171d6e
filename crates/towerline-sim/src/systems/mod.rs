//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine bookkeeping they touch. They own no state, except
//! the wave spawner which carries its own timer.

pub mod cleanup;
pub mod enemy_movement;
pub mod goal_sweep;
pub mod projectiles;
pub mod snapshot;
pub mod tower_targeting;
pub mod wave_spawner;

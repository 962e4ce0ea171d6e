//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// Lives ran out. Terminal until the session is reset.
    GameOver,
}

/// Enemy traversal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Traveling,
    /// Arrived at the final waypoint; will cost a life.
    Reached,
}

/// Wave spawner state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnerState {
    #[default]
    Idle,
    Spawning,
}

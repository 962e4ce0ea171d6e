//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Place a tower centered on a resolved point.
    PlaceTower { x: f64, y: f64 },
    /// Begin the next wave (ignored while one is spawning).
    StartWave,
    /// Switch to a built-in map, clearing every entity.
    SelectMap { index: usize },
    /// Reinitialize the session on the current map.
    Reset,
}

//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::error::PlacementRejection;

/// Something the host may want to react to. Drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    WaveStarted { wave: u32, enemies: u32 },
    /// The last enemy of the wave has been spawned.
    WaveSpawned { wave: u32 },
    EnemySpawned { spawn_seq: u64 },
    TowerPlaced { x: f64, y: f64 },
    PlacementRejected { reason: PlacementRejection },
    ShotFired { x: f64, y: f64 },
    EnemyKilled { spawn_seq: u64, reward: u32 },
    EnemyLeaked { spawn_seq: u64, lives: i32 },
    MapSelected { index: usize },
    /// Emitted once, on the tick lives reach zero.
    GameOver { wave: u32 },
}

//! Simulation snapshot — the complete read-only state handed to the host.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::error::PlacementRejection;
use crate::events::SimEvent;
use crate::types::{Point, SimTime};

/// Complete visible state, built after each tick or on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub cash: u32,
    pub wave: u32,
    pub lives: i32,
    pub map_index: usize,
    pub path: PathView,
    pub spawner: SpawnerView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Reason the most recent placement attempt failed, cleared on success.
    pub last_rejection: Option<PlacementRejection>,
    pub events: Vec<SimEvent>,
}

impl SimSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// The current path as drawn by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathView {
    pub points: Vec<Point>,
    pub corridor_width: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnerView {
    pub state: SpawnerState,
    /// Spawns still pending in the current wave.
    pub remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub spawn_seq: u64,
    pub position: Point,
    pub hp: u32,
    pub max_hp: u32,
    /// `hp / max_hp`, for the health bar.
    pub hp_ratio: f64,
    pub waypoint_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub position: Point,
    pub range: f64,
    pub cooldown: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Point,
}

//! ECS components for hecs entities.
//!
//! Components are plain data. Update rules live in the simulation
//! systems; the only methods here are small accessors over the data.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyState;
use crate::types::Point;

/// World position of any entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Point);

/// An enemy walking the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Travel speed (pixels per second).
    pub speed: f64,
    /// Index of the waypoint the enemy last passed.
    pub waypoint_index: usize,
    pub state: EnemyState,
    /// Monotonic spawn counter, used as the stable targeting tie-break.
    pub spawn_seq: u64,
}

/// Hit points. Invariant: `hp <= max_hp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub hp: u32,
    pub max_hp: u32,
}

impl Health {
    pub fn full(max_hp: u32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    /// Subtract damage, saturating at zero. Returns true once depleted.
    pub fn apply_damage(&mut self, damage: u32) -> bool {
        self.hp = self.hp.saturating_sub(damage);
        self.hp == 0
    }

    /// Remaining fraction of hit points in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }
}

/// A player-placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    /// Seconds until the tower may fire again. May dip below zero while idle.
    pub cooldown: f64,
    pub damage: u32,
}

impl Tower {
    /// Seconds between two shots.
    pub fn reload_secs(&self) -> f64 {
        1.0 / self.fire_rate
    }
}

/// A homing shot.
///
/// `target` is a handle into the world, not an owning reference: when the
/// enemy is despawned the handle stops resolving and the projectile dies.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub target: hecs::Entity,
    pub speed: f64,
    pub damage: u32,
    pub dead: bool,
}

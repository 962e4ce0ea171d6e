//! Session configuration.
//!
//! Every tunable lives here so hosts can load a JSON file and tests can
//! override single fields with struct update syntax.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Stats given to every newly placed tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerSpec {
    pub cost: u32,
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    pub damage: u32,
}

impl Default for TowerSpec {
    fn default() -> Self {
        Self {
            cost: TOWER_COST,
            range: TOWER_RANGE,
            fire_rate: TOWER_FIRE_RATE,
            damage: TOWER_DAMAGE,
        }
    }
}

/// Wave size and enemy stat scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveSpec {
    pub base_count: u32,
    pub count_growth: u32,
    /// Wall-clock seconds between spawns.
    pub spawn_interval_secs: f64,
    pub enemy_base_hp: u32,
    /// One extra hit point every this many waves.
    pub hp_wave_divisor: u32,
    pub enemy_base_speed: f64,
    pub enemy_speed_per_wave: f64,
}

impl Default for WaveSpec {
    fn default() -> Self {
        Self {
            base_count: WAVE_BASE_COUNT,
            count_growth: WAVE_COUNT_GROWTH,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            enemy_base_hp: ENEMY_BASE_HP,
            hp_wave_divisor: ENEMY_HP_WAVE_DIVISOR,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_wave: ENEMY_SPEED_PER_WAVE,
        }
    }
}

impl WaveSpec {
    /// Spawn cadence as a `Duration`. Saturates for intervals `validate`
    /// would reject.
    pub fn spawn_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.spawn_interval_secs).unwrap_or(Duration::MAX)
    }

    /// Number of enemies spawned by wave `wave`.
    pub fn enemy_count(&self, wave: u32) -> u32 {
        self.base_count + wave * self.count_growth
    }

    /// Hit points of an enemy spawned during wave `wave`.
    pub fn enemy_hp(&self, wave: u32) -> u32 {
        self.enemy_base_hp + wave / self.hp_wave_divisor
    }

    /// Speed of an enemy spawned during wave `wave`.
    pub fn enemy_speed(&self, wave: u32) -> f64 {
        self.enemy_base_speed + f64::from(wave) * self.enemy_speed_per_wave
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub starting_cash: u32,
    pub starting_lives: i32,
    pub kill_reward: u32,
    pub tower: TowerSpec,
    pub projectile_speed: f64,
    pub impact_radius: f64,
    pub min_tower_separation: f64,
    pub placement_padding: f64,
    pub corridor_width: f64,
    pub waves: WaveSpec,
    /// Upper bound applied to every frame delta.
    pub max_tick_dt: f64,
    /// Viewport the logical map coordinates are resolved against.
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Built-in map selected at startup.
    pub map_index: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_cash: STARTING_CASH,
            starting_lives: STARTING_LIVES,
            kill_reward: KILL_REWARD,
            tower: TowerSpec::default(),
            projectile_speed: PROJECTILE_SPEED,
            impact_radius: IMPACT_RADIUS,
            min_tower_separation: MIN_TOWER_SEPARATION,
            placement_padding: PLACEMENT_PADDING,
            corridor_width: CORRIDOR_WIDTH,
            waves: WaveSpec::default(),
            max_tick_dt: MAX_TICK_DT,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            map_index: 0,
        }
    }
}

/// A config value outside the range the simulation can run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("waves.spawn_interval_secs {0} does not fit in a duration")]
    SpawnIntervalOutOfRange(f64),
    #[error("waves.hp_wave_divisor must be non-zero")]
    ZeroHpDivisor,
    #[error("starting_lives must be positive, got {0}")]
    NoLives(i32),
}

impl SimConfig {
    /// Check that every rate, distance and duration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tower.fire_rate", self.tower.fire_rate),
            ("tower.range", self.tower.range),
            ("projectile_speed", self.projectile_speed),
            ("impact_radius", self.impact_radius),
            ("corridor_width", self.corridor_width),
            ("waves.spawn_interval_secs", self.waves.spawn_interval_secs),
            ("max_tick_dt", self.max_tick_dt),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if Duration::try_from_secs_f64(self.waves.spawn_interval_secs).is_err() {
            return Err(ConfigError::SpawnIntervalOutOfRange(
                self.waves.spawn_interval_secs,
            ));
        }
        if self.waves.hp_wave_divisor == 0 {
            return Err(ConfigError::ZeroHpDivisor);
        }
        if self.starting_lives <= 0 {
            return Err(ConfigError::NoLives(self.starting_lives));
        }
        Ok(())
    }
}

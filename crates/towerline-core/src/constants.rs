//! Simulation constants and default tuning parameters.
//!
//! These are the defaults behind `SimConfig`; systems read the config,
//! not these values directly.

// --- Economy ---

/// Cash at the start of a session.
pub const STARTING_CASH: u32 = 100;

/// Lives at the start of a session.
pub const STARTING_LIVES: i32 = 20;

/// Cash credited when an enemy is destroyed.
pub const KILL_REWARD: u32 = 10;

// --- Towers ---

/// Price of one tower.
pub const TOWER_COST: u32 = 50;

/// Targeting radius of a tower (pixels).
pub const TOWER_RANGE: f64 = 120.0;

/// Shots per second.
pub const TOWER_FIRE_RATE: f64 = 1.0;

/// Damage carried by each shot.
pub const TOWER_DAMAGE: u32 = 1;

/// Half the side of the square tower footprint (pixels).
/// Added to the corridor half-width so towers cannot sit tangent to the path.
pub const PLACEMENT_PADDING: f64 = 14.0;

/// Minimum distance between two tower centers (pixels).
pub const MIN_TOWER_SEPARATION: f64 = 28.0;

// --- Projectiles ---

/// Projectile flight speed (pixels per second).
pub const PROJECTILE_SPEED: f64 = 400.0;

/// Distance at which a projectile strikes its target (pixels).
pub const IMPACT_RADIUS: f64 = 6.0;

// --- Enemies ---

/// Distance below which an enemy counts as arrived at a waypoint (pixels).
pub const WAYPOINT_ARRIVAL_RADIUS: f64 = 1.0;

/// Enemy hit points in wave 0; one more every `ENEMY_HP_WAVE_DIVISOR` waves.
pub const ENEMY_BASE_HP: u32 = 1;

pub const ENEMY_HP_WAVE_DIVISOR: u32 = 3;

/// Enemy speed in wave 0 (pixels per second).
pub const ENEMY_BASE_SPEED: f64 = 60.0;

/// Speed added per wave number.
pub const ENEMY_SPEED_PER_WAVE: f64 = 5.0;

// --- Waves ---

/// Enemies in a wave before growth.
pub const WAVE_BASE_COUNT: u32 = 10;

/// Extra enemies per wave number.
pub const WAVE_COUNT_GROWTH: u32 = 2;

/// Wall-clock seconds between two spawns of a wave.
pub const SPAWN_INTERVAL_SECS: f64 = 0.6;

// --- Path & viewport ---

/// Width of the enemy corridor (pixels).
pub const CORRIDOR_WIDTH: f64 = 24.0;

/// Default viewport the built-in maps are resolved against.
pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

// --- Clock ---

/// Largest frame delta a single tick may apply (seconds).
pub const MAX_TICK_DT: f64 = 0.05;

//! Entity spawn factories.
//!
//! Each function builds the component bundle for one entity kind.

use hecs::{Entity, World};

use towerline_core::components::*;
use towerline_core::config::{TowerSpec, WaveSpec};
use towerline_core::enums::EnemyState;
use towerline_core::types::Point;

use crate::path::Path;

/// Spawn an enemy for wave `wave` at the first waypoint.
pub fn spawn_enemy(
    world: &mut World,
    path: &Path,
    waves: &WaveSpec,
    wave: u32,
    spawn_seq: u64,
) -> Entity {
    world.spawn((
        Position(path.start()),
        Enemy {
            speed: waves.enemy_speed(wave),
            waypoint_index: 0,
            state: EnemyState::Traveling,
            spawn_seq,
        },
        Health::full(waves.enemy_hp(wave)),
    ))
}

/// Spawn a ready-to-fire tower centered on `at`.
pub fn spawn_tower(world: &mut World, at: Point, spec: &TowerSpec) -> Entity {
    world.spawn((
        Position(at),
        Tower {
            range: spec.range,
            fire_rate: spec.fire_rate,
            cooldown: 0.0,
            damage: spec.damage,
        },
    ))
}

/// Spawn a projectile at `origin` homing on `target`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Point,
    target: Entity,
    speed: f64,
    damage: u32,
) -> Entity {
    world.spawn((
        Position(origin),
        Projectile {
            target,
            speed,
            damage,
            dead: false,
        },
    ))
}

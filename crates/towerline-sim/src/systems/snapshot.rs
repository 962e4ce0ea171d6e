//! Snapshot system: queries the world and builds a complete SimSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use towerline_core::components::*;
use towerline_core::enums::GamePhase;
use towerline_core::error::PlacementRejection;
use towerline_core::events::SimEvent;
use towerline_core::state::*;
use towerline_core::types::SimTime;

use crate::path::Path;
use crate::systems::wave_spawner::WaveSpawner;

/// Scalar session state copied into the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SessionView {
    pub time: SimTime,
    pub phase: GamePhase,
    pub cash: u32,
    pub wave: u32,
    pub lives: i32,
    pub map_index: usize,
    pub last_rejection: Option<PlacementRejection>,
}

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    path: &Path,
    spawner: &WaveSpawner,
    session: SessionView,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: session.time,
        phase: session.phase,
        cash: session.cash,
        wave: session.wave,
        lives: session.lives,
        map_index: session.map_index,
        path: PathView {
            points: path.points().to_vec(),
            corridor_width: path.corridor_width(),
        },
        spawner: SpawnerView {
            state: spawner.state(),
            remaining: spawner.remaining(),
        },
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        last_rejection: session.last_rejection,
        events,
    }
}

/// Enemy views in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Position, &Enemy, &Health)>()
        .iter()
        .map(|(_, (pos, enemy, health))| EnemyView {
            spawn_seq: enemy.spawn_seq,
            position: pos.0,
            hp: health.hp,
            max_hp: health.max_hp,
            hp_ratio: health.ratio(),
            waypoint_index: enemy.waypoint_index,
        })
        .collect();

    enemies.sort_by_key(|e| e.spawn_seq);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    world
        .query::<(&Position, &Tower)>()
        .iter()
        .map(|(_, (pos, tower))| TowerView {
            position: pos.0,
            range: tower.range,
            cooldown: tower.cooldown,
        })
        .collect()
}

/// Live projectiles only; dead ones are removed at the end of the tick anyway.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile)>()
        .iter()
        .filter(|(_, (_, projectile))| !projectile.dead)
        .map(|(_, (pos, _))| ProjectileView { position: pos.0 })
        .collect()
}

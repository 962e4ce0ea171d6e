//! Tower targeting: count down cooldowns and fire at the nearest enemy in range.

use hecs::{Entity, World};
use tracing::trace;

use towerline_core::components::{Enemy, Position, Tower};
use towerline_core::enums::EnemyState;
use towerline_core::events::SimEvent;
use towerline_core::geometry::distance;
use towerline_core::types::Point;

use crate::world_setup;

/// An enemy a tower may shoot at this tick.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub entity: Entity,
    pub position: Point,
    pub spawn_seq: u64,
}

/// A shot decided this tick, spawned once the tower query is released.
#[derive(Debug, Clone, Copy)]
pub struct Shot {
    pub origin: Point,
    pub target: Entity,
    pub damage: u32,
}

/// Run tower targeting and spawn the resulting projectiles.
///
/// Candidates are scanned in spawn order, so equally distant enemies
/// resolve to the one spawned first.
pub fn run(
    world: &mut World,
    dt: f64,
    projectile_speed: f64,
    candidates: &mut Vec<Candidate>,
    shots: &mut Vec<Shot>,
    events: &mut Vec<SimEvent>,
) {
    collect_candidates(world, candidates);

    shots.clear();
    for (_entity, (pos, tower)) in world.query_mut::<(&Position, &mut Tower)>() {
        tower.cooldown -= dt;
        if tower.cooldown > 0.0 {
            continue;
        }
        if let Some(target) = nearest_in_range(pos.0, tower.range, candidates) {
            shots.push(Shot {
                origin: pos.0,
                target: target.entity,
                damage: tower.damage,
            });
            tower.cooldown = tower.reload_secs();
        }
    }

    for &Shot { origin, target, damage } in shots.iter() {
        world_setup::spawn_projectile(world, origin, target, projectile_speed, damage);
        trace!(x = origin.x, y = origin.y, "tower fired");
        events.push(SimEvent::ShotFired {
            x: origin.x,
            y: origin.y,
        });
    }
}

/// Gather every traveling enemy, ordered by spawn sequence.
fn collect_candidates(world: &World, candidates: &mut Vec<Candidate>) {
    candidates.clear();
    candidates.extend(
        world
            .query::<(&Position, &Enemy)>()
            .iter()
            .filter(|(_, (_, enemy))| enemy.state != EnemyState::Reached)
            .map(|(entity, (pos, enemy))| Candidate {
                entity,
                position: pos.0,
                spawn_seq: enemy.spawn_seq,
            }),
    );
    candidates.sort_by_key(|c| c.spawn_seq);
}

/// Closest candidate within `range` of `origin`; the first wins on ties.
pub fn nearest_in_range(origin: Point, range: f64, candidates: &[Candidate]) -> Option<Candidate> {
    let mut best: Option<(f64, Candidate)> = None;
    for candidate in candidates {
        let d = distance(origin, candidate.position);
        if d > range {
            continue;
        }
        match best {
            Some((best_d, _)) if d >= best_d => {}
            _ => best = Some((d, *candidate)),
        }
    }
    best.map(|(_, candidate)| candidate)
}

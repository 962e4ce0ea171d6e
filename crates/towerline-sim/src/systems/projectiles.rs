//! Projectile flight and impact resolution.
//!
//! Projectiles home on their target's live position. A projectile whose
//! target no longer resolves (killed, leaked, cleared) or has reached the
//! goal just dies. Killing an enemy despawns it immediately, so a second
//! projectile arriving later finds no target and the reward is paid once.

use hecs::{Entity, World};
use tracing::debug;

use towerline_core::components::{Enemy, Health, Position, Projectile};
use towerline_core::enums::EnemyState;
use towerline_core::events::SimEvent;
use towerline_core::geometry::{distance, step_toward};
use towerline_core::types::Point;

/// Impact and reward settings for one tick.
#[derive(Debug, Clone, Copy)]
pub struct ImpactRules {
    pub impact_radius: f64,
    pub kill_reward: u32,
}

/// Advance every projectile by `dt` seconds and resolve impacts.
pub fn run(
    world: &mut World,
    dt: f64,
    rules: ImpactRules,
    cash: &mut u32,
    projectile_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    projectile_buffer.clear();
    projectile_buffer.extend(world.query_mut::<&Projectile>().into_iter().map(|(e, _)| e));

    for &entity in projectile_buffer.iter() {
        let (target, speed, damage) = match world.get::<&Projectile>(entity) {
            Ok(p) if !p.dead => (p.target, p.speed, p.damage),
            _ => continue,
        };

        let Some(target_pos) = live_target_position(world, target) else {
            mark_dead(world, entity);
            continue;
        };

        let Ok(mut pos) = world.get::<&mut Position>(entity) else {
            continue;
        };
        if distance(pos.0, target_pos) >= rules.impact_radius {
            pos.0 = step_toward(pos.0, target_pos, speed * dt);
            continue;
        }
        drop(pos);

        mark_dead(world, entity);
        resolve_hit(world, target, damage, rules.kill_reward, cash, events);
    }
}

/// Position of `target` if it still exists and has not reached the goal.
fn live_target_position(world: &World, target: Entity) -> Option<Point> {
    let enemy = world.get::<&Enemy>(target).ok()?;
    if enemy.state == EnemyState::Reached {
        return None;
    }
    let pos = world.get::<&Position>(target).ok()?;
    Some(pos.0)
}

fn mark_dead(world: &World, entity: Entity) {
    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
        projectile.dead = true;
    }
}

/// Apply damage; on a kill despawn the enemy and pay the reward.
fn resolve_hit(
    world: &mut World,
    target: Entity,
    damage: u32,
    reward: u32,
    cash: &mut u32,
    events: &mut Vec<SimEvent>,
) {
    let killed = match world.get::<&mut Health>(target) {
        Ok(mut health) => health.apply_damage(damage),
        Err(_) => return,
    };
    if !killed {
        return;
    }

    let spawn_seq = world
        .get::<&Enemy>(target)
        .map(|enemy| enemy.spawn_seq)
        .unwrap_or_default();
    if world.despawn(target).is_ok() {
        *cash += reward;
        debug!(spawn_seq, cash = *cash, "enemy killed");
        events.push(SimEvent::EnemyKilled { spawn_seq, reward });
    }
}

//! Goal sweep: remove enemies that reached the end of the path.

use hecs::{Entity, World};
use tracing::debug;

use towerline_core::components::Enemy;
use towerline_core::enums::EnemyState;
use towerline_core::events::SimEvent;

/// Despawn every Reached enemy, charging one life each.
/// Returns the number of enemies that leaked.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    lives: &mut i32,
    events: &mut Vec<SimEvent>,
) -> u32 {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.state == EnemyState::Reached {
            despawn_buffer.push(entity);
            *lives -= 1;
            debug!(spawn_seq = enemy.spawn_seq, lives = *lives, "enemy leaked");
            events.push(SimEvent::EnemyLeaked {
                spawn_seq: enemy.spawn_seq,
                lives: *lives,
            });
        }
    }

    let leaked = despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    leaked
}

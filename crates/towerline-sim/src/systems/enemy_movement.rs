//! Enemy steering: walk each enemy toward its next waypoint.
//!
//! Arrival within `WAYPOINT_ARRIVAL_RADIUS` snaps the enemy onto the next
//! segment without carrying leftover travel distance, so an enemy loses up
//! to one tick of travel at each corner.

use hecs::World;

use towerline_core::components::{Enemy, Position};
use towerline_core::constants::WAYPOINT_ARRIVAL_RADIUS;
use towerline_core::enums::EnemyState;
use towerline_core::geometry::{distance, step_toward};
use towerline_core::types::Point;

use crate::path::Path;

/// Advance every enemy by `dt` seconds.
pub fn run(world: &mut World, path: &Path, dt: f64) {
    for (_entity, (pos, enemy)) in world.query_mut::<(&mut Position, &mut Enemy)>() {
        step(&mut pos.0, enemy, path, dt);
    }
}

/// Apply one tick of the Traveling/Reached state machine to a single enemy.
pub fn step(position: &mut Point, enemy: &mut Enemy, path: &Path, dt: f64) {
    if enemy.state == EnemyState::Reached {
        return;
    }

    let target = path.point_at(enemy.waypoint_index + 1);
    if distance(*position, target) < WAYPOINT_ARRIVAL_RADIUS {
        if enemy.waypoint_index < path.last_index() {
            enemy.waypoint_index += 1;
        } else {
            enemy.state = EnemyState::Reached;
        }
        return;
    }

    *position = step_toward(*position, target, enemy.speed * dt);
}

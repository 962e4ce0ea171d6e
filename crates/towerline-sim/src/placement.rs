//! Placement validator.
//!
//! The same read-only check backs cursor feedback and the placement commit,
//! so both always agree for a given point and state.

use hecs::World;

use towerline_core::components::{Position, Tower};
use towerline_core::config::SimConfig;
use towerline_core::error::PlacementRejection;
use towerline_core::geometry::distance;
use towerline_core::types::Point;

use crate::path::Path;

/// True when a tower center lies within `min_separation` of `point`.
pub fn overlaps_existing_tower(world: &World, point: Point, min_separation: f64) -> bool {
    world
        .query::<(&Position, &Tower)>()
        .iter()
        .any(|(_, (pos, _))| distance(pos.0, point) < min_separation)
}

/// Validate a placement, reporting the first failing rule.
///
/// Rules run in a fixed order: on-path, then tower overlap, then funds.
pub fn check(
    world: &World,
    path: &Path,
    cash: u32,
    config: &SimConfig,
    point: Point,
) -> Result<(), PlacementRejection> {
    if path.corridor_contains(point, config.placement_padding) {
        return Err(PlacementRejection::OnPath);
    }
    if overlaps_existing_tower(world, point, config.min_tower_separation) {
        return Err(PlacementRejection::OverlapsTower);
    }
    if cash < config.tower.cost {
        return Err(PlacementRejection::InsufficientFunds);
    }
    Ok(())
}

//! Built-in maps, defined in resolution-independent logical coordinates.
//!
//! A map's waypoints live in `0..1` on both axes. The host boundary
//! resolves them against its viewport before the simulation sees them.

use towerline_core::config::SimConfig;
use towerline_core::error::SimError;
use towerline_core::types::Point;

use crate::path::Path;

/// A named logical waypoint list.
#[derive(Debug, Clone, Copy)]
pub struct MapDef {
    pub name: &'static str,
    pub waypoints: &'static [(f64, f64)],
}

/// All selectable maps. Index 0 is the default.
pub const MAPS: &[MapDef] = &[
    MapDef {
        name: "Meadow",
        waypoints: &[
            (0.0625, 0.5),
            (0.25, 0.25),
            (0.5, 0.5),
            (0.75, 0.4),
            (0.9375, 0.5),
        ],
    },
    MapDef {
        name: "Switchback",
        waypoints: &[
            (0.05, 0.15),
            (0.85, 0.15),
            (0.85, 0.45),
            (0.15, 0.45),
            (0.15, 0.8),
            (0.95, 0.8),
        ],
    },
    MapDef {
        name: "Canyon",
        waypoints: &[
            (0.5, 0.05),
            (0.5, 0.35),
            (0.2, 0.6),
            (0.8, 0.6),
            (0.5, 0.95),
        ],
    },
];

/// Map logical waypoints onto a `width` x `height` viewport.
pub fn resolve_path(waypoints: &[(f64, f64)], width: f64, height: f64) -> Vec<Point> {
    waypoints
        .iter()
        .map(|&(x, y)| Point::new(x * width, y * height))
        .collect()
}

/// Resolve built-in map `index` against the configured viewport.
pub fn build_path(index: usize, config: &SimConfig) -> Result<Path, SimError> {
    let map = MAPS.get(index).ok_or(SimError::UnknownMap {
        index,
        available: MAPS.len(),
    })?;
    Path::new(
        resolve_path(map.waypoints, config.viewport_width, config.viewport_height),
        config.corridor_width,
    )
}

//! Error and rejection types surfaced to the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// Failures of host-level operations (session setup, map selection).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("unknown map index {index} ({available} maps available)")]
    UnknownMap { index: usize, available: usize },
    #[error("a path needs at least 2 waypoints, got {0}")]
    PathTooShort(usize),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// Why a tower could not be placed. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementRejection {
    #[error("point lies on the enemy path")]
    OnPath,
    #[error("point overlaps an existing tower")]
    OverlapsTower,
    #[error("not enough cash")]
    InsufficientFunds,
}

//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D point in the resolved (pixel) coordinate space the host supplies.
/// x grows to the right, y grows downward.
pub type Point = glam::DVec2;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of physics ticks applied.
    pub tick: u64,
    /// Sum of the (clamped) frame deltas applied, in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

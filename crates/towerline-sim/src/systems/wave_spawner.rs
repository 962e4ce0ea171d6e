//! Wave spawner: a wall-clock timer that releases a wave's enemies one at a
//! time at a fixed interval.
//!
//! The spawner keeps its own clock, independent of the physics `dt`. The
//! host advances it with real elapsed time; every interval that passes
//! yields one spawn event.

use std::time::Duration;

use towerline_core::enums::SpawnerState;

#[derive(Debug, Clone)]
pub struct WaveSpawner {
    state: SpawnerState,
    interval: Duration,
    /// Wave whose enemies are being released.
    wave: u32,
    remaining: u32,
    until_next: Duration,
}

impl WaveSpawner {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: SpawnerState::Idle,
            interval,
            wave: 0,
            remaining: 0,
            until_next: interval,
        }
    }

    pub fn state(&self) -> SpawnerState {
        self.state
    }

    pub fn is_spawning(&self) -> bool {
        self.state == SpawnerState::Spawning
    }

    /// Spawns still pending.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Wave of the current (or most recent) schedule.
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Schedule `count` spawns for `wave`, the first one interval from now.
    /// Returns false without changing anything while a wave is spawning.
    pub fn start(&mut self, wave: u32, count: u32) -> bool {
        if self.is_spawning() {
            return false;
        }
        self.wave = wave;
        self.remaining = count;
        self.until_next = self.interval;
        self.state = if count > 0 {
            SpawnerState::Spawning
        } else {
            SpawnerState::Idle
        };
        true
    }

    /// Advance the timer by `elapsed` and return how many spawns fell due.
    /// Returns to Idle after the last one.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_spawning() {
            return 0;
        }

        let mut budget = elapsed;
        let mut due = 0;
        while budget >= self.until_next {
            budget -= self.until_next;
            self.until_next = self.interval;
            self.remaining -= 1;
            due += 1;
            if self.remaining == 0 {
                self.state = SpawnerState::Idle;
                return due;
            }
        }
        self.until_next -= budget;
        due
    }

    /// Drop every pending spawn.
    pub fn cancel(&mut self) {
        self.state = SpawnerState::Idle;
        self.remaining = 0;
        self.until_next = self.interval;
    }
}

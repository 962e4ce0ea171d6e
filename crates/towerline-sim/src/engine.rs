//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs world and every piece of mutable session
//! state (cash, lives, wave, path, spawner). It applies player commands,
//! runs the per-frame physics tick, services the wave spawner's wall-clock
//! timer, and produces `SimSnapshot`s. Completely headless, so the same
//! engine backs the host loop and deterministic tests.
//!
//! The frame tick and the spawner timer are separate entry points. The host
//! must call them from one thread (or otherwise serialize them).

use std::collections::VecDeque;
use std::time::Duration;

use hecs::{Entity, World};
use tracing::{debug, info};

use towerline_core::commands::PlayerCommand;
use towerline_core::config::SimConfig;
use towerline_core::enums::{GamePhase, SpawnerState};
use towerline_core::error::{PlacementRejection, SimError};
use towerline_core::events::SimEvent;
use towerline_core::state::SimSnapshot;
use towerline_core::types::{Point, SimTime};

use crate::maps;
use crate::path::Path;
use crate::placement;
use crate::systems;
use crate::systems::projectiles::ImpactRules;
use crate::systems::snapshot::SessionView;
use crate::systems::tower_targeting::{Candidate, Shot};
use crate::systems::wave_spawner::WaveSpawner;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    path: Path,
    map_index: usize,
    time: SimTime,
    phase: GamePhase,
    cash: u32,
    wave: u32,
    lives: i32,
    spawner: WaveSpawner,
    next_spawn_seq: u64,
    last_rejection: Option<PlacementRejection>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    candidates: Vec<Candidate>,
    shots: Vec<Shot>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine on `config.map_index` with starting cash and lives.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let path = maps::build_path(config.map_index, &config)?;
        let spawner = WaveSpawner::new(config.waves.spawn_interval());

        Ok(Self {
            world: World::new(),
            path,
            map_index: config.map_index,
            time: SimTime::default(),
            phase: GamePhase::default(),
            cash: config.starting_cash,
            wave: 0,
            lives: config.starting_lives,
            spawner,
            next_spawn_seq: 0,
            last_rejection: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            candidates: Vec::new(),
            shots: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Create an engine on a host-supplied path instead of a built-in map.
    pub fn with_path(config: SimConfig, waypoints: Vec<Point>) -> Result<Self, SimError> {
        let mut engine = Self::new(config)?;
        engine.path = Path::new(waypoints, engine.config.corridor_width)?;
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Apply queued commands, advance physics by `dt` seconds, and return the
    /// resulting snapshot. `dt` is clamped to `[0, max_tick_dt]`.
    ///
    /// After game over the world is left untouched until `reset`.
    pub fn tick(&mut self, dt: f64) -> SimSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = if dt.is_finite() {
                dt.clamp(0.0, self.config.max_tick_dt)
            } else {
                0.0
            };
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Spawner timer callback: advance the wave clock by real `elapsed` time
    /// and spawn whatever fell due. Returns the number of enemies spawned.
    pub fn advance_spawn_timer(&mut self, elapsed: Duration) -> u32 {
        if self.phase != GamePhase::Active {
            return 0;
        }

        let due = self.spawner.advance(elapsed);
        let wave = self.spawner.wave();
        for _ in 0..due {
            let spawn_seq = self.next_spawn_seq;
            self.next_spawn_seq += 1;
            world_setup::spawn_enemy(
                &mut self.world,
                &self.path,
                &self.config.waves,
                wave,
                spawn_seq,
            );
            self.events.push(SimEvent::EnemySpawned { spawn_seq });
        }

        if due > 0 && self.spawner.state() == SpawnerState::Idle {
            info!(wave, "wave fully spawned");
            self.events.push(SimEvent::WaveSpawned { wave });
        }
        due
    }

    /// Begin the next wave. Returns false while a wave is still spawning or
    /// after game over.
    pub fn start_wave(&mut self) -> bool {
        if self.phase != GamePhase::Active || self.spawner.is_spawning() {
            return false;
        }

        self.wave += 1;
        let enemies = self.config.waves.enemy_count(self.wave);
        self.spawner.start(self.wave, enemies);
        info!(wave = self.wave, enemies, "wave started");
        self.events.push(SimEvent::WaveStarted {
            wave: self.wave,
            enemies,
        });
        if !self.spawner.is_spawning() {
            self.events.push(SimEvent::WaveSpawned { wave: self.wave });
        }
        true
    }

    /// Read-only placement verdict for cursor feedback.
    pub fn can_place(&self, point: Point) -> bool {
        self.placement_preview(point).is_ok()
    }

    /// Read-only placement check reporting why a point is invalid.
    pub fn placement_preview(&self, point: Point) -> Result<(), PlacementRejection> {
        placement::check(&self.world, &self.path, self.cash, &self.config, point)
    }

    /// Validate and commit a tower at `point`. On rejection nothing but the
    /// last-rejection reason changes.
    pub fn place_tower(&mut self, point: Point) -> Result<Entity, PlacementRejection> {
        if let Err(reason) = self.placement_preview(point) {
            debug!(x = point.x, y = point.y, ?reason, "placement rejected");
            self.last_rejection = Some(reason);
            self.events.push(SimEvent::PlacementRejected { reason });
            return Err(reason);
        }

        self.cash -= self.config.tower.cost;
        let entity = world_setup::spawn_tower(&mut self.world, point, &self.config.tower);
        self.last_rejection = None;
        debug!(x = point.x, y = point.y, cash = self.cash, "tower placed");
        self.events.push(SimEvent::TowerPlaced {
            x: point.x,
            y: point.y,
        });
        Ok(entity)
    }

    /// Switch to built-in map `index`. Clears every entity and drops pending
    /// spawns; cash, lives and the wave counter carry over.
    pub fn select_map(&mut self, index: usize) -> Result<(), SimError> {
        let path = maps::build_path(index, &self.config)?;
        self.path = path;
        self.map_index = index;
        self.clear_entities();
        info!(index, name = maps::MAPS[index].name, "map selected");
        self.events.push(SimEvent::MapSelected { index });
        Ok(())
    }

    /// Reinitialize the session on the current path.
    pub fn reset(&mut self) {
        self.clear_entities();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.cash = self.config.starting_cash;
        self.lives = self.config.starting_lives;
        self.wave = 0;
        self.next_spawn_seq = 0;
        self.last_rejection = None;
        self.events.clear();
        info!(map = self.map_index, "session reset");
    }

    /// Build a snapshot without draining pending events.
    pub fn snapshot(&self) -> SimSnapshot {
        self.build_snapshot(self.events.clone())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn cash(&self) -> u32 {
        self.cash
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn map_index(&self) -> usize {
        self.map_index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn spawner_state(&self) -> SpawnerState {
        self.spawner.state()
    }

    pub fn last_rejection(&self) -> Option<PlacementRejection> {
        self.last_rejection
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that need hand-built scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Override cash (for tests).
    #[cfg(test)]
    pub fn set_cash(&mut self, cash: u32) {
        self.cash = cash;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { x, y } => {
                if self.phase == GamePhase::Active {
                    let _ = self.place_tower(Point::new(x, y));
                }
            }
            PlayerCommand::StartWave => {
                self.start_wave();
            }
            PlayerCommand::SelectMap { index } => {
                if let Err(err) = self.select_map(index) {
                    debug!(%err, "map selection ignored");
                }
            }
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Enemy movement
        systems::enemy_movement::run(&mut self.world, &self.path, dt);

        // 2. Goal sweep (lives, game over)
        let leaked = systems::goal_sweep::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.lives,
            &mut self.events,
        );
        if leaked > 0 && self.lives <= 0 {
            self.enter_game_over();
            return;
        }

        // 3. Tower targeting (sees post-movement positions)
        systems::tower_targeting::run(
            &mut self.world,
            dt,
            self.config.projectile_speed,
            &mut self.candidates,
            &mut self.shots,
            &mut self.events,
        );

        // 4. Projectile flight and impacts
        systems::projectiles::run(
            &mut self.world,
            dt,
            ImpactRules {
                impact_radius: self.config.impact_radius,
                kill_reward: self.config.kill_reward,
            },
            &mut self.cash,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 5. Cleanup (dead projectiles)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.spawner.cancel();
        info!(wave = self.wave, lives = self.lives, "game over");
        self.events.push(SimEvent::GameOver { wave: self.wave });
    }

    fn clear_entities(&mut self) {
        self.world.clear();
        self.spawner.cancel();
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> SimSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.path,
            &self.spawner,
            SessionView {
                time: self.time,
                phase: self.phase,
                cash: self.cash,
                wave: self.wave,
                lives: self.lives,
                map_index: self.map_index,
                last_rejection: self.last_rejection,
            },
            events,
        )
    }
}

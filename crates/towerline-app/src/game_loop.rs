//! Game loop thread — drives the engine's frame tick and spawn timer.
//!
//! The engine is created before the thread starts so config errors reach the
//! caller, then moved into the thread and never shared. Two schedules run on
//! that one thread: the frame tick at `FRAME_RATE` (delta-driven physics) and
//! the spawn timer polled every `SPAWN_TIMER_PERIOD` with real elapsed time.
//! Running both on one thread keeps them serialized. Commands arrive via
//! `mpsc` channel. Snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use towerline_core::config::SimConfig;
use towerline_core::error::SimError;
use towerline_core::events::SimEvent;
use towerline_core::state::SimSnapshot;
use towerline_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Frame ticks per second.
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame at 1x speed.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// How often the spawn timer is serviced.
const SPAWN_TIMER_PERIOD: Duration = Duration::from_millis(10);

/// Spawns the game loop in a new thread.
///
/// `time_scale` multiplies real elapsed time for both schedules and is
/// clamped to `[0.1, 4.0]`. Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    time_scale: f64,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), SimError> {
    let engine = SimulationEngine::new(config)?;
    let time_scale = time_scale.clamp(0.1, 4.0);
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("towerline-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot, time_scale);
        })
        .expect("Failed to spawn game loop thread");

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
    time_scale: f64,
) {
    info!(time_scale, "game loop started");
    let start = Instant::now();
    let mut last_frame = start;
    let mut next_frame = start;
    let mut last_spawn_poll = start;
    let mut next_spawn_poll = start + SPAWN_TIMER_PERIOD;

    loop {
        // 1. Drain all pending commands; they apply on the next frame tick.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        let now = Instant::now();

        // 2. Spawn timer (wall clock, independent of the frame delta).
        if now >= next_spawn_poll {
            engine.advance_spawn_timer((now - last_spawn_poll).mul_f64(time_scale));
            last_spawn_poll = now;
            next_spawn_poll = now + SPAWN_TIMER_PERIOD;
        }

        // 3. Frame tick; the engine clamps the delta.
        if now >= next_frame {
            let dt = (now - last_frame).as_secs_f64() * time_scale;
            last_frame = now;
            let snapshot = engine.tick(dt);
            log_events(&snapshot.events);

            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }

            next_frame += FRAME_DURATION;
            if now > next_frame && now - next_frame > FRAME_DURATION * 2 {
                // Too far behind — reset to avoid catch-up spiral
                next_frame = now;
            }
        }

        // 4. Sleep until whichever schedule is due first.
        let wake = next_frame.min(next_spawn_poll);
        let now = Instant::now();
        if wake > now {
            std::thread::sleep(wake - now);
        }
    }
}

/// Surface the events a front end would show as banners.
fn log_events(events: &[SimEvent]) {
    for event in events {
        match event {
            SimEvent::GameOver { wave } => warn!(wave, "game over, reset required"),
            SimEvent::PlacementRejected { reason } => info!(%reason, "placement rejected"),
            _ => {}
        }
    }
}

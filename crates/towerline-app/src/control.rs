//! Host control surface: start the loop, forward commands, read snapshots.
//!
//! These are the calls a front end makes; they only talk to the game loop
//! through its channel and the shared snapshot.

use towerline_core::commands::PlayerCommand;
use towerline_core::config::SimConfig;
use towerline_core::state::SimSnapshot;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand, HostError};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    time_scale: f64,
) -> Result<(), HostError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| HostError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(HostError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, time_scale, state.latest_snapshot.clone())?;

    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| HostError::Poisoned)? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), HostError> {
    let tx_lock = state.command_tx.lock().map_err(|_| HostError::Poisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| HostError::LoopStopped),
        None => Err(HostError::NotStarted),
    }
}

/// Get the latest snapshot (None until the first frame has run).
pub fn get_snapshot(state: &AppState) -> Result<Option<SimSnapshot>, HostError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| HostError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), HostError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| HostError::Poisoned)?
        .take()
        .ok_or(HostError::NotStarted)?;
    // The loop may already be gone; joining below covers both cases.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| HostError::Poisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| HostError::LoopStopped)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::StartWave),
            Err(HostError::NotStarted)
        ));
        assert!(matches!(stop_simulation(&state), Err(HostError::NotStarted)));
    }

    #[test]
    fn test_invalid_config_does_not_start() {
        let state = AppState::new();
        let config = SimConfig {
            map_index: 99,
            ..Default::default()
        };
        assert!(matches!(
            start_simulation(&state, config, 1.0),
            Err(HostError::Sim(_))
        ));
        assert!(!state.is_running());
    }

    #[test]
    fn test_start_command_stop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default(), 1.0).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default(), 1.0),
            Err(HostError::AlreadyRunning)
        ));

        send_command(&state, PlayerCommand::StartWave).unwrap();
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let mut wave = 0;
        while wave == 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
            wave = get_snapshot(&state).unwrap().map(|s| s.wave).unwrap_or(0);
        }
        assert_eq!(wave, 1);

        stop_simulation(&state).unwrap();
        assert!(!state.is_running());
    }
}

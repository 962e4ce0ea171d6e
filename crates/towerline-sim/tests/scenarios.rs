//! End-to-end scenarios driven through the public engine API only.

use std::time::Duration;

use towerline_core::config::SimConfig;
use towerline_core::enums::{GamePhase, SpawnerState};
use towerline_core::error::PlacementRejection;
use towerline_core::events::SimEvent;
use towerline_core::types::Point;
use towerline_sim::SimulationEngine;

const FRAME: f64 = 1.0 / 60.0;

/// Straight path along y = 50, so (50, 50) sits on the corridor.
fn line_engine(config: SimConfig) -> SimulationEngine {
    SimulationEngine::with_path(
        config,
        vec![Point::new(0.0, 50.0), Point::new(600.0, 50.0)],
    )
    .unwrap()
}

#[test]
fn placement_on_path_is_rejected_without_charge() {
    let mut engine = line_engine(SimConfig::default());
    assert_eq!(engine.cash(), 100);

    let result = engine.place_tower(Point::new(50.0, 50.0));

    assert_eq!(result.unwrap_err(), PlacementRejection::OnPath);
    assert_eq!(engine.cash(), 100);
    assert!(engine.snapshot().towers.is_empty());
    assert_eq!(engine.last_rejection(), Some(PlacementRejection::OnPath));
}

#[test]
fn valid_placement_charges_and_second_overlapping_is_rejected() {
    let mut engine = line_engine(SimConfig::default());

    engine.place_tower(Point::new(100.0, 150.0)).unwrap();
    assert_eq!(engine.cash(), 50);
    assert_eq!(engine.snapshot().towers.len(), 1);

    let result = engine.place_tower(Point::new(120.0, 160.0));
    assert_eq!(result.unwrap_err(), PlacementRejection::OverlapsTower);
    assert_eq!(engine.cash(), 50);
    assert_eq!(engine.snapshot().towers.len(), 1);
}

#[test]
fn running_out_of_cash_is_reported() {
    let mut engine = line_engine(SimConfig::default());
    engine.place_tower(Point::new(100.0, 150.0)).unwrap();
    engine.place_tower(Point::new(300.0, 150.0)).unwrap();
    assert_eq!(engine.cash(), 0);

    assert!(!engine.can_place(Point::new(500.0, 150.0)));
    assert_eq!(
        engine.place_tower(Point::new(500.0, 150.0)).unwrap_err(),
        PlacementRejection::InsufficientFunds
    );
    assert_eq!(engine.snapshot().towers.len(), 2);
}

#[test]
fn can_place_is_pure() {
    let mut engine = line_engine(SimConfig::default());
    engine.place_tower(Point::new(100.0, 150.0)).unwrap();
    let before = engine.snapshot();

    for point in [
        Point::new(50.0, 50.0),
        Point::new(110.0, 150.0),
        Point::new(400.0, 300.0),
    ] {
        let first = engine.can_place(point);
        let second = engine.can_place(point);
        assert_eq!(first, second);
        assert_eq!(first, engine.placement_preview(point).is_ok());
        if !first {
            assert!(engine.place_tower(point).is_err());
        }
    }

    let after = engine.snapshot();
    assert_eq!(after.cash, before.cash);
    assert_eq!(after.towers, before.towers);
}

#[test]
fn first_wave_spawns_twelve_at_fixed_cadence() {
    let mut engine = line_engine(SimConfig::default());
    assert!(engine.start_wave());
    assert_eq!(engine.wave(), 1);
    assert_eq!(engine.spawner_state(), SpawnerState::Spawning);
    assert!(!engine.start_wave(), "start is a no-op while spawning");
    assert_eq!(engine.wave(), 1);

    let mut spawned = 0;
    let mut steps = 0;
    while engine.spawner_state() == SpawnerState::Spawning {
        // 100 ms timer resolution: one spawn every sixth step.
        let due = engine.advance_spawn_timer(Duration::from_millis(100));
        steps += 1;
        if due > 0 {
            assert_eq!(due, 1);
            assert_eq!(steps % 6, 0, "spawn off cadence at step {steps}");
        }
        spawned += due;
        assert!(steps <= 72);
    }

    assert_eq!(spawned, 12);
    assert_eq!(steps, 72);
    assert_eq!(engine.snapshot().enemies.len(), 12);
    assert!(engine.start_wave());
    assert_eq!(engine.wave(), 2);
}

#[test]
fn single_enemy_is_killed_and_rewarded() {
    let mut engine = line_engine(SimConfig::default());
    engine.place_tower(Point::new(60.0, 110.0)).unwrap();
    engine.start_wave();
    engine.advance_spawn_timer(Duration::from_millis(600));
    assert_eq!(engine.snapshot().enemies.len(), 1);

    // Reload plus flight time across the full range, with slack.
    let deadline = 1.0 + 120.0 / 400.0 + 0.1;
    let mut killed_at = None;
    while engine.time().elapsed_secs < deadline {
        let snap = engine.tick(FRAME);
        if snap
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::EnemyKilled { reward: 10, .. }))
        {
            killed_at = Some(snap.time.elapsed_secs);
            break;
        }
    }

    assert!(killed_at.is_some(), "enemy survived past {deadline}s");
    let snap = engine.snapshot();
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.cash, 60);
}

#[test]
fn last_life_lost_signals_game_over_once() {
    let mut engine = SimulationEngine::with_path(
        SimConfig {
            starting_lives: 1,
            ..Default::default()
        },
        vec![Point::new(0.0, 50.0), Point::new(40.0, 50.0)],
    )
    .unwrap();
    engine.start_wave();
    engine.advance_spawn_timer(Duration::from_millis(600));

    let mut game_overs = 0;
    for _ in 0..300 {
        let snap = engine.tick(FRAME);
        game_overs += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::GameOver { .. }))
            .count();
    }

    assert_eq!(game_overs, 1);
    assert_eq!(engine.lives(), 0);
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert!(engine.snapshot().is_game_over());
}

#[test]
fn built_in_maps_are_selectable() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let first = engine.snapshot().path;
    engine.select_map(2).unwrap();
    let second = engine.snapshot().path;

    assert_ne!(first.points, second.points);
    assert_eq!(second.corridor_width, 24.0);
    assert_eq!(engine.map_index(), 2);
}

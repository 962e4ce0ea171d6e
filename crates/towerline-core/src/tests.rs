#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Health, Tower};
    use crate::config::{ConfigError, SimConfig, TowerSpec, WaveSpec};
    use crate::enums::*;
    use crate::error::{PlacementRejection, SimError};
    use crate::events::SimEvent;
    use crate::state::SimSnapshot;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_zero_fire_rate() {
        let config = SimConfig {
            tower: TowerSpec {
                fire_rate: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "tower.fire_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_config_rejects_nan_interval() {
        let config = SimConfig {
            waves: WaveSpec {
                spawn_interval_secs: f64::NAN,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_interval_beyond_duration() {
        let config = SimConfig {
            waves: WaveSpec {
                spawn_interval_secs: 1e20,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnIntervalOutOfRange(1e20))
        );
        assert_eq!(config.waves.spawn_interval(), std::time::Duration::MAX);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "starting_cash": 500, "tower": { "range": 200.0 } }"#)
                .unwrap();
        assert_eq!(config.starting_cash, 500);
        assert_eq!(config.tower.range, 200.0);
        assert_eq!(config.tower.cost, 50);
        assert_eq!(config.starting_lives, 20);
        assert_eq!(config.waves.spawn_interval_secs, 0.6);
    }

    #[test]
    fn test_wave_scaling() {
        let waves = WaveSpec::default();
        assert_eq!(waves.enemy_count(1), 12);
        assert_eq!(waves.enemy_count(5), 20);
        assert_eq!(waves.enemy_hp(1), 1);
        assert_eq!(waves.enemy_hp(3), 2);
        assert_eq!(waves.enemy_hp(7), 3);
        assert_eq!(waves.enemy_speed(1), 65.0);
        assert_eq!(waves.enemy_speed(4), 80.0);
    }

    #[test]
    fn test_health_saturates_at_zero() {
        let mut health = Health::full(2);
        assert!(!health.apply_damage(1));
        assert_eq!(health.ratio(), 0.5);
        assert!(health.apply_damage(5));
        assert_eq!(health.hp, 0);
        assert_eq!(health.ratio(), 0.0);
    }

    #[test]
    fn test_reload_is_inverse_fire_rate() {
        let tower = Tower {
            range: 120.0,
            fire_rate: 4.0,
            cooldown: 0.0,
            damage: 1,
        };
        assert_eq!(tower.reload_secs(), 0.25);
    }

    #[test]
    fn test_rejection_serializes_as_reason_tag() {
        let json = serde_json::to_string(&PlacementRejection::OnPath).unwrap();
        assert_eq!(json, "\"ON_PATH\"");
        let back: PlacementRejection = serde_json::from_str("\"OVERLAPS_TOWER\"").unwrap();
        assert_eq!(back, PlacementRejection::OverlapsTower);
    }

    #[test]
    fn test_sim_error_messages() {
        let err = SimError::UnknownMap {
            index: 9,
            available: 3,
        };
        assert_eq!(err.to_string(), "unknown map index 9 (3 maps available)");
        let err: SimError = ConfigError::NoLives(0).into();
        assert_eq!(err.to_string(), "invalid config: starting_lives must be positive, got 0");
    }

    #[test]
    fn test_player_command_tagged_json() {
        let json = r#"{ "type": "PlaceTower", "x": 10.0, "y": 20.0 }"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, PlayerCommand::PlaceTower { x: 10.0, y: 20.0 });
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = SimSnapshot {
            phase: GamePhase::GameOver,
            cash: 70,
            events: vec![SimEvent::GameOver { wave: 3 }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
        assert!(back.is_game_over());
    }
}

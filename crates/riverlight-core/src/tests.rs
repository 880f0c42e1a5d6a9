#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{InputFrame, PlayerCommand};
    use crate::enums::*;
    use crate::errors::SimError;
    use crate::events::GameEvent;
    use crate::level::{EnemySpec, LevelConfig, TetherSpec};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, TetherId, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_tether_kind_serde() {
        let variants = vec![TetherKind::Lilypad, TetherKind::Lantern, TetherKind::Lotus];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TetherKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Ready,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Failed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Input {
                axis: Vec2::new(0.5, -1.0),
                tether_toggled: true,
            },
            PlayerCommand::Start,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::ResetLevel,
            PlayerCommand::SetTimeScale { scale: 2.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::OrbitCaptured { tether: TetherId(1) },
            GameEvent::PassCompleted {
                tether: TetherId(0),
                charge: 1.5,
            },
            GameEvent::TetherLit { tether: TetherId(2) },
            GameEvent::EnemyFled { enemy: 1 },
            GameEvent::PlayerCaught { enemy: 0 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_range_sq() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_sq_to(&b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_position_heading() {
        let origin = Position::new(0.0, 0.0);

        // Due East (positive X)
        let east = Position::new(10.0, 0.0);
        assert!((origin.heading_to(&east) - 0.0).abs() < 1e-6);

        // Due North (positive Y)
        let north = Position::new(0.0, 10.0);
        let expected_north = std::f32::consts::FRAC_PI_2;
        assert!(
            (origin.heading_to(&north) - expected_north).abs() < 1e-6,
            "North heading should be PI/2, got {}",
            origin.heading_to(&north)
        );
    }

    /// Verify Velocity calculations.
    #[test]
    fn test_velocity_speed_and_heading() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-6);

        let west = Velocity::new(-10.0, 0.0);
        assert!((west.heading().abs() - std::f32::consts::PI).abs() < 1e-6);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_input_frame_sanitized() {
        let frame = InputFrame {
            axis: Vec2::new(2.5, -7.0),
            tether_toggled: true,
        };
        let clean = frame.sanitized();
        assert_eq!(clean.axis, Vec2::new(1.0, -1.0));
        assert!(clean.tether_toggled);
    }

    fn sample_level() -> LevelConfig {
        LevelConfig {
            name: "test".into(),
            player_start: Vec2::new(0.0, 0.0),
            tethers: vec![TetherSpec {
                position: Vec2::new(5.0, 5.0),
                kind: TetherKind::Lantern,
                sensor_radius: 4.0,
            }],
            enemies: vec![EnemySpec {
                position: Vec2::new(20.0, 0.0),
                patrol_points: vec![Vec2::new(20.0, 0.0), Vec2::new(20.0, 18.0)],
                guard_tether: Some(0),
            }],
        }
    }

    #[test]
    fn test_level_validate_clean() {
        assert!(sample_level().validate().is_empty());
    }

    #[test]
    fn test_level_validate_short_patrol() {
        let mut level = sample_level();
        level.enemies[0].patrol_points.truncate(1);
        let problems = level.validate();
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0],
            SimError::InvalidPatrolConfiguration { enemy: 0, points: 1 }
        );
    }

    #[test]
    fn test_level_validate_bad_guard() {
        let mut level = sample_level();
        level.enemies[0].guard_tether = Some(9);
        let problems = level.validate();
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0],
            SimError::OutOfRangeGuardReference {
                enemy: 0,
                index: 9,
                tether_count: 1
            }
        );
    }

    /// Level records parse from JSON with defaults filled in.
    #[test]
    fn test_level_from_json_defaults() {
        let text = r#"{
            "player_start": [-2.0, 6.0],
            "tethers": [{ "position": [5.0, 5.0], "kind": "Lantern" }],
            "enemies": [{ "position": [20.0, 0.0], "patrol_points": [[20.0, 0.0], [20.0, 18.0]] }]
        }"#;
        let level = LevelConfig::from_json(text).unwrap();
        assert_eq!(level.player_start, Vec2::new(-2.0, 6.0));
        assert_eq!(level.tethers[0].sensor_radius, 4.0);
        assert_eq!(level.enemies[0].guard_tether, None);
        assert!(level.validate().is_empty());
    }
}

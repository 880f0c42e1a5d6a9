//! Built-in level definitions.
//!
//! Levels can also be loaded from JSON (`LevelConfig::from_json`); the
//! functions here cover the default course so the engine runs without any
//! files on disk.

use glam::Vec2;

use riverlight_core::constants::TETHER_SENSOR_RADIUS;
use riverlight_core::enums::TetherKind;
use riverlight_core::level::{EnemySpec, LevelConfig, TetherSpec};

/// The default river course: a chain of anchors heading downstream, with
/// three patrol lanes crossing it. Each lane's enemy is guarded by a
/// lantern; the last two lanes share one.
pub fn river_course() -> LevelConfig {
    LevelConfig {
        name: "river-course".to_string(),
        player_start: Vec2::new(-2.0, 6.0),
        tethers: vec![
            TetherSpec {
                position: Vec2::new(0.0, 6.0),
                kind: TetherKind::Lilypad,
                sensor_radius: TETHER_SENSOR_RADIUS,
            },
            TetherSpec {
                position: Vec2::new(5.0, 5.0),
                kind: TetherKind::Lantern,
                sensor_radius: TETHER_SENSOR_RADIUS,
            },
            TetherSpec {
                position: Vec2::new(15.0, 4.0),
                kind: TetherKind::Lantern,
                sensor_radius: TETHER_SENSOR_RADIUS,
            },
            TetherSpec {
                position: Vec2::new(30.0, 4.0),
                kind: TetherKind::Lilypad,
                sensor_radius: TETHER_SENSOR_RADIUS,
            },
            TetherSpec {
                position: Vec2::new(30.0, 14.0),
                kind: TetherKind::Lilypad,
                sensor_radius: TETHER_SENSOR_RADIUS,
            },
            TetherSpec {
                position: Vec2::new(50.0, 7.0),
                kind: TetherKind::Lilypad,
                sensor_radius: TETHER_SENSOR_RADIUS,
            },
            TetherSpec {
                position: Vec2::new(70.0, 7.0),
                kind: TetherKind::Lantern,
                sensor_radius: TETHER_SENSOR_RADIUS,
            },
        ],
        enemies: vec![
            patrol_lane(20.0, 0.0, 1),
            patrol_lane(61.0, 18.0, 2),
            patrol_lane(76.0, 0.0, 2),
        ],
    }
}

/// A vertical patrol lane at `x`, oscillating between the banks.
fn patrol_lane(x: f32, start_y: f32, guard: usize) -> EnemySpec {
    EnemySpec {
        position: Vec2::new(x, start_y),
        patrol_points: vec![Vec2::new(x, 0.0), Vec2::new(x, 18.0)],
        guard_tether: Some(guard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_river_course_validates_clean() {
        let level = river_course();
        assert!(level.validate().is_empty());
    }

    #[test]
    fn test_river_course_guards_are_lanterns() {
        let level = river_course();
        for enemy in &level.enemies {
            let guard = enemy.guard_tether.unwrap();
            assert_eq!(level.tethers[guard].kind, TetherKind::Lantern);
        }
    }
}

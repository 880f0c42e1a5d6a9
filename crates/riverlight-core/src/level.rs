//! Level configuration records.
//!
//! A level is an ordered list of tether records, an ordered list of enemy
//! records, and the player's start position. Registration order is the
//! record order and is what nearest-tether tie-breaks and enemy update
//! order are defined against.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::TETHER_SENSOR_RADIUS;
use crate::enums::TetherKind;
use crate::errors::{LevelError, SimError};

/// One tether anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TetherSpec {
    pub position: Vec2,
    #[serde(default)]
    pub kind: TetherKind,
    #[serde(default = "default_sensor_radius")]
    pub sensor_radius: f32,
}

/// One enemy agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpec {
    pub position: Vec2,
    /// Waypoints cycled through while patrolling. Fewer than 2 is
    /// reported as invalid and leaves the enemy stationary.
    pub patrol_points: Vec<Vec2>,
    /// Index into the level's tether list gating the flee transition.
    /// Several enemies may share a guard; an unresolvable index means
    /// the enemy never flees.
    #[serde(default)]
    pub guard_tether: Option<usize>,
}

/// Complete level description consumed at population time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(default)]
    pub name: String,
    pub player_start: Vec2,
    #[serde(default)]
    pub tethers: Vec<TetherSpec>,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
}

fn default_sensor_radius() -> f32 {
    TETHER_SENSOR_RADIUS
}

impl LevelConfig {
    /// Parses a level from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Checks enemy records against the tether list.
    ///
    /// Returns every recoverable configuration problem; the level is
    /// still playable with the documented fallbacks applied.
    pub fn validate(&self) -> Vec<SimError> {
        let mut problems = Vec::new();
        for (i, enemy) in self.enemies.iter().enumerate() {
            if enemy.patrol_points.len() < 2 {
                problems.push(SimError::InvalidPatrolConfiguration {
                    enemy: i,
                    points: enemy.patrol_points.len(),
                });
            }
            if let Some(guard) = enemy.guard_tether {
                if guard >= self.tethers.len() {
                    problems.push(SimError::OutOfRangeGuardReference {
                        enemy: i,
                        index: guard,
                        tether_count: self.tethers.len(),
                    });
                }
            }
        }
        problems
    }
}

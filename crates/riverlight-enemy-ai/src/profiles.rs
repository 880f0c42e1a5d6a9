//! Enemy motion parameters.
//!
//! Consolidates the movement tuning the FSM evaluates against.

use glam::Vec2;

/// Motion profile for an enemy agent.
pub struct EnemyMotionProfile {
    /// Distance advanced toward the goal per frame (world units).
    pub step: f32,
    /// Per-axis arrival band around the current goal (world units).
    pub arrival_band: f32,
    /// Off-stage goal assigned on the flee transition.
    pub flee_goal: Vec2,
}

/// The single profile all enemies currently share.
pub fn default_profile() -> EnemyMotionProfile {
    use riverlight_core::constants::*;

    EnemyMotionProfile {
        step: ENEMY_STEP,
        arrival_band: PATROL_ARRIVAL_BAND,
        flee_goal: Vec2::new(FLEE_GOAL.0, FLEE_GOAL.1),
    }
}

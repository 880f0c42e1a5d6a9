//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::TetherId;

/// Tether anchor state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tether {
    pub kind: TetherKind,
    /// Capture-range sensor radius (world units).
    pub sensor_radius: f32,
    /// Fixed orbit distance (world units). Immutable after construction.
    pub orbit_radius: f32,
    /// Accumulated orbit-pass progress. Only increases, and only for
    /// `Lantern` kind.
    pub charge: f32,
    /// Player position at the start of the current orbit engagement.
    /// `None` until the first orbiting frame; cleared on release.
    pub entry_point: Option<Vec2>,
    /// Debounce flag: true while the player sits inside the entry band,
    /// so one dwell counts as one pass.
    pub pass_registered: bool,
}

/// Player agent state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub tether_state: PlayerTetherState,
    /// Bound tether. `Some` iff `tether_state == Orbiting`.
    pub bound_tether: Option<TetherId>,
    /// Engage flag, flipped by each tether-toggle input edge. Armed but
    /// not yet captured means the player is steering toward the tangent
    /// point.
    pub tether_armed: bool,
    /// Tether selected when arming, promoted to `bound_tether` at capture.
    pub approach_tether: Option<TetherId>,
    /// Tangent point fixed when arming; the approach steers toward it.
    pub approach_point: Option<Vec2>,
    /// Facing in radians (0 = East, counter-clockwise).
    pub orientation: f32,
    /// Input force scale.
    pub thrust: f32,
    /// Angle on the orbit circle (radians). Meaningful only while
    /// orbiting; the position is re-derived from it every frame.
    pub orbit_angle: f32,
    pub orbit_direction: OrbitDirection,
}

/// Enemy agent state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub state: EnemyState,
    /// Point the enemy is currently stepping toward.
    pub goal: Vec2,
    /// Waypoints cycled through while patrolling. Fewer than 2 leaves
    /// the enemy stationary.
    pub patrol_points: Vec<Vec2>,
    /// Index of the waypoint `goal` was taken from.
    pub patrol_index: usize,
    /// Facing in radians, updated on reorientation.
    pub orientation: f32,
    /// Tether whose charge gates the flee transition. An index that does
    /// not resolve means the enemy never flees.
    pub guard_tether: Option<TetherId>,
}

/// Follow-camera state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: Vec2,
    /// Pursuit speed, ramped by at most CAMERA_ACCELERATION per frame
    /// and clamped to [0, CAMERA_MAX_SPEED].
    pub current_speed: f32,
    /// True while pursuing a tether target (wide framing).
    pub zoomed: bool,
}

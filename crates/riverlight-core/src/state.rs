//! Game state snapshot — the complete visible state sent to the renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, TetherId};

/// Complete game state broadcast to the renderer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub tethers: Vec<TetherView>,
    pub enemies: Vec<EnemyView>,
    pub camera: CameraView,
    /// Events that fired this tick, in emission order.
    pub events: Vec<GameEvent>,
}

/// Player state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    /// Facing in radians (0 = East, counter-clockwise).
    pub orientation: f32,
    pub tether_state: PlayerTetherState,
    pub bound_tether: Option<TetherId>,
}

/// Tether state for display. Order matches registration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TetherView {
    pub position: Vec2,
    pub kind: TetherKind,
    pub charge: f32,
    /// True once charge exceeds the lit threshold.
    pub lit: bool,
    /// Threshold exported so the renderer can scale glow toward it.
    pub lit_threshold: f32,
}

/// Enemy state for display. Order matches registration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    /// Facing in radians (0 = East, counter-clockwise).
    pub orientation: f32,
    pub state: EnemyState,
}

/// Camera rig state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec2,
    pub zoomed: bool,
}

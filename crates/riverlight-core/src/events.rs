//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::TetherId;

/// Gameplay events for the frontend, drained with each snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player was captured into orbit around a tether.
    OrbitCaptured { tether: TetherId },
    /// Player released a tether back to free movement.
    OrbitReleased { tether: TetherId },
    /// A full orbit pass registered on a lantern.
    PassCompleted { tether: TetherId, charge: f32 },
    /// A lantern's charge crossed the lit threshold.
    TetherLit { tether: TetherId },
    /// An enemy's guard lantern lit and it broke off patrol.
    EnemyFled { enemy: usize },
    /// An enemy body touched the player. The level is failed.
    PlayerCaught { enemy: usize },
}

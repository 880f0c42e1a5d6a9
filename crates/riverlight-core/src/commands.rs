//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One frame of sampled input from the input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Normalized movement axis, each component in [-1, 1].
    pub axis: Vec2,
    /// Edge-triggered: true only on the frame the tether toggle fired.
    pub tether_toggled: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Per-frame input ---
    /// Movement axis and tether toggle for the coming tick. When several
    /// arrive in one tick the last axis wins; toggle edges accumulate so
    /// none are dropped.
    Input { axis: Vec2, tether_toggled: bool },

    // --- Simulation control ---
    /// Begin the level from the Ready phase.
    Start,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Tear down and repopulate the level; charge, enemy state, player
    /// and camera all return to initial values.
    ResetLevel,
    /// Set time scale (1.0 = normal, 2.0 = double). Applied by the
    /// runner's loop, not the tick itself.
    SetTimeScale { scale: f64 },
}

impl InputFrame {
    /// Clamps each axis component into [-1, 1].
    pub fn sanitized(self) -> Self {
        Self {
            axis: self.axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)),
            tether_toggled: self.tether_toggled,
        }
    }
}

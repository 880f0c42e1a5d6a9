//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tether anchor kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetherKind {
    /// Neutral anchor: orbitable, accumulates no charge.
    #[default]
    Lilypad,
    /// Charge-accumulating anchor; lights up past the charge threshold.
    Lantern,
    /// Reserved variant for future anchor kinds.
    Lotus,
}

/// Player tether engagement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerTetherState {
    /// Moving under input thrust, no tether bound.
    #[default]
    Free,
    /// Circling a bound tether at the fixed orbit radius.
    Orbiting,
}

/// Direction of travel around an orbit circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitDirection {
    #[default]
    CounterClockwise,
    Clockwise,
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Oscillating between fixed waypoints.
    #[default]
    Patrol,
    /// Heading for the off-stage goal after the guard lantern lit.
    /// Never reverts within a level session.
    Flee,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level populated, waiting for the first input.
    #[default]
    Ready,
    /// Simulation running.
    Active,
    /// Simulation frozen; no state advances.
    Paused,
    /// Player collided with an enemy. Terminal until reset.
    Failed,
}

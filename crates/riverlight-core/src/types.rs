//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space position in world units (x = East, y = North).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Linear velocity in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Stable identifier of a tether: its index in the level's registration
/// order. Resolved through the registry on demand, never held as a direct
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TetherId(pub usize);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Squared distance to another position (world units²).
    pub fn range_sq_to(&self, other: &Position) -> f32 {
        self.0.distance_squared(other.0)
    }

    /// Heading toward another position in radians (0 = East, counter-clockwise).
    pub fn heading_to(&self, other: &Position) -> f32 {
        let d = other.0 - self.0;
        d.y.atan2(d.x)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude (world units per second).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }

    /// Heading in radians (0 = East, counter-clockwise).
    pub fn heading(&self) -> f32 {
        self.0.y.atan2(self.0.x)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

//! Error taxonomy.
//!
//! Simulation errors are recovered locally with a defined fallback; none
//! of them aborts a tick. Level errors surface from the loader as hard
//! failures before the engine exists.

use thiserror::Error;

/// Recoverable gameplay-simulation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// Nearest-tether query on an empty registry. The orbit controller
    /// stays in `Free`.
    #[error("no tether registered in the level")]
    NoTetherAvailable,

    /// An enemy was configured with fewer than two patrol points. It
    /// stays stationary in `Patrol`.
    #[error("enemy {enemy} has {points} patrol point(s), at least 2 required")]
    InvalidPatrolConfiguration { enemy: usize, points: usize },

    /// An enemy's guard index does not resolve to a registered tether.
    /// The guard condition is permanently false.
    #[error("enemy {enemy} guards tether index {index}, but only {tether_count} tethers exist")]
    OutOfRangeGuardReference {
        enemy: usize,
        index: usize,
        tether_count: usize,
    },
}

/// Errors loading a level configuration from disk.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse level file: {0}")]
    Parse(#[from] serde_json::Error),
}

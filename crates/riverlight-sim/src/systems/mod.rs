//! Simulation systems executed in a fixed order each tick.
//!
//! Systems are functions that take `&mut World` plus whatever engine
//! state they read, and mutate components in place. The engine calls
//! them in a numbered sequence; no system calls another.

pub mod camera;
pub mod enemies;
pub mod physics_sync;
pub mod player_orbit;
pub mod snapshot;

//! Enemy AI for Riverlight.
//!
//! Implements the patrol/flee behavior state machine gated by lantern
//! charge, with direct waypoint stepping independent of the physics engine.

pub mod fsm;
pub mod profiles;

pub use riverlight_core as core;

#[cfg(test)]
mod tests;

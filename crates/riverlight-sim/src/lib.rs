//! Riverlight simulation engine.
//!
//! Owns the hecs world and the physics world, runs the per-tick systems
//! (orbit control, enemy behavior, camera tracking), and produces
//! renderer snapshots. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod levels;
pub mod orbit;
pub mod physics;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use riverlight_core as core;

pub use engine::SimulationEngine;

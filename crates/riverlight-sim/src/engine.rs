//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the physics world,
//! processes player commands, runs all systems at a fixed 30 Hz, and
//! produces `GameStateSnapshot`s. Completely headless (no windowing or
//! renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rapier2d::prelude::CollisionEvent;
use tracing::{debug, info, warn};

use riverlight_core::commands::{InputFrame, PlayerCommand};
use riverlight_core::components::Player;
use riverlight_core::enums::GamePhase;
use riverlight_core::errors::SimError;
use riverlight_core::events::GameEvent;
use riverlight_core::level::LevelConfig;
use riverlight_core::state::GameStateSnapshot;
use riverlight_core::types::SimTime;

use crate::levels;
use crate::physics::PhysicsWorld;
use crate::registry::{EnemyRoster, TetherRegistry};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// Level to populate. Kept by the engine so `ResetLevel` can
    /// repopulate from the same records.
    pub level: LevelConfig,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            level: levels::river_course(),
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    physics: PhysicsWorld,
    tethers: TetherRegistry,
    enemies: EnemyRoster,
    level: LevelConfig,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    command_queue: VecDeque<PlayerCommand>,
    /// Latest sampled input; the axis persists across ticks, the toggle
    /// is consumed on the tick it fires.
    pending_input: InputFrame,
    events: Vec<GameEvent>,
    last_error: Option<SimError>,
    setup_errors: Vec<SimError>,
}

impl SimulationEngine {
    /// Create a new engine and populate the level. Configuration
    /// problems are recoverable; they are logged once here and kept for
    /// inspection, and the affected agents fall back as documented.
    pub fn new(config: SimConfig) -> Self {
        let setup_errors = config.level.validate();
        for err in &setup_errors {
            warn!(error = %err, "level_configuration_problem");
        }

        let mut world = World::new();
        let mut physics = PhysicsWorld::new();
        let entities = world_setup::setup_level(&mut world, &mut physics, &config.level);
        info!(
            level = %config.level.name,
            tethers = entities.tethers.len(),
            enemies = entities.enemies.len(),
            "level_populated"
        );

        Self {
            world,
            physics,
            tethers: entities.tethers,
            enemies: entities.enemies,
            level: config.level,
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            command_queue: VecDeque::new(),
            pending_input: InputFrame::default(),
            events: Vec::new(),
            last_error: None,
            setup_errors,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.last_error = None;
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            &self.tethers,
            &self.enemies,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Error raised by the most recent tick, if any.
    pub fn last_error(&self) -> Option<SimError> {
        self.last_error
    }

    /// Configuration problems found when the level was populated.
    pub fn setup_errors(&self) -> &[SimError] {
        &self.setup_errors
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current camera rig state (for tests; snapshots omit the ramp speed).
    #[cfg(test)]
    pub fn camera_rig(&self) -> Option<riverlight_core::components::CameraRig> {
        self.world
            .query::<&riverlight_core::components::CameraRig>()
            .iter()
            .next()
            .map(|(_, rig)| rig.clone())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Input {
                axis,
                tether_toggled,
            } => {
                let frame = InputFrame {
                    axis,
                    tether_toggled,
                }
                .sanitized();
                // Last axis wins; toggle edges accumulate until consumed.
                self.pending_input.axis = frame.axis;
                self.pending_input.tether_toggled |= frame.tether_toggled;
            }
            PlayerCommand::Start => {
                if self.phase == GamePhase::Ready {
                    self.phase = GamePhase::Active;
                    info!("simulation_started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ResetLevel => {
                self.reset_level();
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
        }
    }

    /// Tear down and repopulate the level from the stored records, then
    /// go straight to Active.
    fn reset_level(&mut self) {
        self.world = World::new();
        self.physics = PhysicsWorld::new();
        let entities = world_setup::setup_level(&mut self.world, &mut self.physics, &self.level);
        self.tethers = entities.tethers;
        self.enemies = entities.enemies;
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.pending_input = InputFrame::default();
        self.events.clear();
        self.last_error = None;
        info!(level = %self.level.name, "level_reset");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let input = self.pending_input;
        self.pending_input.tether_toggled = false;

        // 1. Tether engagement and player movement
        if let Err(err) = systems::player_orbit::run(
            &mut self.world,
            &mut self.physics,
            &self.tethers,
            &input,
            &mut self.events,
        ) {
            debug!(error = %err, "tether_toggle_rejected");
            self.last_error = Some(err);
        }
        // 2. Enemy behavior
        systems::enemies::run(
            &mut self.world,
            &mut self.physics,
            &self.tethers,
            &self.enemies,
            &mut self.events,
        );
        // 3. Camera tracking
        systems::camera::run(&mut self.world, &self.tethers);
        // 4. Physics step
        let contacts = self.physics.step_with_events();
        // 5. Write body state back to components
        systems::physics_sync::run(&mut self.world, &self.physics);
        // 6. Player-enemy contact resolution
        self.handle_contacts(contacts);
    }

    /// Fail the level when an enemy body touches the player. Sensor
    /// intersections and enemy-enemy pairs fall through the roster check.
    fn handle_contacts(&mut self, contacts: Vec<CollisionEvent>) {
        if contacts.is_empty() {
            return;
        }
        let Some(player) = self.player_entity() else {
            return;
        };
        for event in contacts {
            let CollisionEvent::Started(h1, h2, _) = event else {
                continue;
            };
            let Some(e1) = self.physics.entity_of_collider(h1) else {
                continue;
            };
            let Some(e2) = self.physics.entity_of_collider(h2) else {
                continue;
            };
            let other = if e1 == player {
                e2
            } else if e2 == player {
                e1
            } else {
                continue;
            };
            let Some(index) = self.enemies.index_of(other) else {
                continue;
            };
            self.events.push(GameEvent::PlayerCaught { enemy: index });
            info!(enemy = index, tick = self.time.tick, "player_caught");
            self.phase = GamePhase::Failed;
        }
    }

    fn player_entity(&self) -> Option<hecs::Entity> {
        self.world
            .query::<&Player>()
            .iter()
            .next()
            .map(|(entity, _)| entity)
    }
}

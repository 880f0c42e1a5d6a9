//! Physics integration built on `Rapier2D` with deterministic behavior.
//!
//! The playfield is top-down, so gravity is zero; bodies move only under
//! the velocities and forces the controllers issue. Collision events are
//! collected through a channel during the step and drained afterward, so
//! no callback ever runs mid-update.

use std::fmt;

use std::sync::mpsc;

use hecs::Entity;
use rapier2d::prelude::*;
use serde::{Deserialize, Serialize};

use riverlight_core::constants::DT;

/// Component linking an entity to its rigid body.
#[derive(Debug, Clone, Copy)]
pub struct BodyRef(pub RigidBodyHandle);

/// Physics world containing all `Rapier2D` components for deterministic
/// simulation.
#[derive(Serialize, Deserialize)]
pub struct PhysicsWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    #[serde(skip, default = "PhysicsPipeline::new")]
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub gravity: Vector,
    pub frame: u64,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PhysicsWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsWorld")
            .field("frame", &self.frame)
            .field("rigid_body_count", &self.rigid_body_set.len())
            .field("collider_count", &self.collider_set.len())
            .finish_non_exhaustive()
    }
}

impl PhysicsWorld {
    /// Creates a new physics world stepping at the simulation tick rate.
    pub fn new() -> Self {
        let integration_parameters = IntegrationParameters {
            dt: DT,
            ..Default::default()
        };

        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: Vector::new(0.0, 0.0),
            frame: 0,
        }
    }

    /// Advances the simulation by one fixed timestep and returns the
    /// collision events it produced, in channel order.
    pub fn step_with_events(&mut self) -> Vec<CollisionEvent> {
        let (collision_send, collision_recv) = mpsc::channel();
        let (contact_force_send, _contact_force_recv) = mpsc::channel();
        let event_collector = ChannelEventCollector::new(collision_send, contact_force_send);

        self.physics_pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            &(),
            &event_collector,
        );
        self.frame += 1;

        collision_recv.try_iter().collect()
    }

    /// Adds a rigid body to the world and returns its handle.
    pub fn add_rigid_body(&mut self, rigid_body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(rigid_body)
    }

    /// Adds a collider attached to a rigid body.
    pub fn add_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set)
    }

    /// Adds a collider without a parent (fixed sensor).
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Gets an immutable reference to a rigid body.
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Gets a mutable reference to a rigid body.
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Maps a collider back to the entity tagged in `user_data`, stored on
    /// the collider's parent body or on the collider itself. Zero means
    /// untagged.
    pub fn entity_of_collider(&self, handle: ColliderHandle) -> Option<Entity> {
        let collider = self.collider_set.get(handle)?;
        let user_data = if let Some(parent) = collider.parent() {
            self.rigid_body_set.get(parent)?.user_data
        } else {
            collider.user_data
        };

        if user_data == 0 {
            return None;
        }
        Entity::from_bits(user_data as u64)
    }

    /// Tags a body so its colliders map back to `entity`.
    pub fn tag_rigid_body(&mut self, handle: RigidBodyHandle, entity: Entity) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.user_data = u128::from(entity.to_bits().get());
        }
    }
}

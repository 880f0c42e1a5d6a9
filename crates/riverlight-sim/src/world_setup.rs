//! Entity spawn factories for populating a level.
//!
//! Spawns tethers, the player, enemies and the camera rig with their
//! component bundles and physics bodies. Tethers come first so that
//! registry order matches the level's record order.

use glam::Vec2;
use hecs::World;
use rapier2d::prelude::*;

use riverlight_core::components::{CameraRig, Enemy, Player, Tether};
use riverlight_core::constants::{ENEMY_BODY_RADIUS, ORBIT_RADIUS, PLAYER_BODY_RADIUS, PLAYER_THRUST};
use riverlight_core::enums::{EnemyState, OrbitDirection, PlayerTetherState};
use riverlight_core::level::{EnemySpec, LevelConfig, TetherSpec};
use riverlight_core::types::{Position, TetherId};

use crate::physics::{BodyRef, PhysicsWorld};
use crate::registry::{EnemyRoster, TetherRegistry};

/// Handles the engine keeps outside the ECS world.
#[derive(Debug, Default)]
pub struct LevelEntities {
    pub tethers: TetherRegistry,
    pub enemies: EnemyRoster,
}

/// Populate a level: tethers first (their registration order defines
/// `TetherId`), then the player, the enemies, and the camera.
pub fn setup_level(
    world: &mut World,
    physics: &mut PhysicsWorld,
    level: &LevelConfig,
) -> LevelEntities {
    let mut entities = LevelEntities::default();

    for spec in &level.tethers {
        let entity = spawn_tether(world, physics, spec);
        entities.tethers.register(entity);
    }

    spawn_player(world, physics, level.player_start);

    for spec in &level.enemies {
        let entity = spawn_enemy(world, physics, spec, entities.tethers.len());
        entities.enemies.register(entity);
    }

    spawn_camera(world, level.player_start);

    entities
}

/// Spawn a tether anchor with a parentless sensor collider marking its
/// capture range.
pub fn spawn_tether(
    world: &mut World,
    physics: &mut PhysicsWorld,
    spec: &TetherSpec,
) -> hecs::Entity {
    let entity = world.spawn((
        Tether {
            kind: spec.kind,
            sensor_radius: spec.sensor_radius,
            orbit_radius: ORBIT_RADIUS,
            charge: 0.0,
            entry_point: None,
            pass_registered: false,
        },
        Position(spec.position),
    ));

    let collider = ColliderBuilder::ball(spec.sensor_radius)
        .translation(Vector::new(spec.position.x, spec.position.y))
        .sensor(true)
        .user_data(u128::from(entity.to_bits().get()))
        .build();
    physics.add_static_collider(collider);

    entity
}

/// Spawn the player's dynamic body. Rotation is locked; facing is game
/// state, not physics state.
pub fn spawn_player(world: &mut World, physics: &mut PhysicsWorld, start: Vec2) -> hecs::Entity {
    let body = RigidBodyBuilder::dynamic()
        .translation(Vector::new(start.x, start.y))
        .lock_rotations()
        .build();
    let handle = physics.add_rigid_body(body);
    physics.add_collider(
        ColliderBuilder::ball(PLAYER_BODY_RADIUS)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build(),
        handle,
    );

    let entity = world.spawn((
        Player {
            tether_state: PlayerTetherState::Free,
            bound_tether: None,
            tether_armed: false,
            approach_tether: None,
            approach_point: None,
            orientation: 0.0,
            thrust: PLAYER_THRUST,
            orbit_angle: 0.0,
            orbit_direction: OrbitDirection::CounterClockwise,
        },
        Position(start),
        BodyRef(handle),
    ));
    physics.tag_rigid_body(handle, entity);
    entity
}

/// Spawn an enemy with a kinematic body that follows the computed patrol
/// position. An unresolvable guard reference is dropped here (validation
/// reports it); the enemy then never flees.
pub fn spawn_enemy(
    world: &mut World,
    physics: &mut PhysicsWorld,
    spec: &EnemySpec,
    tether_count: usize,
) -> hecs::Entity {
    let guard_tether = spec
        .guard_tether
        .filter(|&guard| guard < tether_count)
        .map(TetherId);

    let goal = spec.patrol_points.first().copied().unwrap_or(spec.position);
    let orientation = if spec.patrol_points.len() >= 2 && goal != spec.position {
        Position(spec.position).heading_to(&Position(goal))
    } else {
        0.0
    };

    let body = RigidBodyBuilder::kinematic_position_based()
        .translation(Vector::new(spec.position.x, spec.position.y))
        .build();
    let handle = physics.add_rigid_body(body);
    physics.add_collider(
        ColliderBuilder::ball(ENEMY_BODY_RADIUS)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build(),
        handle,
    );

    let entity = world.spawn((
        Enemy {
            state: EnemyState::Patrol,
            goal,
            patrol_points: spec.patrol_points.clone(),
            patrol_index: 0,
            orientation,
            guard_tether,
        },
        Position(spec.position),
        BodyRef(handle),
    ));
    physics.tag_rigid_body(handle, entity);
    entity
}

/// Spawn the follow camera at the player start with zero speed.
pub fn spawn_camera(world: &mut World, start: Vec2) -> hecs::Entity {
    world.spawn((CameraRig {
        position: start,
        current_speed: 0.0,
        zoomed: false,
    },))
}

//! Tether engagement and player movement control.
//!
//! Drives the player's free/orbiting state machine: arming a tether,
//! steering the tangent approach, capture, per-frame circular travel
//! with charge accrual on lanterns, and release back to free roam. The
//! system only issues velocity and force requests; integration stays in
//! the physics step.

use glam::Vec2;
use hecs::{Entity, World};
use rapier2d::prelude::{RigidBodyHandle, Vector};
use tracing::debug;

use riverlight_core::commands::InputFrame;
use riverlight_core::components::{CameraRig, Player, Tether};
use riverlight_core::constants::{
    CAMERA_REENGAGE_SPEED, CAPTURE_TOLERANCE_SQ, CHARGE_PER_PASS, DT, FREE_SPEED_FACTOR,
    LIT_THRESHOLD, PASS_BAND_HALF_WIDTH, PLAYER_BASE_SPEED,
};
use riverlight_core::enums::{PlayerTetherState, TetherKind};
use riverlight_core::errors::SimError;
use riverlight_core::events::GameEvent;
use riverlight_core::types::{Position, TetherId};

use crate::orbit;
use crate::physics::{BodyRef, PhysicsWorld};
use crate::registry::TetherRegistry;

/// Apply one frame of tether logic and player movement.
///
/// Toggle edges are handled first so the motion update below always acts
/// on the post-toggle engagement. Returns an error only when an arm
/// attempt finds no tether to bind; the player keeps free-roaming in
/// that case.
pub fn run(
    world: &mut World,
    physics: &mut PhysicsWorld,
    tethers: &TetherRegistry,
    input: &InputFrame,
    events: &mut Vec<GameEvent>,
) -> Result<(), SimError> {
    let Some((player_entity, body_handle)) = find_player(world) else {
        return Ok(());
    };
    let Some((position, velocity)) = read_body(physics, body_handle) else {
        return Ok(());
    };

    let toggled = if input.tether_toggled {
        handle_toggle(world, tethers, player_entity, position, velocity, events)
    } else {
        Ok(())
    };

    update_motion(
        world,
        physics,
        tethers,
        player_entity,
        body_handle,
        position,
        velocity,
        input,
        events,
    );

    toggled
}

fn find_player(world: &World) -> Option<(Entity, RigidBodyHandle)> {
    world
        .query::<(&Player, &BodyRef)>()
        .iter()
        .next()
        .map(|(entity, (_, body))| (entity, body.0))
}

fn read_body(physics: &PhysicsWorld, handle: RigidBodyHandle) -> Option<(Vec2, Vec2)> {
    let body = physics.get_rigid_body(handle)?;
    Some((
        Vec2::new(body.translation().x, body.translation().y),
        Vec2::new(body.linvel().x, body.linvel().y),
    ))
}

fn read_anchor(world: &World, tether_entity: Entity) -> Option<(Vec2, f32)> {
    let position = world.get::<&Position>(tether_entity).ok()?;
    let tether = world.get::<&Tether>(tether_entity).ok()?;
    Some((position.0, tether.orbit_radius))
}

/// Process a tether-toggle edge: disarm when engaged, otherwise arm the
/// nearest tether and fix the tangent point the approach will steer to.
fn handle_toggle(
    world: &mut World,
    tethers: &TetherRegistry,
    player_entity: Entity,
    position: Vec2,
    velocity: Vec2,
    events: &mut Vec<GameEvent>,
) -> Result<(), SimError> {
    // Any toggle re-engages the camera at its floor speed, even when the
    // arm attempt below fails.
    for (_, rig) in world.query_mut::<&mut CameraRig>() {
        rig.current_speed = CAMERA_REENGAGE_SPEED;
    }

    let armed = match world.get::<&Player>(player_entity) {
        Ok(player) => player.tether_armed,
        Err(_) => return Ok(()),
    };

    if armed {
        release(world, tethers, player_entity, events);
        return Ok(());
    }

    let (id, tether_entity) = tethers.nearest(world, position)?;
    let (center, radius) = match read_anchor(world, tether_entity) {
        Some(anchor) => anchor,
        None => return Ok(()),
    };
    let tangent = orbit::initial_tangent_point(position, velocity, center, radius);

    if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
        player.tether_armed = true;
        player.approach_tether = Some(id);
        player.approach_point = Some(tangent);
    }
    debug!(tether = id.0, "tether_armed");
    Ok(())
}

/// Drop the current engagement and return the player to free movement.
fn release(
    world: &mut World,
    tethers: &TetherRegistry,
    player_entity: Entity,
    events: &mut Vec<GameEvent>,
) {
    let (state, bound, approach) = match world.get::<&Player>(player_entity) {
        Ok(player) => (
            player.tether_state,
            player.bound_tether,
            player.approach_tether,
        ),
        Err(_) => return,
    };

    // Reset pass bookkeeping on the tether that held the engagement so a
    // later re-capture starts a fresh entry.
    if let Some(id) = bound.or(approach) {
        if let Some(entity) = tethers.get(id) {
            if let Ok(mut tether) = world.get::<&mut Tether>(entity) {
                tether.entry_point = None;
                tether.pass_registered = false;
            }
        }
    }

    if state == PlayerTetherState::Orbiting {
        if let Some(id) = bound {
            events.push(GameEvent::OrbitReleased { tether: id });
            debug!(tether = id.0, "orbit_released");
        }
    }

    if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
        player.tether_state = PlayerTetherState::Free;
        player.bound_tether = None;
        player.tether_armed = false;
        player.approach_tether = None;
        player.approach_point = None;
    }
}

#[allow(clippy::too_many_arguments)]
fn update_motion(
    world: &mut World,
    physics: &mut PhysicsWorld,
    tethers: &TetherRegistry,
    player_entity: Entity,
    body_handle: RigidBodyHandle,
    position: Vec2,
    velocity: Vec2,
    input: &InputFrame,
    events: &mut Vec<GameEvent>,
) {
    let (state, armed, approach_tether, approach_point) =
        match world.get::<&Player>(player_entity) {
            Ok(player) => (
                player.tether_state,
                player.tether_armed,
                player.approach_tether,
                player.approach_point,
            ),
            Err(_) => return,
        };

    if state == PlayerTetherState::Orbiting {
        orbit_update(world, physics, tethers, player_entity, body_handle, position, events);
    } else if armed {
        approach_update(
            world,
            physics,
            tethers,
            player_entity,
            body_handle,
            position,
            velocity,
            approach_tether,
            approach_point,
            events,
        );
    } else {
        free_update(world, physics, player_entity, body_handle, input);
    }
}

/// Steer toward the fixed tangent point; capture once inside tolerance.
#[allow(clippy::too_many_arguments)]
fn approach_update(
    world: &mut World,
    physics: &mut PhysicsWorld,
    tethers: &TetherRegistry,
    player_entity: Entity,
    body_handle: RigidBodyHandle,
    position: Vec2,
    velocity: Vec2,
    approach_tether: Option<TetherId>,
    approach_point: Option<Vec2>,
    events: &mut Vec<GameEvent>,
) {
    let (Some(id), Some(target)) = (approach_tether, approach_point) else {
        return;
    };

    if position.distance_squared(target) < CAPTURE_TOLERANCE_SQ {
        capture(
            world,
            physics,
            tethers,
            player_entity,
            body_handle,
            id,
            position,
            velocity,
            events,
        );
        return;
    }

    let speed = PLAYER_BASE_SPEED * FREE_SPEED_FACTOR;
    let request = orbit::approach_velocity(position, target, speed, DT);
    if let Some(body) = physics.get_rigid_body_mut(body_handle) {
        body.reset_forces(true);
        body.set_linvel(Vector::new(request.x, request.y), true);
    }
}

/// Bind the player to `id` and run the first orbiting frame in place, so
/// the capture frame already travels the circle and counts for charge.
#[allow(clippy::too_many_arguments)]
fn capture(
    world: &mut World,
    physics: &mut PhysicsWorld,
    tethers: &TetherRegistry,
    player_entity: Entity,
    body_handle: RigidBodyHandle,
    id: TetherId,
    position: Vec2,
    velocity: Vec2,
    events: &mut Vec<GameEvent>,
) {
    let Some(tether_entity) = tethers.get(id) else {
        return;
    };
    let center = match world.get::<&Position>(tether_entity) {
        Ok(pos) => pos.0,
        Err(_) => return,
    };

    let direction = orbit::orbit_direction(position, velocity, center);
    let angle = orbit::angle_on_circle(center, position);

    if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
        player.tether_state = PlayerTetherState::Orbiting;
        player.bound_tether = Some(id);
        player.orbit_angle = angle;
        player.orbit_direction = direction;
    }
    events.push(GameEvent::OrbitCaptured { tether: id });
    debug!(tether = id.0, direction = ?direction, "orbit_captured");

    orbit_update(world, physics, tethers, player_entity, body_handle, position, events);
}

/// Advance the orbit by one frame: step the angle, request the chord
/// velocity that lands exactly on the next circle point, and accrue
/// charge when the bound tether is a lantern.
fn orbit_update(
    world: &mut World,
    physics: &mut PhysicsWorld,
    tethers: &TetherRegistry,
    player_entity: Entity,
    body_handle: RigidBodyHandle,
    position: Vec2,
    events: &mut Vec<GameEvent>,
) {
    let (id, angle, direction) = match world.get::<&Player>(player_entity) {
        Ok(player) => match player.bound_tether {
            Some(id) => (id, player.orbit_angle, player.orbit_direction),
            None => return,
        },
        Err(_) => return,
    };
    let Some(tether_entity) = tethers.get(id) else {
        return;
    };
    let (center, radius, kind) = {
        let center = match world.get::<&Position>(tether_entity) {
            Ok(pos) => pos.0,
            Err(_) => return,
        };
        let tether = match world.get::<&Tether>(tether_entity) {
            Ok(tether) => tether,
            Err(_) => return,
        };
        (center, tether.orbit_radius, tether.kind)
    };

    let next_angle = orbit::advance_angle(angle, direction, DT);
    let next_position = orbit::orbit_position(center, radius, next_angle);
    let request = orbit::chord_velocity(position, next_position, DT);

    if let Some(body) = physics.get_rigid_body_mut(body_handle) {
        body.reset_forces(true);
        body.set_linvel(Vector::new(request.x, request.y), true);
    }
    if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
        player.orbit_angle = next_angle;
    }

    if kind == TetherKind::Lantern {
        accrue_charge(world, tether_entity, id, position, events);
    }
}

/// One-dimensional pass detection: a pass registers when the player's x
/// re-enters the band around the entry x, once per band crossing.
fn accrue_charge(
    world: &mut World,
    tether_entity: Entity,
    id: TetherId,
    position: Vec2,
    events: &mut Vec<GameEvent>,
) {
    let Ok(mut tether) = world.get::<&mut Tether>(tether_entity) else {
        return;
    };
    let entry = match tether.entry_point {
        Some(entry) => entry,
        None => {
            tether.entry_point = Some(position);
            position
        }
    };

    let in_band = (position.x - entry.x).abs() <= PASS_BAND_HALF_WIDTH;
    if in_band && !tether.pass_registered {
        let was_lit = tether.charge > LIT_THRESHOLD;
        tether.charge += CHARGE_PER_PASS;
        tether.pass_registered = true;
        events.push(GameEvent::PassCompleted {
            tether: id,
            charge: tether.charge,
        });
        debug!(tether = id.0, charge = tether.charge, "pass_completed");
        if !was_lit && tether.charge > LIT_THRESHOLD {
            events.push(GameEvent::TetherLit { tether: id });
            debug!(tether = id.0, "tether_lit");
        }
    } else if !in_band {
        tether.pass_registered = false;
    }
}

/// Free roam: input thrust turns the heading while the speed stays
/// pinned to the free-roam constant.
fn free_update(
    world: &mut World,
    physics: &mut PhysicsWorld,
    player_entity: Entity,
    body_handle: RigidBodyHandle,
    input: &InputFrame,
) {
    let thrust = match world.get::<&Player>(player_entity) {
        Ok(player) => player.thrust,
        Err(_) => return,
    };
    let Some(body) = physics.get_rigid_body_mut(body_handle) else {
        return;
    };

    body.reset_forces(true);
    if input.axis.length_squared() > f32::EPSILON {
        let force = input.axis * thrust;
        body.add_force(Vector::new(force.x, force.y), true);
    }

    let linvel = body.linvel();
    let speed_sq = linvel.x * linvel.x + linvel.y * linvel.y;
    if speed_sq > f32::EPSILON {
        let scale = PLAYER_BASE_SPEED * FREE_SPEED_FACTOR / speed_sq.sqrt();
        body.set_linvel(Vector::new(linvel.x * scale, linvel.y * scale), true);
    }
}

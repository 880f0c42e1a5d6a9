//! Camera tracking system.
//!
//! The rig pursues either the player or the engaged tether, ramping its
//! speed each frame and never overshooting the target. Zoom is binary:
//! wide while engaged with a tether, tight otherwise.

use glam::Vec2;
use hecs::World;

use riverlight_core::components::{CameraRig, Player};
use riverlight_core::constants::{
    CAMERA_ACCELERATION, CAMERA_MAX_SPEED, CAPTURE_TOLERANCE_SQ, DT,
};
use riverlight_core::enums::PlayerTetherState;
use riverlight_core::types::Position;

use crate::registry::TetherRegistry;

/// Advance the rig one frame toward its current target.
pub fn run(world: &mut World, tethers: &TetherRegistry) {
    let focus = {
        let mut query = world.query::<(&Player, &Position)>();
        let Some((_, (player, position))) = query.iter().next() else {
            return;
        };

        let captured = player.tether_state == PlayerTetherState::Orbiting;
        let at_tangent = player.tether_armed
            && player.approach_point.is_some_and(|point| {
                position.0.distance_squared(point) < CAPTURE_TOLERANCE_SQ
            });

        let engaged = if captured {
            player.bound_tether
        } else if at_tangent {
            player.approach_tether
        } else {
            None
        };
        (position.0, player.tether_armed, engaged)
    };
    let (player_position, armed, engaged) = focus;

    let tether_position = engaged
        .and_then(|id| tethers.get(id))
        .and_then(|entity| world.get::<&Position>(entity).ok().map(|p| p.0));

    // Engaged: frame the tether at half speed, zoomed out. Otherwise
    // chase the player, at full speed only while an approach is armed.
    let (target, half_speed, zoomed) = match tether_position {
        Some(position) => (position, true, true),
        None => (player_position, !armed, false),
    };

    for (_, rig) in world.query_mut::<&mut CameraRig>() {
        rig.current_speed = (rig.current_speed + CAMERA_ACCELERATION).min(CAMERA_MAX_SPEED);
        let pursuit = if half_speed {
            rig.current_speed / 2.0
        } else {
            rig.current_speed
        };
        rig.position = advance_toward(rig.position, target, pursuit * DT);
        rig.zoomed = zoomed;
    }
}

/// Move `from` toward `to` by at most `step`, landing exactly on the
/// target when it is within reach.
pub fn advance_toward(from: Vec2, to: Vec2, step: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= step || distance <= f32::EPSILON {
        to
    } else {
        from + delta / distance * step
    }
}

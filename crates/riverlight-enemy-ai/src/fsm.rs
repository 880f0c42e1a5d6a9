//! Enemy behavior finite state machine.
//!
//! Pure functions that compute patrol/flee transitions and the next
//! position for enemy agents. No ECS or physics dependency — operates on
//! plain data. Position integrates directly toward the goal by a fixed
//! per-frame step, so segments are straight and constant-speed regardless
//! of what the rigid-body world is doing.

use glam::Vec2;

use riverlight_core::enums::EnemyState;

use crate::profiles::default_profile;

/// Input to the enemy FSM for a single agent.
pub struct EnemyContext<'a> {
    pub state: EnemyState,
    pub position: Vec2,
    pub goal: Vec2,
    /// Waypoints cycled while patrolling.
    pub patrol_points: &'a [Vec2],
    /// Index of the waypoint the current goal was taken from.
    pub patrol_index: usize,
    pub orientation: f32,
    /// Whether the guard tether's charge is past the lit threshold this
    /// frame. False when no guard resolves.
    pub guard_lit: bool,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub new_position: Vec2,
    pub new_goal: Vec2,
    pub new_patrol_index: usize,
    pub new_orientation: f32,
    pub state_changed: bool,
}

/// Evaluate the FSM for one enemy. Returns the updated state and motion.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    match ctx.state {
        EnemyState::Patrol => evaluate_patrol(ctx),
        EnemyState::Flee => evaluate_flee(ctx),
    }
}

fn evaluate_patrol(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = default_profile();

    // A lit guard breaks the patrol immediately: head off-stage.
    if ctx.guard_lit {
        let goal = profile.flee_goal;
        return EnemyUpdate {
            new_state: EnemyState::Flee,
            new_position: step_towards(ctx.position, goal, profile.step),
            new_goal: goal,
            new_patrol_index: ctx.patrol_index,
            new_orientation: heading_towards(ctx.position, goal),
            state_changed: true,
        };
    }

    // Too few waypoints: hold position in Patrol.
    if ctx.patrol_points.len() < 2 {
        return EnemyUpdate {
            new_state: ctx.state,
            new_position: ctx.position,
            new_goal: ctx.goal,
            new_patrol_index: ctx.patrol_index,
            new_orientation: ctx.orientation,
            state_changed: false,
        };
    }

    // Within the arrival band on both axes: advance to the next waypoint
    // (wrapping) and reorient toward it.
    let (goal, index, orientation) = if at_goal(ctx.position, ctx.goal, profile.arrival_band) {
        let next = (ctx.patrol_index + 1) % ctx.patrol_points.len();
        let goal = ctx.patrol_points[next];
        (goal, next, heading_towards(ctx.position, goal))
    } else {
        (ctx.goal, ctx.patrol_index, ctx.orientation)
    };

    EnemyUpdate {
        new_state: EnemyState::Patrol,
        new_position: step_towards(ctx.position, goal, profile.step),
        new_goal: goal,
        new_patrol_index: index,
        new_orientation: orientation,
        state_changed: false,
    }
}

/// Flee is a sink state: keep stepping toward the off-stage goal. The
/// guard condition is never re-evaluated.
fn evaluate_flee(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = default_profile();
    EnemyUpdate {
        new_state: EnemyState::Flee,
        new_position: step_towards(ctx.position, ctx.goal, profile.step),
        new_goal: ctx.goal,
        new_patrol_index: ctx.patrol_index,
        new_orientation: ctx.orientation,
        state_changed: false,
    }
}

/// True when `position` is within `band` of `goal` on both axes.
fn at_goal(position: Vec2, goal: Vec2, band: f32) -> bool {
    (position.x - goal.x).abs() <= band && (position.y - goal.y).abs() <= band
}

/// Advance `step` world units straight toward `goal`. No overshoot
/// handling: the arrival band is wider than one step on every axis.
fn step_towards(position: Vec2, goal: Vec2, step: f32) -> Vec2 {
    position + (goal - position).normalize_or_zero() * step
}

/// Heading from `position` toward `goal` (radians, atan2 convention).
fn heading_towards(position: Vec2, goal: Vec2) -> f32 {
    let d = goal - position;
    d.y.atan2(d.x)
}

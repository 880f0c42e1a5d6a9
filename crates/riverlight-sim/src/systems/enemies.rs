//! Enemy behavior system.
//!
//! Evaluates the patrol/flee state machine for every enemy in roster
//! order, writes the results back, and carries each kinematic body along
//! so collision geometry matches the authored position.

use hecs::{Entity, World};
use rapier2d::prelude::Vector;
use tracing::debug;

use riverlight_core::components::{Enemy, Tether};
use riverlight_core::constants::LIT_THRESHOLD;
use riverlight_core::events::GameEvent;
use riverlight_core::types::Position;

use riverlight_enemy_ai::fsm::{self, EnemyContext};

use crate::physics::{BodyRef, PhysicsWorld};
use crate::registry::{EnemyRoster, TetherRegistry};

/// Run the behavior update for every enemy, in registration order so
/// guard checks and fled events come out the same every run.
pub fn run(
    world: &mut World,
    physics: &mut PhysicsWorld,
    tethers: &TetherRegistry,
    roster: &EnemyRoster,
    events: &mut Vec<GameEvent>,
) {
    for (index, entity) in roster.iter() {
        let guard_lit = guard_is_lit(world, tethers, entity);

        let update = {
            let Ok(enemy) = world.get::<&Enemy>(entity) else {
                continue;
            };
            let Ok(position) = world.get::<&Position>(entity) else {
                continue;
            };
            let ctx = EnemyContext {
                state: enemy.state,
                position: position.0,
                goal: enemy.goal,
                patrol_points: &enemy.patrol_points,
                patrol_index: enemy.patrol_index,
                orientation: enemy.orientation,
                guard_lit,
            };
            fsm::evaluate(&ctx)
        };

        if update.state_changed {
            events.push(GameEvent::EnemyFled { enemy: index });
            debug!(enemy = index, "enemy_fled");
        }

        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.state = update.new_state;
            enemy.goal = update.new_goal;
            enemy.patrol_index = update.new_patrol_index;
            enemy.orientation = update.new_orientation;
        }
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            position.0 = update.new_position;
        }

        if let Ok(body_ref) = world.get::<&BodyRef>(entity) {
            if let Some(body) = physics.get_rigid_body_mut(body_ref.0) {
                body.set_next_kinematic_translation(Vector::new(
                    update.new_position.x,
                    update.new_position.y,
                ));
            }
        }
    }
}

/// Whether the enemy's guard tether is lit this frame. Unguarded enemies
/// and dangling guard references read as unlit.
fn guard_is_lit(world: &World, tethers: &TetherRegistry, entity: Entity) -> bool {
    let guard = match world.get::<&Enemy>(entity) {
        Ok(enemy) => enemy.guard_tether,
        Err(_) => None,
    };
    let Some(id) = guard else {
        return false;
    };
    let Some(tether_entity) = tethers.get(id) else {
        return false;
    };
    match world.get::<&Tether>(tether_entity) {
        Ok(tether) => tether.charge > LIT_THRESHOLD,
        Err(_) => false,
    }
}

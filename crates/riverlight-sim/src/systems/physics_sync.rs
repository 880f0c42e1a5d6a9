//! Propagates rigid-body state back into components after the physics
//! step. Dynamic bodies own their motion, so their Position comes from
//! the body; kinematic enemies are authored by the behavior system and
//! already current.

use glam::Vec2;
use hecs::World;

use riverlight_core::components::Player;
use riverlight_core::types::Position;

use crate::physics::{BodyRef, PhysicsWorld};

pub fn run(world: &mut World, physics: &PhysicsWorld) {
    for (_, (body_ref, position, player)) in
        world.query_mut::<(&BodyRef, &mut Position, Option<&mut Player>)>()
    {
        let Some(body) = physics.get_rigid_body(body_ref.0) else {
            continue;
        };
        if !body.is_dynamic() {
            continue;
        }
        position.0 = Vec2::new(body.translation().x, body.translation().y);

        // Facing follows travel; a stationary body keeps its last heading.
        if let Some(player) = player {
            let linvel = body.linvel();
            if linvel.x * linvel.x + linvel.y * linvel.y > f32::EPSILON {
                player.orientation = linvel.y.atan2(linvel.x);
            }
        }
    }
}

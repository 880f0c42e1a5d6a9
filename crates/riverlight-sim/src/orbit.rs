//! Orbit geometry for tether capture and circular travel.
//!
//! Provides the initial tangent point for the approach path, orbit
//! direction resolution from the capture velocity, and the per-frame
//! positions along the circle. All functions are pure.

use glam::Vec2;

use riverlight_core::constants::ORBIT_ANGULAR_SPEED;
use riverlight_core::enums::OrbitDirection;

/// Point on the orbit circle closest to the forward ray along the
/// player's velocity.
///
/// Projects the circle's center onto the ray from `position` along
/// `velocity` (clamped so points behind the player are ignored), then
/// pushes the projection out to the circle. If the ray passes through
/// the center, or the player is not moving, the point on the circle
/// closest to the player is used instead.
pub fn initial_tangent_point(position: Vec2, velocity: Vec2, center: Vec2, radius: f32) -> Vec2 {
    let ray_point = if velocity.length_squared() > f32::EPSILON {
        let forward = velocity.normalize();
        position + forward * (center - position).dot(forward).max(0.0)
    } else {
        position
    };

    let offset = ray_point - center;
    if offset.length_squared() > f32::EPSILON {
        center + offset.normalize() * radius
    } else {
        center + (position - center).normalize_or(Vec2::X) * radius
    }
}

/// Direction of travel fixed at capture, from the sign of the cross
/// product of (player - center) and the capture velocity. A zero cross
/// (radial capture) defaults counter-clockwise.
pub fn orbit_direction(position: Vec2, velocity: Vec2, center: Vec2) -> OrbitDirection {
    if (position - center).perp_dot(velocity) < 0.0 {
        OrbitDirection::Clockwise
    } else {
        OrbitDirection::CounterClockwise
    }
}

/// Angle of `position` on the circle around `center`, in radians.
pub fn angle_on_circle(center: Vec2, position: Vec2) -> f32 {
    let rel = position - center;
    rel.y.atan2(rel.x)
}

/// Point on the circle at `angle`.
pub fn orbit_position(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::from_angle(angle) * radius
}

/// Advances an orbit angle by one frame, signed by direction, wrapped to
/// [0, TAU).
pub fn advance_angle(angle: f32, direction: OrbitDirection, dt: f32) -> f32 {
    let angular = match direction {
        OrbitDirection::CounterClockwise => ORBIT_ANGULAR_SPEED,
        OrbitDirection::Clockwise => -ORBIT_ANGULAR_SPEED,
    };
    (angle + angular * dt).rem_euclid(std::f32::consts::TAU)
}

/// Velocity that steers toward `target` at `speed`, magnitude limited so
/// one frame of integration cannot overshoot. The final frame lands
/// exactly on the target.
pub fn approach_velocity(position: Vec2, target: Vec2, speed: f32, dt: f32) -> Vec2 {
    let to_target = target - position;
    let distance = to_target.length();
    if distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    to_target / distance * speed.min(distance / dt)
}

/// Velocity along the chord between the current and next orbit position,
/// so integration lands the body exactly on the circle.
pub fn chord_velocity(position: Vec2, next: Vec2, dt: f32) -> Vec2 {
    (next - position) / dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverlight_core::constants::{DT, ORBIT_RADIUS, ORBIT_SPEED_FACTOR, PLAYER_BASE_SPEED};

    #[test]
    fn test_tangent_point_on_offset_ray() {
        // Player travelling east along the x axis, circle centered above it.
        let point = initial_tangent_point(
            Vec2::new(0.0, 0.0),
            Vec2::new(6.0, 0.0),
            Vec2::new(5.0, 3.0),
            2.0,
        );
        // Ray's closest point to the center is (5, 0); pushed to the circle
        // that lands directly below the center.
        assert!((point - Vec2::new(5.0, 1.0)).length() < 1e-5, "got {point}");
    }

    #[test]
    fn test_tangent_point_radial_approach_degenerates() {
        // Velocity aims straight at the center, so the ray projection is
        // the center itself; fall back to the point nearest the player.
        let point = initial_tangent_point(
            Vec2::new(9.0, 5.0),
            Vec2::new(-4.0, 0.0),
            Vec2::new(5.0, 5.0),
            ORBIT_RADIUS,
        );
        assert!((point - Vec2::new(7.0, 5.0)).length() < 1e-5, "got {point}");
    }

    #[test]
    fn test_tangent_point_for_stationary_player() {
        let point = initial_tangent_point(
            Vec2::new(9.0, 5.0),
            Vec2::ZERO,
            Vec2::new(5.0, 5.0),
            ORBIT_RADIUS,
        );
        assert!((point - Vec2::new(7.0, 5.0)).length() < 1e-5, "got {point}");
    }

    #[test]
    fn test_tangent_ignores_points_behind_the_player() {
        // Moving away from the circle: the backward part of the ray is
        // clamped, leaving the player's own position as the projection.
        let away = initial_tangent_point(
            Vec2::new(9.0, 5.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(5.0, 5.0),
            ORBIT_RADIUS,
        );
        assert!((away - Vec2::new(7.0, 5.0)).length() < 1e-5, "got {away}");
    }

    #[test]
    fn test_orbit_direction_from_cross_sign() {
        let center = Vec2::new(0.0, 0.0);
        let position = Vec2::new(2.0, 0.0);
        assert_eq!(
            orbit_direction(position, Vec2::new(0.0, 1.0), center),
            OrbitDirection::CounterClockwise
        );
        assert_eq!(
            orbit_direction(position, Vec2::new(0.0, -1.0), center),
            OrbitDirection::Clockwise
        );
        // Radial capture velocity has zero cross product.
        assert_eq!(
            orbit_direction(position, Vec2::new(-1.0, 0.0), center),
            OrbitDirection::CounterClockwise
        );
    }

    #[test]
    fn test_orbit_radius_never_drifts() {
        let center = Vec2::new(5.0, 5.0);
        let mut angle = angle_on_circle(center, Vec2::new(7.0, 5.0));

        for _ in 0..2000 {
            angle = advance_angle(angle, OrbitDirection::CounterClockwise, DT);
            let position = orbit_position(center, ORBIT_RADIUS, angle);
            let radius = (position - center).length();
            assert!(
                (radius - ORBIT_RADIUS).abs() < 1e-4,
                "radius drifted to {radius}"
            );
        }
    }

    #[test]
    fn test_clockwise_advances_negative() {
        let angle = advance_angle(0.5, OrbitDirection::Clockwise, DT);
        assert!(angle < 0.5);
        let wrapped = advance_angle(0.01, OrbitDirection::Clockwise, DT);
        assert!(wrapped > std::f32::consts::PI, "should wrap below zero");
    }

    #[test]
    fn test_approach_velocity_lands_exactly() {
        let position = Vec2::new(0.0, 0.0);
        let target = Vec2::new(0.1, 0.0);
        let velocity = approach_velocity(position, target, 8.0, DT);
        // Far below full speed: the clamp leaves exactly one frame of travel.
        let landed = position + velocity * DT;
        assert!((landed - target).length() < 1e-6, "landed at {landed}");
        let full = approach_velocity(Vec2::ZERO, Vec2::new(100.0, 0.0), 8.0, DT);
        assert!((full.length() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_chord_velocity_reaches_next_point() {
        let position = Vec2::new(7.0, 5.0);
        let next = orbit_position(Vec2::new(5.0, 5.0), ORBIT_RADIUS, 0.1);
        let velocity = chord_velocity(position, next, DT);
        let landed = position + velocity * DT;
        assert!((landed - next).length() < 1e-6);
    }

    #[test]
    fn test_orbit_speed_matches_speed_factor() {
        // r * omega and base speed * orbit factor describe the same
        // tangential speed; the tuning tables stay in lockstep.
        let tangential = ORBIT_RADIUS * ORBIT_ANGULAR_SPEED;
        assert!((tangential - PLAYER_BASE_SPEED * ORBIT_SPEED_FACTOR).abs() < 1e-6);

        // The per-frame chord comes out fractionally under the arc.
        let center = Vec2::new(5.0, 5.0);
        let start = orbit_position(center, ORBIT_RADIUS, 0.0);
        let swept = advance_angle(0.0, OrbitDirection::CounterClockwise, DT);
        let next = orbit_position(center, ORBIT_RADIUS, swept);
        let chord_speed = chord_velocity(start, next, DT).length();
        assert!(chord_speed <= tangential);
        assert!(chord_speed > tangential * 0.99, "chord speed {chord_speed}");
    }
}

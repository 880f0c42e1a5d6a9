#[cfg(test)]
mod tests {
    use glam::Vec2;

    use riverlight_core::constants::{ENEMY_STEP, FLEE_GOAL, PATROL_ARRIVAL_BAND};
    use riverlight_core::enums::EnemyState;

    use crate::fsm::{evaluate, EnemyContext};

    fn make_context<'a>(
        state: EnemyState,
        position: Vec2,
        goal: Vec2,
        patrol_index: usize,
        patrol_points: &'a [Vec2],
        guard_lit: bool,
    ) -> EnemyContext<'a> {
        EnemyContext {
            state,
            position,
            goal,
            patrol_points,
            patrol_index,
            orientation: 0.0,
            guard_lit,
        }
    }

    #[test]
    fn test_patrol_steps_toward_goal() {
        let points = [Vec2::new(20.0, 0.0), Vec2::new(20.0, 18.0)];
        let ctx = make_context(
            EnemyState::Patrol,
            Vec2::new(20.0, 5.0),
            Vec2::new(20.0, 18.0),
            1,
            &points,
            false,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, EnemyState::Patrol);
        assert!(!update.state_changed);
        // Straight up toward the goal, one fixed step
        assert!((update.new_position.x - 20.0).abs() < 1e-6);
        assert!((update.new_position.y - (5.0 + ENEMY_STEP)).abs() < 1e-6);
        assert_eq!(update.new_patrol_index, 1);
    }

    #[test]
    fn test_patrol_flips_goal_inside_arrival_band() {
        let points = [Vec2::new(20.0, 0.0), Vec2::new(20.0, 18.0)];
        // 0.4 below the goal: inside the band on both axes
        let ctx = make_context(
            EnemyState::Patrol,
            Vec2::new(20.0, 17.6),
            Vec2::new(20.0, 18.0),
            1,
            &points,
            false,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.new_goal, Vec2::new(20.0, 0.0));
        assert_eq!(update.new_patrol_index, 0);
        // Reoriented straight down via atan2
        assert!(
            (update.new_orientation - (-std::f32::consts::FRAC_PI_2)).abs() < 1e-5,
            "expected -PI/2, got {}",
            update.new_orientation
        );
        // And the step already heads for the new goal
        assert!(update.new_position.y < 17.6);
    }

    #[test]
    fn test_patrol_requires_band_on_both_axes() {
        let points = [Vec2::new(20.0, 0.0), Vec2::new(20.0, 18.0)];
        // y matches the goal but x is a full unit off: no flip
        let ctx = make_context(
            EnemyState::Patrol,
            Vec2::new(19.0, 18.0),
            Vec2::new(20.0, 18.0),
            1,
            &points,
            false,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.new_goal, Vec2::new(20.0, 18.0));
        assert_eq!(update.new_patrol_index, 1);
    }

    #[test]
    fn test_patrol_wraps_waypoint_cycle() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let ctx = make_context(
            EnemyState::Patrol,
            Vec2::new(10.0, 9.8),
            Vec2::new(10.0, 10.0),
            2,
            &points,
            false,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.new_patrol_index, 0);
        assert_eq!(update.new_goal, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_lit_guard_triggers_flee() {
        let points = [Vec2::new(20.0, 0.0), Vec2::new(20.0, 18.0)];
        let ctx = make_context(
            EnemyState::Patrol,
            Vec2::new(20.0, 5.0),
            Vec2::new(20.0, 18.0),
            1,
            &points,
            true,
        );
        let update = evaluate(&ctx);
        assert!(update.state_changed);
        assert_eq!(update.new_state, EnemyState::Flee);
        assert_eq!(update.new_goal, Vec2::new(FLEE_GOAL.0, FLEE_GOAL.1));
        // Heading toward the off-stage goal, up and to the right
        assert!(update.new_orientation > 0.0);
        assert!(update.new_position.x > 20.0);
        assert!(update.new_position.y > 5.0);
    }

    #[test]
    fn test_flee_never_reverts() {
        let points = [Vec2::new(20.0, 0.0), Vec2::new(20.0, 18.0)];
        let flee_goal = Vec2::new(FLEE_GOAL.0, FLEE_GOAL.1);
        let mut position = Vec2::new(25.0, 10.0);
        // Guard no longer lit; the sink state must not care
        for _ in 0..50 {
            let ctx = make_context(EnemyState::Flee, position, flee_goal, 1, &points, false);
            let update = evaluate(&ctx);
            assert_eq!(update.new_state, EnemyState::Flee);
            assert!(!update.state_changed);
            position = update.new_position;
        }
        // Still marching off-stage
        assert!(position.x > 25.0);
    }

    #[test]
    fn test_short_patrol_list_stays_stationary() {
        let points = [Vec2::new(20.0, 0.0)];
        let ctx = make_context(
            EnemyState::Patrol,
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 0.0),
            0,
            &points,
            false,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, EnemyState::Patrol);
        assert_eq!(update.new_position, Vec2::new(20.0, 0.0));
        assert!(!update.state_changed);
    }

    #[test]
    fn test_step_magnitude_is_constant() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0)];
        let ctx = make_context(
            EnemyState::Patrol,
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 40.0),
            1,
            &points,
            false,
        );
        let update = evaluate(&ctx);
        let moved = (update.new_position - Vec2::new(0.0, 0.0)).length();
        assert!((moved - ENEMY_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_arrival_band_wider_than_step() {
        // The no-overshoot argument in the FSM rests on this relation.
        assert!(PATROL_ARRIVAL_BAND > ENEMY_STEP);
    }
}

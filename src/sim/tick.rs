//! Per-frame simulation step
//!
//! One call = one displayed frame. There is no delta time: velocity is
//! measured in pixels per frame and the platform paces frames.

use super::collision::{WallContact, reflect_off_walls};
use super::state::SimState;

/// Advance the simulation by one frame: integrate, then reflect
pub fn tick(state: &mut SimState) -> WallContact {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Reflection is tested on the post-update position
    let contact = reflect_off_walls(ball, &state.bounds);
    state.frames += 1;

    if contact.any() {
        log::trace!(
            "frame {}: wall contact x={} y={} pos=({:.1}, {:.1}) vel=({}, {})",
            state.frames,
            contact.x,
            contact.y,
            ball.pos.x,
            ball.pos.y,
            ball.vel.x,
            ball.vel.y
        );
    }

    contact
}

/// Run `frames` ticks back to back
pub fn run_frames(state: &mut SimState, frames: u64) {
    for _ in 0..frames {
        tick(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::sim::state::{Ball, Bounds};
    use glam::Vec2;
    use proptest::prelude::*;

    fn template_state() -> SimState {
        SimState::new(&AppConfig::default())
    }

    #[test]
    fn test_first_frame_moves_by_velocity() {
        let mut state = template_state();
        let contact = tick(&mut state);
        assert!(!contact.any());
        assert_eq!(state.ball.pos, Vec2::new(405.0, 304.0));
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_right_wall_reflects_x() {
        let mut state = template_state();
        let mut guard = 0;
        while state.ball.pos.x < 780.0 {
            tick(&mut state);
            guard += 1;
            assert!(guard < 1000, "ball never reached the right wall");
        }
        // 400 + 5 * 76 = 780
        assert_eq!(state.frames, 76);
        assert_eq!(state.ball.vel.x, -5.0);
    }

    #[test]
    fn test_bottom_wall_reflects_first() {
        let mut state = template_state();
        // 300 + 4 * 70 = 580 = 600 - 20
        run_frames(&mut state, 69);
        assert_eq!(state.ball.vel.y, 4.0);
        let contact = tick(&mut state);
        assert_eq!(contact, WallContact { x: false, y: true });
        assert_eq!(state.ball.vel, Vec2::new(5.0, -4.0));
    }

    #[test]
    fn test_corner_flips_both_in_one_frame() {
        let bounds = Bounds::new(800.0, 600.0);
        let ball = Ball::new(Vec2::new(24.0, 23.0), Vec2::new(-5.0, -4.0), 20.0);
        let mut state = SimState::with_ball(ball, bounds);

        let contact = tick(&mut state);
        assert!(contact.is_corner());
        assert_eq!(state.ball.pos, Vec2::new(19.0, 19.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_boundary_oscillation() {
        // Slow enough to stay inside the contact band for several frames
        let bounds = Bounds::new(800.0, 600.0);
        let ball = Ball::new(Vec2::new(10.0, 300.0), Vec2::new(-1.0, 0.0), 20.0);
        let mut state = SimState::with_ball(ball, bounds);

        let mut expected = -1.0;
        for _ in 0..5 {
            let contact = tick(&mut state);
            assert!(contact.x);
            expected = -expected;
            assert_eq!(state.ball.vel.x, expected);
        }
    }

    #[test]
    fn test_speed_is_preserved_over_many_frames() {
        let mut state = template_state();
        run_frames(&mut state, 10_000);
        assert_eq!(state.ball.vel.x.abs(), 5.0);
        assert_eq!(state.ball.vel.y.abs(), 4.0);
        // Ball never escapes by more than one frame of travel
        assert!(state.ball.pos.x > -5.0 && state.ball.pos.x < 805.0);
        assert!(state.ball.pos.y > -4.0 && state.ball.pos.y < 604.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = template_state();
        let mut state2 = template_state();
        for _ in 0..500 {
            assert_eq!(tick(&mut state1), tick(&mut state2));
        }
        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn prop_integration_is_exact(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
        ) {
            let ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 20.0);
            let mut state = SimState::with_ball(ball, Bounds::new(800.0, 600.0));
            let expected = Vec2::new(x, y) + Vec2::new(vx, vy);

            let contact = tick(&mut state);

            prop_assert_eq!(state.ball.pos, expected);
            prop_assert_eq!(state.ball.vel.x, if contact.x { -vx } else { vx });
            prop_assert_eq!(state.ball.vel.y, if contact.y { -vy } else { vy });
        }

        #[test]
        fn prop_radius_and_bounds_never_change(frames in 0u64..2000) {
            let mut state = template_state();
            let radius = state.ball.radius;
            let bounds = state.bounds;

            run_frames(&mut state, frames);

            prop_assert_eq!(state.ball.radius, radius);
            prop_assert_eq!(state.bounds, bounds);
            prop_assert_eq!(state.frames, frames);
        }

        #[test]
        fn prop_split_runs_match_single_run(n in 0u64..600, m in 0u64..600) {
            let mut split = template_state();
            run_frames(&mut split, n);
            run_frames(&mut split, m);

            let mut single = template_state();
            run_frames(&mut single, n + m);

            prop_assert_eq!(split, single);
        }
    }
}

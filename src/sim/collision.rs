//! Wall reflection
//!
//! Axis-aligned sign flip on contact. No positional correction: a ball that
//! overshoots a wall stays where it is and the flipped velocity brings it
//! back on the following frames.

use super::state::{Ball, Bounds};

/// Which axes reflected this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub x: bool,
    pub y: bool,
}

impl WallContact {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }

    /// Both axes flipped in the same frame
    #[inline]
    pub fn is_corner(&self) -> bool {
        self.x && self.y
    }
}

/// Check a single axis against `[radius, extent - radius]`
#[inline]
pub fn touches_wall(coord: f32, radius: f32, extent: f32) -> bool {
    coord >= extent - radius || coord <= radius
}

/// Negate each velocity component whose axis is touching a wall
pub fn reflect_off_walls(ball: &mut Ball, bounds: &Bounds) -> WallContact {
    let contact = WallContact {
        x: touches_wall(ball.pos.x, ball.radius, bounds.width),
        y: touches_wall(ball.pos.y, ball.radius, bounds.height),
    };

    if contact.x {
        ball.vel.x = -ball.vel.x;
    }
    if contact.y {
        ball.vel.y = -ball.vel.y;
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_no_contact_inside() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(5.0, 4.0), 20.0);
        let contact = reflect_off_walls(&mut ball, &bounds());
        assert!(!contact.any());
        assert_eq!(ball.vel, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_right_wall_flips_x_only() {
        let mut ball = Ball::new(Vec2::new(780.0, 300.0), Vec2::new(5.0, 4.0), 20.0);
        let contact = reflect_off_walls(&mut ball, &bounds());
        assert_eq!(contact, WallContact { x: true, y: false });
        assert_eq!(ball.vel, Vec2::new(-5.0, 4.0));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(touches_wall(20.0, 20.0, 800.0));
        assert!(touches_wall(780.0, 20.0, 800.0));
        assert!(!touches_wall(20.001, 20.0, 800.0));
        assert!(!touches_wall(779.999, 20.0, 800.0));
    }

    #[test]
    fn test_corner_flips_both() {
        let mut ball = Ball::new(Vec2::new(15.0, 10.0), Vec2::new(-5.0, -4.0), 20.0);
        let contact = reflect_off_walls(&mut ball, &bounds());
        assert!(contact.is_corner());
        assert_eq!(ball.vel, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_position_is_not_clamped() {
        // Overshot the left wall; position stays outside
        let mut ball = Ball::new(Vec2::new(-3.0, 300.0), Vec2::new(-5.0, 0.0), 20.0);
        reflect_off_walls(&mut ball, &bounds());
        assert_eq!(ball.pos, Vec2::new(-3.0, 300.0));
        assert_eq!(ball.vel.x, 5.0);
    }
}

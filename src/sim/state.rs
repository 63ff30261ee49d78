//! Simulation state types
//!
//! Everything the per-frame update reads and writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// The bouncing ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Fixed for the lifetime of the ball
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

/// Screen rectangle the ball bounces inside, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if a ball of `radius` centered at `pos` touches no wall.
    /// Exactly on the reflection threshold counts as touching.
    pub fn contains_center_band(&self, pos: Vec2, radius: f32) -> bool {
        pos.x > radius
            && pos.x < self.width - radius
            && pos.y > radius
            && pos.y < self.height - radius
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub ball: Ball,
    pub bounds: Bounds,
    /// Frames simulated so far (bookkeeping only, never affects motion)
    pub frames: u64,
}

impl SimState {
    /// Ball at screen center with the configured velocity
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ball: Ball::new(config.center(), config.ball_velocity, config.ball_radius),
            bounds: Bounds::new(config.width as f32, config.height as f32),
            frames: 0,
        }
    }

    /// Build from explicit parts (tests, custom scenes)
    pub fn with_ball(ball: Ball, bounds: Bounds) -> Self {
        Self {
            ball,
            bounds,
            frames: 0,
        }
    }
}

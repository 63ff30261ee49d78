//! Process configuration
//!
//! Built from compile-time defaults; nothing is read from disk or the
//! command line. Serializable so the effective config can be logged.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Everything the window, loop and simulation are parameterized by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    // === Window ===
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Frame rate the platform paces redraws to
    pub target_fps: u32,

    // === Ball ===
    pub ball_radius: f32,
    /// Initial velocity in pixels per frame
    pub ball_velocity: Vec2,

    // === HUD ===
    pub show_fps: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            target_fps: TARGET_FPS,

            ball_radius: BALL_RADIUS,
            ball_velocity: Vec2::new(BALL_START_VELOCITY.0, BALL_START_VELOCITY.1),

            show_fps: true,
        }
    }
}

impl AppConfig {
    /// Reject configs the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "screen size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.target_fps == 0 {
            return Err(Error::InvalidConfig("target_fps must be > 0".into()));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        let diameter = self.ball_radius * 2.0;
        if diameter >= self.width as f32 || diameter >= self.height as f32 {
            return Err(Error::InvalidConfig(format!(
                "ball (r={}) does not fit in {}x{}",
                self.ball_radius, self.width, self.height
            )));
        }
        if !self.ball_velocity.is_finite() {
            return Err(Error::InvalidConfig("ball_velocity must be finite".into()));
        }
        Ok(())
    }

    /// Screen center, where the ball starts
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Effective config as JSON, for startup logging
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_template() {
        let config = AppConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.ball_radius, 20.0);
        assert_eq!(config.ball_velocity, Vec2::new(5.0, 4.0));
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let config = AppConfig {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = AppConfig {
            ball_radius: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_ball_larger_than_screen() {
        let config = AppConfig {
            ball_radius: 300.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_fps() {
        let config = AppConfig {
            target_fps: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"target_fps": 30}"#).unwrap();
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.width, 800);
        assert_eq!(config.title, "Raylib Game Template");
    }

    #[test]
    fn test_to_json_is_parseable() {
        let json = AppConfig::default().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ball_velocity"], serde_json::json!([5.0, 4.0]));
    }
}

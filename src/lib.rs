//! Bounce Template - a minimal windowed starter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, wall reflection)
//! - `renderer`: Draw list + WebGPU SDF rendering pipeline
//! - `app`: Per-frame update-then-draw loop
//! - `platform`: Window, event loop, frame pacing
//! - `config`: Process configuration with validated defaults

pub mod app;
pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::App;
pub use config::AppConfig;
pub use error::{Error, Result};

/// Template configuration constants
pub mod consts {
    /// Screen dimensions (logical pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Window title
    pub const WINDOW_TITLE: &str = "Raylib Game Template";

    /// Frames per second the platform paces to
    pub const TARGET_FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    /// Pixels per frame, not per second
    pub const BALL_START_VELOCITY: (f32, f32) = (5.0, 4.0);

    /// On-screen text
    pub const TITLE_TEXT: &str = "Raylib Game Template";
    pub const SUBTITLE_TEXT: &str = "Edit main.c to create your game!";

    /// FPS indicator sits this far left of the right edge
    pub const FPS_RIGHT_MARGIN: f32 = 100.0;
}

//! Platform layer
//!
//! Handles everything outside the frame body:
//! - Window and event loop (winit)
//! - Close detection (window close, Escape)
//! - Frame pacing to the target rate
//! - Frame timing for the FPS indicator

pub mod fps;
pub mod pacing;
pub mod window;

pub use fps::FpsCounter;
pub use pacing::FramePacer;
pub use window::run;

//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - One step per frame, no delta time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContact, reflect_off_walls, touches_wall};
pub use state::{Ball, Bounds, SimState};
pub use tick::{run_frames, tick};

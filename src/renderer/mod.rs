//! Rendering module
//!
//! The frame is recorded into a `DrawList`, then painted by the SDF pipeline
//! in a single fullscreen fragment pass.

pub mod color;
pub mod draw_list;
pub mod font;
pub mod sdf_pipeline;

pub use color::{Color, palette};
pub use draw_list::{DrawCommand, DrawList, fps_color};
pub use sdf_pipeline::SdfRenderState;

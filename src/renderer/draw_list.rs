//! Per-frame draw command recording
//!
//! Commands are kept in call order; the GPU pass paints them in that order,
//! so later commands land on top of earlier ones.

use glam::Vec2;

use super::color::{Color, palette};

/// Font size the FPS indicator is drawn at
pub const FPS_FONT_SIZE: f32 = 20.0;

/// A single recorded draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole target
    Clear(Color),
    /// Bitmap-font text, `pos` is the top-left corner
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Everything drawn during one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    /// Drop last frame's commands, keep the allocation
    pub fn begin(&mut self) {
        self.commands.clear();
    }

    pub fn clear_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos: Vec2::new(x, y),
            size,
            color,
        });
    }

    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    /// "<fps> FPS", colored by how healthy the frame rate is
    pub fn draw_fps(&mut self, x: f32, y: f32, fps: u32) {
        let text = format!("{fps} FPS");
        self.draw_text(&text, x, y, FPS_FONT_SIZE, fps_color(fps));
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Color of the last `Clear` command, if any
    pub fn clear_color(&self) -> Option<Color> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(*color),
            _ => None,
        })
    }
}

/// LIME when healthy, ORANGE under 30, RED under 15
pub fn fps_color(fps: u32) -> Color {
    if fps < 15 {
        palette::RED
    } else if fps < 30 {
        palette::ORANGE
    } else {
        palette::LIME
    }
}

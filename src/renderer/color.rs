//! 8-bit RGBA colors and the template palette

/// sRGB color, 8 bits per channel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized sRGB-encoded components
    pub fn to_srgb_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Linear components for an sRGB render target (alpha stays linear)
    pub fn to_linear(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_srgb_f32();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }

    /// Pick the encoding the surface expects
    pub fn for_target(self, srgb_target: bool) -> [f32; 4] {
        if srgb_target {
            self.to_linear()
        } else {
            self.to_srgb_f32()
        }
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Template palette
pub mod palette {
    use super::Color;

    pub const RAYWHITE: Color = Color::rgba(245, 245, 245, 255);
    pub const DARKGRAY: Color = Color::rgba(80, 80, 80, 255);
    pub const GRAY: Color = Color::rgba(130, 130, 130, 255);
    pub const MAROON: Color = Color::rgba(190, 33, 55, 255);
    pub const LIME: Color = Color::rgba(0, 158, 47, 255);
    pub const ORANGE: Color = Color::rgba(255, 161, 0, 255);
    pub const RED: Color = Color::rgba(230, 41, 55, 255);
}

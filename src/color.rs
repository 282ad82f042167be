//! Display colors and wire color resolution.

/// RGB color with components normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new color with explicit components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from raw 8-bit channels, linearly normalized.
    pub const fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
}

/// Resolve raw wire color channels to a display color.
///
/// The g channel doubles as the producer's proximity grade: the ASCII
/// digits `'1'`, `'3'`, and `'4'` select pure red, yellow, and blue. Any
/// other triple falls back to its linear normalization, so every input
/// resolves to exactly one color.
pub fn resolve(r: u8, g: u8, b: u8) -> Color {
    match g {
        b'1' => Color::RED,
        b'3' => Color::YELLOW,
        b'4' => Color::BLUE,
        _ => Color::from_bytes(r, g, b),
    }
}

//! RGBA color type and the canonical species palette

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

pub const RED: Color = Color::rgb(230, 41, 55);
pub const ORANGE: Color = Color::rgb(255, 161, 0);
pub const YELLOW: Color = Color::rgb(253, 249, 0);
pub const GREEN: Color = Color::rgb(0, 228, 48);
pub const BLUE: Color = Color::rgb(0, 121, 241);
pub const VIOLET: Color = Color::rgb(135, 60, 190);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const PINK: Color = Color::rgb(255, 109, 194);
pub const DARKBLUE: Color = Color::rgb(0, 82, 172);
pub const SKYBLUE: Color = Color::rgb(102, 191, 255);

/// Canonical species colors, in classification tie-break order.
pub const PALETTE: [Color; 10] = [
    RED, ORANGE, YELLOW, GREEN, BLUE, VIOLET, MAGENTA, PINK, DARKBLUE, SKYBLUE,
];

/// Proximity of two colors: 1.0 for identical channels, approaching 0.0 for
/// maximal channel divergence. Alpha is ignored.
pub fn proximity(c1: Color, c2: Color) -> f32 {
    if c1.r == c2.r && c1.g == c2.g && c1.b == c2.b {
        return 1.0;
    }

    let dr = (c1.r as f32 - c2.r as f32).abs() / 255.0;
    let dg = (c1.g as f32 - c2.g as f32).abs() / 255.0;
    let db = (c1.b as f32 - c2.b as f32).abs() / 255.0;

    1.0 - (dr + dg + db) / 3.0
}

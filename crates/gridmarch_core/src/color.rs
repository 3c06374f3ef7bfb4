//! Colors and palettes

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to normalized RGBA floats with full alpha
    #[inline]
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Palette the field cycles through when assigning group colors
pub const DEFAULT_PALETTE: [Rgb; 10] = [
    Rgb::new(255, 99, 71),   // tomato
    Rgb::new(135, 206, 235), // sky blue
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(144, 238, 144), // light green
    Rgb::new(75, 0, 130),    // indigo
    Rgb::new(255, 20, 147),  // deep pink
    Rgb::new(32, 178, 170),  // light sea green
    Rgb::new(255, 215, 0),   // gold
    Rgb::new(138, 43, 226),  // blue violet
    Rgb::new(60, 179, 113),  // medium sea green
];

/// Pick the palette entry for a group index, cycling when the palette is shorter
///
/// Returns `None` for an empty palette.
pub fn palette_color(palette: &[Rgb], index: usize) -> Option<Rgb> {
    if palette.is_empty() {
        None
    } else {
        Some(palette[index % palette.len()])
    }
}

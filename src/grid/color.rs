//! Pixel color values.

use std::fmt;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// A single cell of a pixel grid.
///
/// `Transparent` is its own variant rather than a reserved triple, so no
/// RGB value can be mistaken for it once the file has been decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Opaque(Rgb),
    Transparent,
}

/// Channel value the file format uses for every channel of a transparent pixel.
pub const TRANSPARENT_CHANNEL: i64 = -1;

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Opaque(Rgb::new(r, g, b))
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Transparent)
    }

    /// The RGB value, or `None` for a transparent pixel.
    pub fn opaque(&self) -> Option<Rgb> {
        match self {
            Color::Opaque(rgb) => Some(*rgb),
            Color::Transparent => None,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Opaque(rgb)
    }
}

impl fmt::Display for Color {
    /// Formats the color as the triple the file format uses for it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Opaque(rgb) => fmt::Display::fmt(rgb, f),
            Color::Transparent => write!(f, "{0} {0} {0}", TRANSPARENT_CHANNEL),
        }
    }
}

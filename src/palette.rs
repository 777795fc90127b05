//! Fixed 16-color sketch palette
//!
//! A descriptor character indexes this palette by its offset from `'A'`.
//! The palette is built once at startup (defaults or config) and handed to
//! the renderer; nothing reads it from global state.

use std::fmt;
use std::str::FromStr;

/// Number of entries in a sketch palette.
pub const PALETTE_SIZE: usize = 16;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pack into `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }

    /// Unpack from `0xRRGGBB` (upper byte ignored).
    pub fn from_u32(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Error parsing a `#RRGGBB` color or building a palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("palette must have exactly {expected} colors, got {found}")]
    WrongSize { expected: usize, found: usize },
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidColor(s.to_string()));
        }
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| PaletteError::InvalidColor(s.to_string()))?;
        Ok(Self::from_u32(value))
    }
}

/// The PICO-8 colors, in descriptor order (`'A'` through `'P'`).
pub const PICO8: [Rgb; PALETTE_SIZE] = [
    Rgb(0x00, 0x00, 0x00),
    Rgb(0x1D, 0x2B, 0x53),
    Rgb(0x7E, 0x25, 0x53),
    Rgb(0x00, 0x87, 0x51),
    Rgb(0xAB, 0x52, 0x36),
    Rgb(0x5F, 0x57, 0x4F),
    Rgb(0xC2, 0xC3, 0xC7),
    Rgb(0xFF, 0xF1, 0xE8),
    Rgb(0xFF, 0x00, 0x4D),
    Rgb(0xFF, 0xA3, 0x00),
    Rgb(0xFF, 0xEC, 0x27),
    Rgb(0x00, 0xE4, 0x36),
    Rgb(0x29, 0xAD, 0xFF),
    Rgb(0x83, 0x76, 0x9C),
    Rgb(0xFF, 0x77, 0xA8),
    Rgb(0xFF, 0xCC, 0xAA),
];

/// Immutable palette of exactly sixteen colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::pico8()
    }
}

impl Palette {
    pub fn pico8() -> Self {
        Self { colors: PICO8 }
    }

    pub fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Build a palette from `#RRGGBB` strings, as stored in the config file.
    pub fn from_hex<S: AsRef<str>>(values: &[S]) -> Result<Self, PaletteError> {
        if values.len() != PALETTE_SIZE {
            return Err(PaletteError::WrongSize {
                expected: PALETTE_SIZE,
                found: values.len(),
            });
        }
        let mut colors = [Rgb(0, 0, 0); PALETTE_SIZE];
        for (slot, value) in colors.iter_mut().zip(values) {
            *slot = value.as_ref().parse()?;
        }
        Ok(Self { colors })
    }

    /// Color at `index`, or `None` outside `0..16`.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// First palette index holding `color`.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(ToString::to_string).collect()
    }
}

impl std::ops::Index<u8> for Palette {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Rgb {
        &self.colors[usize::from(index)]
    }
}

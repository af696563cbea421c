// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Defines the fixed 16-color palette and the packed attribute byte.
//!
//! A cell carries exactly one foreground and one background index, each
//! 4 bits wide: `attr = fg | (bg << 4)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

/// palette order, position == 4-bit index
pub const PALETTE: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

impl Color {
    /// 4-bit palette index
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Only the low 4 bits are used, so every byte maps to a palette entry.
    pub fn from_index(i: u8) -> Color {
        PALETTE[(i & 0x0f) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Cyan => "Cyan",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::LightRed => "LightRed",
            Color::LightGreen => "LightGreen",
            Color::LightYellow => "LightYellow",
            Color::LightBlue => "LightBlue",
            Color::LightMagenta => "LightMagenta",
            Color::LightCyan => "LightCyan",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown color '{}'", s))
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.index()
    }
}

/// Packed foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attr(u8);

impl Attr {
    pub fn new(fg: Color, bg: Color) -> Attr {
        Attr(fg.index() | (bg.index() << 4))
    }

    pub fn fg(self) -> Color {
        Color::from_index(self.0)
    }

    pub fn bg(self) -> Color {
        Color::from_index(self.0 >> 4)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn from_bits(bits: u8) -> Attr {
        Attr(bits)
    }
}

impl Default for Attr {
    /// White on Black
    fn default() -> Self {
        Attr::new(Color::White, Color::Black)
    }
}

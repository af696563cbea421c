// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Cell is the basic rendering unit: one glyph plus a packed
//! foreground/background attribute. Many Cells form a Buffer.

use crate::render::style::{Attr, Color};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub glyph: char,
    pub attr: Attr,
}

impl Cell {
    pub fn new(glyph: char, fg: Color, bg: Color) -> Cell {
        Cell {
            glyph,
            attr: Attr::new(fg, bg),
        }
    }

    /// Packs a glyph with optional colors, White on Black when unspecified.
    pub fn pack(glyph: char, fg: Option<Color>, bg: Option<Color>) -> Cell {
        Cell::new(
            glyph,
            fg.unwrap_or(Color::White),
            bg.unwrap_or(Color::Black),
        )
    }

    /// The cell a buffer is cleared to.
    pub fn blank() -> Cell {
        Cell::new(' ', Color::White, Color::Black)
    }

    pub fn fg(&self) -> Color {
        self.attr.fg()
    }

    pub fn bg(&self) -> Color {
        self.attr.bg()
    }

    pub fn set_char(&mut self, ch: char) -> &mut Cell {
        self.glyph = ch;
        self
    }

    pub fn set_fg(&mut self, color: Color) -> &mut Cell {
        self.attr = Attr::new(color, self.attr.bg());
        self
    }

    pub fn set_bg(&mut self, color: Color) -> &mut Cell {
        self.attr = Attr::new(self.attr.fg(), color);
        self
    }

    pub fn reset(&mut self) {
        *self = Cell::blank();
    }

    pub fn is_blank(&self) -> bool {
        *self == Cell::blank()
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::blank()
    }
}

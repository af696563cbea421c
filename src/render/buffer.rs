// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Buffer is the frame grid: a cell vector with width * height elements,
//! stored row by row starting at (0, 0).
//!
//! Writes are soft-clipped: any coordinate outside [0, width) x [0, height)
//! is silently dropped, so overlay code can write text that runs off the
//! grid without checking bounds itself.
//! ```
//! use grid_console::render::{buffer::Buffer, style::Color};
//! let mut buf = Buffer::new(10, 5).unwrap();
//! buf.set_string("hi", 2, 3, Some(Color::White), Some(Color::Black));
//! assert_eq!(buf.get(2, 3).unwrap().glyph, 'h');
//! ```

use crate::{
    error::{GridError, Result},
    render::{cell::Cell, style::Color},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    content: Vec<Cell>,
}

impl Buffer {
    /// Allocates width * height blank cells. Both sides must be positive.
    pub fn new(width: u16, height: u16) -> Result<Buffer> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Buffer {
            width,
            height,
            content: vec![Cell::blank(); size],
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn content(&self) -> &[Cell] {
        &self.content
    }

    /// Row iterator, each slice is exactly `width` cells.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.content.chunks(self.width as usize)
    }

    /// y * width + x, or None outside the grid
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pos_of(&self, i: usize) -> (u16, u16) {
        debug_assert!(
            i < self.content.len(),
            "Trying to get the coords of a cell outside the buffer: i={} len={}",
            i,
            self.content.len()
        );
        (
            (i % self.width as usize) as u16,
            (i / self.width as usize) as u16,
        )
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.content[i])
    }

    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index_of(x, y) {
            self.content[i] = cell;
        }
    }

    pub fn set_char(&mut self, x: i32, y: i32, glyph: char, fg: Option<Color>, bg: Option<Color>) {
        self.set_cell(x, y, Cell::pack(glyph, fg, bg));
    }

    /// One cell per char at (x + i, y). No wrapping: chars past the right
    /// edge are clipped one by one.
    pub fn set_string<S>(&mut self, string: S, x: i32, y: i32, fg: Option<Color>, bg: Option<Color>)
    where
        S: AsRef<str>,
    {
        for (i, ch) in string.as_ref().chars().enumerate() {
            let cx = x.saturating_add(i as i32);
            // once past the right edge nothing further in this row can land
            if cx >= self.width as i32 {
                break;
            }
            self.set_char(cx, y, ch, fg, bg);
        }
    }

    /// Overwrites every cell with `Cell::blank()`.
    pub fn clear(&mut self) {
        self.content.fill(Cell::blank());
    }

    /// Row-major text dump, rows joined by newlines.
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|c| c.glyph).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_sized_buffer_is_rejected() {
        assert!(matches!(
            Buffer::new(0, 5),
            Err(GridError::InvalidSize { width: 0, height: 5 })
        ));
        assert!(Buffer::new(4, 0).is_err());
    }

    #[test]
    fn new_buffer_is_blank() {
        let buf = Buffer::new(7, 3).unwrap();
        assert_eq!(buf.content().len(), 21);
        assert!(buf.content().iter().all(|c| c.is_blank()));
    }

    #[test]
    fn it_translates_to_and_from_coordinates() {
        let buf = Buffer::new(50, 80).unwrap();

        assert_eq!(buf.pos_of(0), (0, 0));
        assert_eq!(buf.index_of(0, 0), Some(0));

        assert_eq!(buf.pos_of(buf.content().len() - 1), (49, 79));
        assert_eq!(buf.index_of(49, 79), Some(buf.content().len() - 1));
    }

    #[test]
    fn right_edge_is_exclusive() {
        let buf = Buffer::new(10, 5).unwrap();
        assert_eq!(buf.index_of(9, 0), Some(9));
        assert_eq!(buf.index_of(10, 0), None);
        assert_eq!(buf.index_of(0, 5), None);
        assert_eq!(buf.index_of(-1, 0), None);
    }

    #[test]
    fn writing_one_past_the_right_edge_does_not_wrap() {
        let mut buf = Buffer::new(10, 5).unwrap();
        buf.set_char(10, 0, 'X', None, None);
        assert!(buf.get(0, 1).unwrap().is_blank());
        assert!(buf.content().iter().all(|c| c.is_blank()));
    }

    #[test]
    fn string_is_clipped_at_the_right_edge() {
        let mut buf = Buffer::new(10, 5).unwrap();
        buf.set_string("abcde", 8, 1, None, None);
        assert_eq!(buf.get(8, 1).unwrap().glyph, 'a');
        assert_eq!(buf.get(9, 1).unwrap().glyph, 'b');
        // nothing leaked into the next row
        assert!(buf.get(0, 2).unwrap().is_blank());
        let written = buf.content().iter().filter(|c| !c.is_blank()).count();
        assert_eq!(written, 2);
    }

    #[test]
    fn string_starting_left_of_the_grid_shows_its_tail() {
        let mut buf = Buffer::new(10, 5).unwrap();
        buf.set_string("abcd", -2, 0, None, None);
        assert_eq!(buf.get(0, 0).unwrap().glyph, 'c');
        assert_eq!(buf.get(1, 0).unwrap().glyph, 'd');
        assert!(buf.get(2, 0).unwrap().is_blank());
    }

    #[test]
    fn to_text_dumps_rows() {
        let mut buf = Buffer::new(3, 2).unwrap();
        buf.set_string("ab", 0, 0, None, None);
        buf.set_char(2, 1, 'z', None, None);
        assert_eq!(buf.to_text(), "ab \n  z");
    }

    fn any_color() -> impl Strategy<Value = Color> {
        (0u8..16).prop_map(Color::from_index)
    }

    proptest! {
        #[test]
        fn in_bounds_write_reads_back(
            w in 1u16..40, h in 1u16..20,
            fx in 0.0f64..1.0, fy in 0.0f64..1.0,
            ch in proptest::char::range('!', '~'),
            fg in any_color(), bg in any_color(),
        ) {
            let mut buf = Buffer::new(w, h).unwrap();
            let x = (fx * w as f64) as i32;
            let y = (fy * h as f64) as i32;
            buf.set_char(x, y, ch, Some(fg), Some(bg));
            prop_assert_eq!(*buf.get(x, y).unwrap(), Cell::new(ch, fg, bg));
        }

        #[test]
        fn out_of_bounds_write_changes_nothing(
            w in 1u16..40, h in 1u16..20,
            x in -100i32..100, y in -100i32..100,
        ) {
            prop_assume!(x < 0 || y < 0 || x >= w as i32 || y >= h as i32);
            let mut buf = Buffer::new(w, h).unwrap();
            buf.set_string("seed", 0, 0, Some(Color::Red), None);
            let before = buf.clone();
            buf.set_char(x, y, '@', Some(Color::Yellow), Some(Color::Blue));
            prop_assert_eq!(buf, before);
        }

        #[test]
        fn clear_blanks_everything(
            w in 1u16..40, h in 1u16..20,
            writes in proptest::collection::vec((0i32..40, 0i32..20, any::<char>()), 0..50),
        ) {
            let mut buf = Buffer::new(w, h).unwrap();
            for (x, y, ch) in writes {
                buf.set_char(x, y, ch, Some(Color::Magenta), Some(Color::Cyan));
            }
            buf.clear();
            prop_assert!(buf.content().iter().all(|c| *c == Cell::blank()));
            buf.clear();
            prop_assert!(buf.content().iter().all(|c| *c == Cell::blank()));
        }
    }
}

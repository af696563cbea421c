// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use crate::{
    error::{GridError, Result},
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeySource},
    render::{adapter::Adapter, buffer::Buffer, style::Color},
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent,
        KeyEventKind as CKeyEventKind, KeyModifiers as CKeyModifiers,
    },
    execute, queue,
    style::{Color as CColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use std::{
    any::Any,
    io::{self, BufWriter, IsTerminal, Write},
    panic,
    sync::atomic::{AtomicBool, Ordering},
};
use unicode_width::UnicodeWidthChar;

/// Set while raw mode is on, read by the panic hook.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

impl From<Color> for CColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => CColor::Black,
            Color::Red => CColor::DarkRed,
            Color::Green => CColor::DarkGreen,
            Color::Yellow => CColor::DarkYellow,
            Color::Blue => CColor::DarkBlue,
            Color::Magenta => CColor::DarkMagenta,
            Color::Cyan => CColor::DarkCyan,
            Color::Gray => CColor::Grey,
            Color::DarkGray => CColor::DarkGrey,
            Color::LightRed => CColor::Red,
            Color::LightGreen => CColor::Green,
            Color::LightBlue => CColor::Blue,
            Color::LightYellow => CColor::Yellow,
            Color::LightMagenta => CColor::Magenta,
            Color::LightCyan => CColor::Cyan,
            Color::White => CColor::White,
        }
    }
}

pub struct CrosstermAdapter {
    pub writer: Box<dyn Write + Send>,
    active: bool,
}

impl CrosstermAdapter {
    pub fn new() -> Self {
        Self {
            writer: Box::new(BufWriter::new(io::stdout())),
            active: false,
        }
    }
}

impl Default for CrosstermAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for CrosstermAdapter {
    fn init(&mut self, w: u16, h: u16) -> Result<()> {
        if !io::stdout().is_terminal() {
            return Err(GridError::NotATerminal);
        }
        // check terminal size, the grid never resizes so it has to fit now
        let (width, height) = terminal::size()?;
        if w > width || h > height {
            return Err(GridError::TerminalTooSmall {
                need_w: w,
                need_h: h,
                have_w: width,
                have_h: height,
            });
        }
        install_panic_hook();
        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        self.active = true;
        execute!(self.writer, EnterAlternateScreen)?;
        self.hide_cursor()?;
        info!("terminal ready {}x{} for grid {}x{}", width, height, w, h);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
        self.show_cursor()?;
        execute!(self.writer, ResetColor, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    fn flush(&mut self, buf: &Buffer, x: u16, y: u16) -> Result<()> {
        let mut fg: Option<Color> = None;
        let mut bg: Option<Color> = None;
        for (row, cells) in buf.rows().enumerate() {
            queue!(self.writer, MoveTo(x, y + row as u16))?;
            for cell in cells {
                if fg != Some(cell.fg()) {
                    queue!(self.writer, SetForegroundColor(cell.fg().into()))?;
                    fg = Some(cell.fg());
                }
                if bg != Some(cell.bg()) {
                    queue!(self.writer, SetBackgroundColor(cell.bg().into()))?;
                    bg = Some(cell.bg());
                }
                queue!(self.writer, Print(printable(cell.glyph)))?;
            }
        }
        queue!(self.writer, ResetColor)?;
        self.writer
            .flush()
            .map_err(|e| GridError::Sink(e.to_string()))
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        execute!(self.writer, MoveTo(x, y))?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.writer, Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.writer, Show)?;
        Ok(())
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

impl Drop for CrosstermAdapter {
    fn drop(&mut self) {
        // best effort, the terminal may already be gone
        let _ = self.reset();
    }
}

/// One grid cell must take exactly one terminal column. Control chars, zero
/// width marks and wide glyphs would shift the rest of the row, so they
/// print as a space.
fn printable(glyph: char) -> char {
    if glyph.width() == Some(1) {
        glyph
    } else {
        ' '
    }
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);
    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
        original_hook(panic_info);
    }));
}

/// Blocking key source over `crossterm::event::read`.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        loop {
            if let CEvent::Key(key) = crossterm::event::read()? {
                return Ok(Some(key_event_from_cross(&key)));
            }
        }
    }
}

/// Convert crossterm key events to the unified KeyEvent.
pub fn key_event_from_cross(key: &CKeyEvent) -> KeyEvent {
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::F(n) => KeyCode::F(n),
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => KeyCode::Other,
    };
    let mut modifiers = KeyModifiers::NONE;
    if key.modifiers.contains(CKeyModifiers::SHIFT) {
        modifiers |= KeyModifiers::SHIFT;
    }
    if key.modifiers.contains(CKeyModifiers::CONTROL) {
        modifiers |= KeyModifiers::CONTROL;
    }
    if key.modifiers.contains(CKeyModifiers::ALT) {
        modifiers |= KeyModifiers::ALT;
    }
    if key.modifiers.contains(CKeyModifiers::SUPER) {
        modifiers |= KeyModifiers::SUPER;
    }
    let kind = match key.kind {
        CKeyEventKind::Press => KeyEventKind::Press,
        CKeyEventKind::Repeat => KeyEventKind::Repeat,
        CKeyEventKind::Release => KeyEventKind::Release,
    };
    KeyEvent::new_with_kind(code, modifiers, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn flush_prints_every_cell() {
        let out = Shared::default();
        let mut ad = CrosstermAdapter {
            writer: Box::new(out.clone()),
            active: false,
        };
        let mut buf = Buffer::new(4, 2).unwrap();
        buf.set_string("ab", 0, 0, Some(Color::LightGreen), None);
        buf.set_char(3, 1, '\u{7}', None, None);
        ad.flush(&buf, 0, 0).unwrap();

        let bytes = out.0.lock().unwrap().clone();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("ab"));
        // the bell was replaced
        assert!(!text.contains('\u{7}'));
        // both rows were addressed
        assert!(text.contains("\u{1b}[1;1H"));
        assert!(text.contains("\u{1b}[2;1H"));
    }

    #[test]
    fn wide_glyphs_keep_the_row_aligned() {
        assert_eq!(printable('a'), 'a');
        assert_eq!(printable('█'), '█');
        assert_eq!(printable('中'), ' ');
        assert_eq!(printable('\u{301}'), ' ');
        assert_eq!(printable('\t'), ' ');

        let out = Shared::default();
        let mut ad = CrosstermAdapter {
            writer: Box::new(out.clone()),
            active: false,
        };
        let mut buf = Buffer::new(3, 1).unwrap();
        buf.set_string("a中b", 0, 0, None, None);
        ad.flush(&buf, 0, 0).unwrap();
        let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("a b"));
        assert!(!text.contains('中'));
    }

    #[test]
    fn reset_shows_cursor_and_leaves_alternate_screen() {
        let out = Shared::default();
        let mut ad = CrosstermAdapter {
            writer: Box::new(out.clone()),
            active: true,
        };
        ad.reset().unwrap();
        let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("\u{1b}[?25h"));
        assert!(text.contains("\u{1b}[?1049l"));
        // a second reset writes nothing more
        let len = text.len();
        ad.reset().unwrap();
        assert_eq!(out.0.lock().unwrap().len(), len);
    }

    #[test]
    fn reset_before_init_is_a_no_op() {
        let mut ad = CrosstermAdapter {
            writer: Box::new(Shared::default()),
            active: false,
        };
        assert!(ad.reset().is_ok());
    }

    #[test]
    fn converts_crossterm_keys() {
        let k = CKeyEvent::new(CKeyCode::F(3), CKeyModifiers::NONE);
        assert_eq!(key_event_from_cross(&k), KeyEvent::from(KeyCode::F(3)));

        let k = CKeyEvent::new_with_kind(CKeyCode::Esc, CKeyModifiers::SHIFT, CKeyEventKind::Release);
        let e = key_event_from_cross(&k);
        assert_eq!(e.code, KeyCode::Esc);
        assert!(e.modifiers.contains(KeyModifiers::SHIFT));
        assert!(e.is_release());

        let k = CKeyEvent::new(CKeyCode::Home, CKeyModifiers::NONE);
        assert_eq!(key_event_from_cross(&k).code, KeyCode::Other);
    }

    #[test]
    fn palette_maps_to_distinct_terminal_colors() {
        let mut seen = std::collections::HashSet::new();
        for c in crate::render::style::PALETTE {
            assert!(seen.insert(format!("{:?}", CColor::from(c))));
        }
    }
}

// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! The adapter is everything the render loop needs from the platform:
//! one-time setup of the display, the per-frame flush of the whole grid, and
//! cursor placement. The loop never talks to the terminal directly.
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │              Render Loop               │
//! │  clear ─► compose (Render, fps) ─► flush│
//! └────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌────────────────────────────────────────┐
//! │           Adapter Interface            │
//! │  ┌──────────────┐   ┌──────────────┐   │
//! │  │  Crossterm   │   │  (caller's)  │   │
//! │  │   Adapter    │   │   adapters   │   │
//! │  └──────────────┘   └──────────────┘   │
//! └────────────────────────────────────────┘
//! ```

use crate::{error::Result, render::buffer::Buffer};
use std::any::Any;

/// Crossterm adapter module - terminal text-mode display sink and key source
#[cfg(feature = "term")]
pub mod cross;

pub trait Adapter {
    /// One-shot platform setup for a `w` x `h` grid: check the host, take
    /// over the screen, hide the cursor. Runs before the first flush.
    fn init(&mut self, w: u16, h: u16) -> Result<()>;

    /// Undo `init`. Safe to call more than once.
    fn reset(&mut self) -> Result<()>;

    /// Transfer the complete grid, row-major, with its top-left corner at
    /// (x, y) on the display.
    fn flush(&mut self, buf: &Buffer, x: u16, y: u16) -> Result<()>;

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    fn as_any(&mut self) -> &mut dyn Any;
}

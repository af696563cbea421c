// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! grid_console is a fixed-size character grid renderer for the terminal.
//!
//! A Buffer of Cells (glyph + packed 16-color fg/bg) is cleared, composed
//! and flushed to the display once per loop iteration. A background input
//! listener toggles the fps readout and requests exit through shared atomic
//! flags, and a two-slot frame timer smooths the fps estimate.
//!
//! Text Mode: built with crossterm, runs in the terminal (feature `term`).
//! Without `term` only the core is compiled and the caller supplies the
//! Adapter and the KeySource.
//!
//! There is no scrollback, no dirty-region update and no runtime resize:
//! every frame redraws the whole grid.

/// default grid width in cells
pub const DEFAULT_WIDTH: u16 = 120;

/// default grid height in cells
pub const DEFAULT_HEIGHT: u16 = 30;

/// length of one frame timer slot, in milliseconds
pub const FPS_WINDOW_MS: f32 = 1000.0;

/// grid configuration loaded from toml
pub mod config;

/// public variables handed to Render every frame
pub mod context;

/// crate error type
pub mod error;

/// runtime flags, key events and the input listener
pub mod event;

/// owns buffer and timer, encapsulates the render loop
pub mod game;

/// log
#[cfg(feature = "term")]
pub mod log;

/// Render module.
/// adapter: display sink interface (crossterm).
/// cell: a base drawing unit i.e. a character.
/// buffer: a vector comprised of cells, the frame grid.
/// style: the 16-color palette and packed attributes.
pub mod render;

/// two-slot fps accumulator
pub mod timer;

pub use error::{GridError, Result};

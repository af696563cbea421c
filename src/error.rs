// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Crate error type. Every variant is fatal to the render loop; out-of-bounds
//! writes are not errors and never show up here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid size {width}x{height}, both sides must be positive")]
    InvalidSize { width: u16, height: u16 },

    #[error("stdout is not an interactive terminal")]
    NotATerminal,

    #[error(
        "terminal too small: render requires {need_w}x{need_h}, terminal is {have_w}x{have_h}"
    )]
    TerminalTooSmall {
        need_w: u16,
        need_h: u16,
        have_w: u16,
        have_h: u16,
    },

    #[error("display sink failed: {0}")]
    Sink(String),

    #[error("failed to load config '{}': {msg}", path.display())]
    Config { path: PathBuf, msg: String },

    #[error("unknown key name '{0}'")]
    InvalidKey(String),

    #[error("failed to init log: {0}")]
    Log(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;

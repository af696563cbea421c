// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Grid configuration.
//!
//! Loaded from a toml file; every field is optional and falls back to the
//! defaults below. Command line flags are applied on top by the binary.
//!
//! ```toml
//! width = 120
//! height = 30
//! show_fps = true
//! fps_fg = "LightGreen"
//! fps_bg = "Black"
//! toggle_fps_key = "F3"
//! quit_key = "Esc"
//! log_level = "info"
//! log_file = "log/grid_console.log"
//! ```

use crate::{
    error::{GridError, Result},
    event::KeyBindings,
    render::style::Color,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
    pub show_fps: bool,
    pub fps_fg: Color,
    pub fps_bg: Color,
    pub toggle_fps_key: String,
    pub quit_key: String,
    pub log_level: String,
    pub log_file: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_fps: false,
            fps_fg: Color::LightGreen,
            fps_bg: Color::Black,
            toggle_fps_key: "F3".to_string(),
            quit_key: "Esc".to_string(),
            log_level: "info".to_string(),
            log_file: format!("log{}grid_console.log", std::path::MAIN_SEPARATOR),
        }
    }
}

impl GridConfig {
    /// Defaults when `path` is None or the file does not exist. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) if p.exists() => p,
            _ => return Ok(Self::default()),
        };
        let content = std::fs::read_to_string(path).map_err(|e| GridError::Config {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            GridError::Config { msg, .. } => GridError::Config {
                path: path.to_path_buf(),
                msg,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GridError::Config {
            path: Default::default(),
            msg: e.to_string(),
        })
    }

    /// Command line values win over the file. A flag that was not given
    /// keeps the file value, so `show_fps` can only be switched on here.
    pub fn apply_overrides(
        &mut self,
        width: Option<u16>,
        height: Option<u16>,
        show_fps: bool,
        log_level: Option<&str>,
    ) {
        if let Some(w) = width {
            self.width = w;
        }
        if let Some(h) = height {
            self.height = h;
        }
        self.show_fps |= show_fps;
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
    }

    /// Checks everything the render loop would otherwise fail on later.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        self.key_bindings()?;
        self.level_filter()?;
        Ok(())
    }

    pub fn key_bindings(&self) -> Result<KeyBindings> {
        KeyBindings::from_names(&self.toggle_fps_key, &self.quit_key)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse().map_err(|_| GridError::Config {
            path: Default::default(),
            msg: format!("unknown log level '{}'", self.log_level),
        })
    }
}

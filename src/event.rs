// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Runtime flags shared between the render loop and the input listener,
//! plus the listener itself.
//!
//! The listener is one dedicated thread blocked on `KeySource::next_key`.
//! It is the only writer of `RuntimeFlags`; the render loop only reads them,
//! once per frame. Both flags are single atomics, so a read is never torn and
//! a toggle shows up at the latest one frame late.

use crate::error::Result;
use log::{error, info};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread::{self, JoinHandle},
};

mod input;
pub use input::*;

#[derive(Debug, Default)]
pub struct RuntimeFlags {
    show_fps: AtomicBool,
    exit: AtomicBool,
}

impl RuntimeFlags {
    pub fn new(show_fps: bool) -> Self {
        Self {
            show_fps: AtomicBool::new(show_fps),
            exit: AtomicBool::new(false),
        }
    }

    pub fn show_fps(&self) -> bool {
        self.show_fps.load(Ordering::Acquire)
    }

    pub fn set_show_fps(&self, on: bool) {
        self.show_fps.store(on, Ordering::Release);
    }

    /// Flips the fps flag, returns the new state.
    pub fn toggle_fps(&self) -> bool {
        !self.show_fps.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn exit_requested(&self) -> bool {
        self.exit.load(Ordering::Acquire)
    }

    pub fn request_exit(&self) {
        self.exit.store(true, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ToggleFps,
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle_fps: KeyCode,
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    /// F3 toggles the fps readout, Escape quits
    fn default() -> Self {
        Self {
            toggle_fps: KeyCode::F(3),
            quit: KeyCode::Esc,
        }
    }
}

impl KeyBindings {
    pub fn from_names(toggle_fps: &str, quit: &str) -> Result<Self> {
        Ok(Self {
            toggle_fps: toggle_fps.parse()?,
            quit: quit.parse()?,
        })
    }

    /// Releases never map to an action.
    pub fn action(&self, key: &KeyEvent) -> KeyAction {
        if key.is_release() {
            KeyAction::None
        } else if key.code == self.quit {
            KeyAction::Quit
        } else if key.code == self.toggle_fps {
            KeyAction::ToggleFps
        } else {
            KeyAction::None
        }
    }
}

/// Blocking source of key events.
pub trait KeySource: Send {
    /// Blocks until the next key event. `Ok(None)` means the source is
    /// closed and no more keys will come.
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Keys fed from another thread. A dropped sender closes the source.
impl KeySource for mpsc::Receiver<KeyEvent> {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.recv().ok())
    }
}

/// Applies one key to the flags. Returns false once the listener should stop.
pub fn handle_key(key: &KeyEvent, bindings: &KeyBindings, flags: &RuntimeFlags) -> bool {
    match bindings.action(key) {
        KeyAction::ToggleFps => {
            let on = flags.toggle_fps();
            info!("fps display {}", if on { "on" } else { "off" });
            true
        }
        KeyAction::Quit => {
            info!("quit key pressed");
            flags.request_exit();
            false
        }
        KeyAction::None => true,
    }
}

/// Spawns the input listener thread. It runs until the quit key, until the
/// source closes, or until the source fails; a failing source also requests
/// exit since the quit key could no longer be seen.
pub fn spawn_input_listener<K>(
    mut source: K,
    bindings: KeyBindings,
    flags: Arc<RuntimeFlags>,
) -> Result<JoinHandle<()>>
where
    K: KeySource + 'static,
{
    let handle = thread::Builder::new()
        .name("input".to_string())
        .spawn(move || loop {
            match source.next_key() {
                Ok(Some(key)) => {
                    if !handle_key(&key, &bindings, &flags) {
                        break;
                    }
                }
                Ok(None) => {
                    info!("key source closed");
                    break;
                }
                Err(e) => {
                    error!("key source failed: {}", e);
                    flags.request_exit();
                    break;
                }
            }
        })?;
    Ok(handle)
}

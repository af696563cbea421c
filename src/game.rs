// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Game owns the frame buffer and the frame timer and runs the render loop.
//!
//! Every iteration: measure dt, sample the timer (fps display on only),
//! clear the whole buffer, let the Render compose, put the fps readout on
//! top, flush the grid to the adapter and park the cursor at the origin.
//! The loop is not rate limited, it runs as fast as the adapter accepts frames.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> Result<(), Box<dyn Error>> {
//!    init_log(log::LevelFilter::Info, "log/grid_console.log")?;
//!    let flags = Arc::new(RuntimeFlags::new(false));
//!    let mut g = Game::new(Box::new(CrosstermAdapter::new()), MyRender::new(), flags);
//!    let r = g.start(120, 30, CrosstermKeys, KeyBindings::default());
//!    g.context.adapter.reset()?;
//!    r?;
//!    Ok(())
//! }
//! ```

use crate::{
    context::Context,
    error::Result,
    event::{spawn_input_listener, KeyBindings, KeySource, RuntimeFlags},
    render::{adapter::Adapter, buffer::Buffer, style::Color},
    timer::FrameTimer,
};
use log::{error, info};
use std::{sync::Arc, time::Instant};

/// Millisecond time source for frame timing.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock, milliseconds since creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// The Render interface. `draw` runs on a freshly cleared buffer every
/// frame, before the fps readout is composed on top.
pub trait Render {
    fn init(&mut self, _ctx: &mut Context) {}
    fn draw(&mut self, ctx: &mut Context, buf: &mut Buffer, dt: f32);
}

/// Draws nothing, the grid only shows the fps readout.
impl Render for () {
    fn draw(&mut self, _ctx: &mut Context, _buf: &mut Buffer, _dt: f32) {}
}

pub struct Game<R, C = SystemClock>
where
    R: Render,
    C: Clock,
{
    pub context: Context,
    pub render: R,
    buffer: Option<Buffer>,
    timer: FrameTimer,
    running: bool,
    clock: C,
    last_frame: f64,
    fps_fg: Color,
    fps_bg: Color,
}

impl<R> Game<R, SystemClock>
where
    R: Render,
{
    pub fn new(adapter: Box<dyn Adapter>, render: R, flags: Arc<RuntimeFlags>) -> Self {
        Self::with_clock(adapter, render, flags, SystemClock::new())
    }
}

impl<R, C> Game<R, C>
where
    R: Render,
    C: Clock,
{
    pub fn with_clock(adapter: Box<dyn Adapter>, render: R, flags: Arc<RuntimeFlags>, clock: C) -> Self {
        Self {
            context: Context::new(adapter, flags),
            render,
            buffer: None,
            timer: FrameTimer::new(),
            running: false,
            clock,
            last_frame: 0.0,
            fps_fg: Color::LightGreen,
            fps_bg: Color::Black,
        }
    }

    /// Colors of the "fps: N" readout.
    pub fn set_fps_colors(&mut self, fg: Color, bg: Color) {
        self.fps_fg = fg;
        self.fps_bg = bg;
    }

    pub fn is_started(&self) -> bool {
        self.buffer.is_some()
    }

    /// True once `start` has entered the loop.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// One-time setup: allocate the buffer and init the adapter. Returns
    /// false, doing nothing, once the game has already been set up.
    pub fn init(&mut self, width: u16, height: u16) -> Result<bool> {
        if self.is_started() {
            info!("init ignored, grid already set up");
            return Ok(false);
        }
        info!("Init grid {}x{}...", width, height);
        let buffer = Buffer::new(width, height)?;
        self.context.adapter.init(width, height)?;
        self.context.width = width;
        self.context.height = height;
        self.buffer = Some(buffer);
        self.last_frame = self.clock.now_ms();
        self.render.init(&mut self.context);
        info!("grid {}x{} ready", width, height);
        Ok(true)
    }

    /// Sets up (unless `init` already did), starts the input listener on
    /// `keys` and runs the loop until exit is requested. Only the first call
    /// runs the loop, later calls are no-ops.
    pub fn start<K>(&mut self, width: u16, height: u16, keys: K, bindings: KeyBindings) -> Result<()>
    where
        K: KeySource + 'static,
    {
        if self.running {
            info!("start ignored, already running");
            return Ok(());
        }
        self.init(width, height)?;
        self.running = true;
        // detached: it sits in a blocking read until the process ends
        let _listener = spawn_input_listener(keys, bindings, self.context.flags.clone())?;
        self.run()
    }

    /// Main loop. Returns Ok once exit is requested, or the first adapter error.
    pub fn run(&mut self) -> Result<()> {
        info!("Begin run...");
        loop {
            if self.context.flags.exit_requested() {
                info!("exit requested after {} frames", self.context.stage);
                return Ok(());
            }
            self.on_tick()?;
        }
    }

    /// One frame: time, clear, compose, flush.
    pub fn on_tick(&mut self) -> Result<()> {
        let now = self.clock.now_ms();
        let dt = (now - self.last_frame) as f32;
        self.last_frame = now;

        let buf = match self.buffer.as_mut() {
            Some(b) => b,
            None => return Ok(()),
        };

        let show_fps = self.context.flags.show_fps();
        if show_fps {
            self.timer.sample(dt);
        }

        self.context.stage += 1;
        buf.clear();
        self.render.draw(&mut self.context, buf, dt);
        if show_fps {
            let fps = self.timer.fps().unwrap_or(0);
            buf.set_string(format!("fps: {}", fps), 0, 0, Some(self.fps_fg), Some(self.fps_bg));
        }

        if let Err(e) = self.context.adapter.flush(buf, 0, 0) {
            error!("flush failed: {}", e);
            return Err(e);
        }
        self.context.adapter.set_cursor(0, 0)
    }

    /// Soft-clipped write into the frame buffer, no-op before setup.
    pub fn set_char(&mut self, x: i32, y: i32, glyph: char, fg: Option<Color>, bg: Option<Color>) {
        if let Some(buf) = self.buffer.as_mut() {
            buf.set_char(x, y, glyph, fg, bg);
        }
    }

    /// Soft-clipped string write into the frame buffer, no-op before setup.
    pub fn set_string<S>(&mut self, s: S, x: i32, y: i32, fg: Option<Color>, bg: Option<Color>)
    where
        S: AsRef<str>,
    {
        if let Some(buf) = self.buffer.as_mut() {
            buf.set_string(s, x, y, fg, bg);
        }
    }
}

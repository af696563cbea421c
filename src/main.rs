// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use clap::Parser;
use grid_console::{
    config::GridConfig,
    context::Context,
    event::RuntimeFlags,
    game::{Game, Render},
    log::init_log,
    render::{
        adapter::cross::{CrosstermAdapter, CrosstermKeys},
        buffer::Buffer,
        style::{Color, PALETTE},
    },
    Result,
};
use log::{error, info};
use std::{path::PathBuf, process, sync::Arc};

#[derive(Parser, Debug)]
#[command(name = "grid_console")]
#[command(version, about = "Fixed-size character grid renderer for the terminal", long_about = None)]
struct Args {
    /// Config file path
    #[arg(long, short, default_value = "grid_console.toml")]
    config: PathBuf,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u16>,

    /// Show the fps readout from the first frame
    #[arg(long)]
    show_fps: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

/// Test pattern: one swatch per palette color plus a key hint on the last row.
struct PaletteRender {
    hint: String,
}

impl Render for PaletteRender {
    fn draw(&mut self, ctx: &mut Context, buf: &mut Buffer, _dt: f32) {
        for (i, color) in PALETTE.iter().enumerate() {
            let y = 2 + i as i32;
            let fg = if color.index() < 8 && *color != Color::Gray {
                Color::White
            } else {
                Color::Black
            };
            buf.set_string(format!(" {:2} {:<13}", i, color.name()), 2, y, Some(fg), Some(*color));
        }
        buf.set_string(&self.hint, 2, ctx.height as i32 - 1, Some(Color::DarkGray), None);
    }
}

fn merge_args(args: &Args) -> Result<GridConfig> {
    let mut cfg = GridConfig::load(Some(args.config.as_path()))?;
    cfg.apply_overrides(args.width, args.height, args.show_fps, args.log_level.as_deref());
    cfg.validate()?;
    Ok(cfg)
}

fn run(cfg: &GridConfig) -> Result<()> {
    if let Some(dir) = std::path::Path::new(&cfg.log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    init_log(cfg.level_filter()?, &cfg.log_file)?;
    info!("grid_console {} starting, {:?}", env!("CARGO_PKG_VERSION"), cfg);

    let flags = Arc::new(RuntimeFlags::new(cfg.show_fps));
    let render = PaletteRender {
        hint: format!("{}: fps  {}: quit", cfg.toggle_fps_key, cfg.quit_key),
    };
    let mut g = Game::new(Box::new(CrosstermAdapter::new()), render, flags);
    g.set_fps_colors(cfg.fps_fg, cfg.fps_bg);

    let r = g.start(cfg.width, cfg.height, CrosstermKeys, cfg.key_bindings()?);
    // the terminal is restored before any error is reported
    let reset = g.context.adapter.reset();
    if let Err(e) = &r {
        error!("render loop failed: {}", e);
    }
    r?;
    reset?;
    info!("bye");
    Ok(())
}

fn main() {
    let args = Args::parse();
    let result = merge_args(&args).and_then(|cfg| run(&cfg));
    if let Err(e) = result {
        eprintln!("grid_console: {}", e);
        process::exit(1);
    }
}

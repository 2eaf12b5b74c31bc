//! blobhop level viewer
//!
//! Opens a level description, sizes the window from its platforms and draws
//! it every frame. `R` reloads the file (re-rolling unseeded random hops),
//! `Escape` quits.

use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::*;

use blobhop::logging::{init_logging, LoggingConfig};
use blobhop::render::{LevelView, MacroquadCanvas};
use blobhop::world::{defaults, load_description, GeneratorConfig, Level, LevelError};

#[derive(Parser, Debug)]
#[command(name = "blobhop", version, about = "View a platformer level file")]
struct Cli {
    /// Level description (JSON)
    level: PathBuf,

    /// Seed for a randomHops generator that has none
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width used when the level has no platforms
    #[arg(long, default_value_t = defaults::canvas::WIDTH)]
    width: f32,

    /// Canvas height used when the level has no platforms
    #[arg(long, default_value_t = defaults::canvas::HEIGHT)]
    height: f32,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Timestamp log lines
    #[arg(long)]
    timestamps: bool,
}

fn load(cli: &Cli) -> Result<Level, LevelError> {
    let mut desc = load_description(&cli.level)?;
    if let (Some(seed), Some(GeneratorConfig::RandomHops(params))) =
        (cli.seed, desc.generated.as_mut())
    {
        params.seed.get_or_insert(seed);
    }

    let level = Level::build(&desc);
    let (w, h) = level.canvas_size(cli.width, cli.height);
    log::info!(
        "loaded '{}': {} platforms, canvas {}x{}",
        level.name,
        level.platforms.len(),
        w,
        h
    );
    Ok(level)
}

fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        filter: cli.log.clone(),
        timestamps: cli.timestamps,
    });

    let level = match load(&cli) {
        Ok(level) => level,
        Err(e) => {
            log::error!("{}: {}", cli.level.display(), e);
            std::process::exit(1);
        }
    };

    let (w, h) = level.canvas_size(cli.width, cli.height);
    let conf = Conf {
        window_title: format!("blobhop - {}", level.name),
        window_width: w.ceil() as i32,
        window_height: h.ceil() as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    };

    macroquad::Window::from_config(conf, run(cli, level));
}

async fn run(cli: Cli, mut level: Level) {
    let mut view = LevelView::new(&level);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if is_key_pressed(KeyCode::R) {
            match load(&cli) {
                Ok(reloaded) => {
                    level = reloaded;
                    view = LevelView::new(&level);
                }
                Err(e) => log::error!("reload failed, keeping current level: {}", e),
            }
        }

        let (w, h) = level.canvas_size(cli.width, cli.height);
        let mut canvas = MacroquadCanvas::fit(w, h);
        view.draw_world(&mut canvas);
        view.draw_spawn(&mut canvas);

        // Hover readout
        let (mx, my) = mouse_position();
        if let Some(i) = view.platform_at(mx / canvas.scale, my / canvas.scale) {
            let r = level.platforms[i];
            let label = format!("#{} x:{} y:{} w:{} h:{}", i, r.x, r.y, r.w, r.h);
            draw_text(&label, 8.0, 20.0, 20.0, BLACK);
        }

        next_frame().await;
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use raylib::prelude::*;

use carousel::Carousel;
use carousel::config::Config;
use carousel::constants::FPS;
use carousel::texture_loader::load_sorted_image_paths;
use carousel::viewer::Viewer;

/// Show the images of a directory as a carousel.
///
/// Right/Left or clicking the window edges steps through the slides, 1-9 or
/// clicking a dot jumps to a slide, Space pauses autoplay.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the slide images
    image_directory: PathBuf,

    /// Configuration file (defaults to ./carousel.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Autoplay interval in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Do not advance automatically
    #[arg(long)]
    no_autoplay: bool,
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("carousel", LevelFilter::Info)
            .init();
    }
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(interval_ms) = args.interval_ms {
        config.interval_ms = interval_ms;
    }
    if args.no_autoplay {
        config.autoplay = false;
    }
    config.validate()?;

    // List the slides before opening a window so a bad directory fails fast.
    let image_paths = load_sorted_image_paths(&args.image_directory)?;

    let (mut rl, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut viewer = Viewer::new(Carousel::from_config(&config));
    if !viewer.initialize(&mut rl, &thread, image_paths) {
        bail!("none of the images in {} could be loaded", args.image_directory.display());
    }
    if config.autoplay {
        viewer.carousel_mut().start_autoplay(config.interval());
    }

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        viewer.update(&mut rl, dt);
        viewer.render_frame(&mut rl, &thread);
    }

    log::info!("window closed");
    Ok(())
}

#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use clap::Parser;
use minicad::{Config, launch};

/// Place points, lines, rectangles and circles from the console or with the mouse
#[derive(Parser, Debug)]
#[command(name = "minicad", version)]
struct Args {
    /// JSON config file (window size, colors, hint font)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run the console only, without opening a window
    #[arg(long)]
    headless: bool,
}

fn main() -> minicad::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if args.headless {
        launch::run_headless()
    } else {
        launch::run_windowed(config)
    }
}

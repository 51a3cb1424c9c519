mod app;
mod config;
mod error;
mod imaging;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::ImageViewerApp;
use clap::Parser;
use eframe::egui;

/// Small image viewer with grayscale, Fourier and distance tools.
#[derive(Parser, Debug)]
#[command(name = "image-viewer", version, about)]
struct Cli {
    /// Image to open at start-up.
    image: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    log::debug!("Using {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Image Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(ImageViewerApp::new(config, cli.image)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the viewer window")
}

//! Native viewer for the particle network
//!
//! Run with: cargo run --features native --bin neural-canvas
//!
//! Environment:
//! - `NEURAL_CANVAS_CONFIG`: path to a JSON network config
//! - `NEURAL_CANVAS_SEED`: fixed u64 seed for a reproducible layout

use eframe::egui;
use neural_canvas::app::NeuralCanvasApp;
use neural_canvas::core::{entropy_seed, NetworkConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,neural_canvas=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("NEURAL_CANVAS_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading network config");
            NetworkConfig::from_path(&path)?
        }
        Err(_) => NetworkConfig::default(),
    };

    let seed = match std::env::var("NEURAL_CANVAS_SEED") {
        Ok(raw) => raw.parse::<u64>()?,
        Err(_) => entropy_seed()?,
    };
    info!(seed, "Starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Neural Canvas"),
        ..Default::default()
    };

    eframe::run_native(
        "neural-canvas",
        options,
        Box::new(move |cc| Ok(Box::new(NeuralCanvasApp::new(cc, config, seed)))),
    )?;
    Ok(())
}

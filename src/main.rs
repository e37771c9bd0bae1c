#![warn(clippy::all, rust_2018_idioms)]

use eframe_grid_paint::{GridConfig, GridPaintApp};

const CONFIG_ENV: &str = "GRID_PAINT_CONFIG";

/// Config path from the first argument or the environment, defaults otherwise
fn load_config() -> GridConfig {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    let Some(path) = path else {
        return GridConfig::default();
    };
    match GridConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Using default config, could not load {}: {}", path, err);
            GridConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pixel Painter",
        native_options,
        Box::new(move |cc| Ok(Box::new(GridPaintApp::new(cc, config)?))),
    )
}

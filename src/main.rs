//! Gobang GUI
//!
//! Play against the AI or another player. An optional TOML config path may
//! be given as the first argument.

use std::path::PathBuf;

use gobang::ui::GomokuApp;
use gobang::AppConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load_or_default(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default configuration");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };
    log::info!(
        "board {0}x{0}, search depth {1}",
        config.engine.board_size,
        config.engine.search_depth
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}

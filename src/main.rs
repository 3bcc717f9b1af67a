mod app;
mod brands;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::DashboardApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Data directory: first CLI argument, else the current directory. Holds
    // horsepower.json, dataset.json, and the assets/ logo images.
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CO2 Dashboard",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the png logos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(data_dir)))
        }),
    )
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console in release
// Entry point stays minimal: logger, config, window options, app start.

use eframe::egui;

mod app;
mod logger;
mod routes;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::config::load_config_from_disk();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Movie Cards")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([420.0, 360.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Movie Cards",
        native_options,
        Box::new(|cc| Ok(Box::new(app::MovieCardsApp::new(cc)))),
    )
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod model;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::AppSettings::load();
    tracing::info!(timezone = %settings.calendar.timezone, "starting habit calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Habit Calendar"),
        ..Default::default()
    };

    eframe::run_native(
        "Habit Calendar",
        options,
        Box::new(|cc| Ok(Box::new(app::HabitApp::new(cc, settings)))),
    )
}

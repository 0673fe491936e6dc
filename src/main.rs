// Week Grid Application
// Main entry point

use anyhow::anyhow;
use week_grid::models::settings::GridSettings;
use week_grid::services::settings::{default_settings_path, SettingsService};
use week_grid::ui_egui::WeekGridApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Week Grid");

    let settings_service = SettingsService::new(default_settings_path());
    let settings = settings_service.get().unwrap_or_else(|err| {
        log::warn!("Failed to load settings, using defaults: {:#}", err);
        GridSettings::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Week Grid",
        options,
        Box::new(move |cc| Ok(Box::new(WeekGridApp::new(cc, settings, settings_service)))),
    )
    .map_err(|err| anyhow!("eframe exited with an error: {}", err))
}

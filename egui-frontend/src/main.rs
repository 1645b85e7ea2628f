use eframe::egui;
use log::{error, info};

mod app;
mod ui;

use app::BankingApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting banking mock-up egui application");

    // Window sized to fit the simulated phone frame with some desktop margin
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 880.0])
            .with_min_inner_size([460.0, 840.0])
            .with_title("Banking App")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Banking App",
        options,
        Box::new(|_cc| match BankingApp::new() {
            Ok(app) => {
                info!("Successfully initialized banking app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}

mod app;
mod color;
mod data;
mod state;
mod ui;

use app::PenguinDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The bundled dataset must load; a broken data file is fatal.
    let table = match data::loader::load_embedded() {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load bundled dataset: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} penguins", table.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguins dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(table)))),
    )
}

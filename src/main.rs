use eframe::egui;

use capdeck::prefs::{self, Prefs};

mod app;

use app::DeckApp;

fn main() {
    env_logger::init();

    let prefs_path = prefs::default_path();
    let loaded = match Prefs::load(&prefs_path) {
        Ok(prefs) => prefs,
        Err(e) => {
            log::warn!("{}; starting with defaults", e);
            Prefs::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Capability Deck",
        options,
        Box::new(move |cc| Ok(Box::new(DeckApp::new(&cc.egui_ctx, prefs_path, &loaded)))),
    )
    .expect("Failed to start Capability Deck");
}

//! Header strip for `DeckApp`.
//!
//! Draws the title, the connectivity indicator, the install button, the
//! dark-mode toggle, and the stats toggle.

use eframe::egui;

use capdeck::state::DeckAction;

use super::DeckApp;

impl DeckApp {
    /// Render the top strip. Returns the actions the user triggered.
    pub fn draw_header(&mut self, ui: &mut egui::Ui) -> Vec<DeckAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.heading("Capability Deck");

            // Connectivity dot
            let (dot_color, status) = if self.state.online {
                (egui::Color32::from_rgb(76, 175, 80), "Online")
            } else {
                (egui::Color32::from_rgb(244, 67, 54), "Offline")
            };
            ui.label(egui::RichText::new("\u{25CF}").color(dot_color));
            ui.label(egui::RichText::new(status).size(12.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut self.show_stats, "Stats");

                // Dark mode toggle
                let theme_label = if self.state.dark_mode {
                    "\u{263E}"
                } else {
                    "\u{2600}"
                };
                if ui.button(theme_label).clicked() {
                    actions.push(DeckAction::ToggleDarkMode);
                }

                if self.state.install.is_available() {
                    if ui.button("Install as App").clicked() {
                        actions.push(DeckAction::InstallAccepted);
                    }
                } else {
                    ui.label(egui::RichText::new("Installed").size(12.0).weak());
                }
            });
        });

        actions
    }

    /// Render the interaction counters.
    pub fn draw_stats_panel(&self, ui: &mut egui::Ui) {
        let stats = &self.state.stats;

        ui.heading("Interactions");
        ui.separator();
        ui.label(format!("Swipes left: {}", stats.swipes_left));
        ui.label(format!("Swipes right: {}", stats.swipes_right));
        ui.label(format!("Below threshold: {}", stats.gestures_ignored));
        ui.separator();
        ui.label(format!("Validations: {}", stats.validations_run));
        ui.label(format!("Connectivity probes: {}", stats.probes_run));
        ui.separator();
        ui.label(
            egui::RichText::new(format!("Total swipes: {}", stats.swipes_total())).strong(),
        );
    }
}

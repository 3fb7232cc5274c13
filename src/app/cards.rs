//! The capability card grid.
//!
//! Ten cards, one per demonstrated capability, laid out in a column grid
//! that reflows with the window width (which is itself the first card's
//! demonstration).

use eframe::egui;

use capdeck::forms;
use capdeck::platform::camera;
use capdeck::platform::notify::Permission;
use capdeck::platform::Capability;
use capdeck::state::DeckAction;

#[cfg(feature = "net-probe")]
use capdeck::platform::connectivity;

use super::DeckApp;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 80, 80);
const OK_COLOR: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);

/// Window width below which the grid drops to a single column.
const NARROW_WIDTH: f32 = 700.0;

impl DeckApp {
    /// Render the card grid. Returns the actions the user triggered.
    pub fn draw_cards(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> Vec<DeckAction> {
        let mut actions = Vec::new();

        let width = ui.available_width();
        let ncols = if width < NARROW_WIDTH { 1 } else { 2 };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.columns(ncols, |cols| {
                // Cards alternate across the columns in reading order.
                let mut slot = 0;
                let mut next = || {
                    let i = slot % ncols;
                    slot += 1;
                    i
                };

                let i = next();
                self.card_responsive(&mut cols[i], width, ncols);
                let i = next();
                self.card_theme(&mut cols[i], &mut actions);
                let i = next();
                self.card_storage(&mut cols[i], &mut actions);
                let i = next();
                self.card_geolocation(&mut cols[i], ctx);
                let i = next();
                self.card_camera(&mut cols[i], &mut actions);
                let i = next();
                self.card_form(&mut cols[i], &mut actions);
                let i = next();
                self.card_notifications(&mut cols[i], &mut actions);
                let i = next();
                self.card_connectivity(&mut cols[i]);
                let i = next();
                self.card_install(&mut cols[i], &mut actions);
                let i = next();
                self.card_gestures(&mut cols[i]);
            });
        });

        actions
    }

    fn card_responsive(&self, ui: &mut egui::Ui, width: f32, ncols: usize) {
        card(ui, "1. Responsive Layout", |ui| {
            ui.label("The deck reflows with the window. Resize it and the grid adapts.");
            ui.add_space(4.0);
            ui.label(format!("Width: {:.0} px — {} column(s)", width, ncols));
        });
    }

    fn card_theme(&self, ui: &mut egui::Ui, actions: &mut Vec<DeckAction>) {
        card(ui, "2. Dark Mode", |ui| {
            ui.label("Toggle between light and dark themes. Your preference is saved.");
            ui.add_space(4.0);
            let label = if self.state.dark_mode {
                "\u{2600} Light Mode"
            } else {
                "\u{263E} Dark Mode"
            };
            if ui.button(label).clicked() {
                actions.push(DeckAction::ToggleDarkMode);
            }
        });
    }

    fn card_storage(&mut self, ui: &mut egui::Ui, actions: &mut Vec<DeckAction>) {
        card(ui, "3. Local Persistence", |ui| {
            ui.label("This value survives closing the app.");
            ui.add_space(4.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.state.demo_value)
                    .hint_text("Type something..."),
            );
            if ui.button("Save").clicked() {
                actions.push(DeckAction::SaveDemoValue);
            }
        });
    }

    #[cfg(feature = "net-probe")]
    fn card_geolocation(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let pending = self.location_pending();
        let mut lookup = false;

        card(ui, "4. Geolocation", |ui| {
            ui.label("Resolve this machine's position (IP-based).");
            ui.add_space(4.0);

            if ui.add_enabled(!pending, egui::Button::new("Get Location")).clicked() {
                lookup = true;
            }
            if pending {
                ui.label("Looking up...");
            }

            match &self.state.location {
                Some(Capability::Granted(fix)) => {
                    ui.label(format!("Lat: {:.6}", fix.lat));
                    ui.label(format!("Lng: {:.6}", fix.lon));
                }
                Some(Capability::Denied(reason)) => {
                    ui.colored_label(ERROR_COLOR, reason.as_str());
                }
                Some(Capability::Unsupported) => {
                    ui.label("Not supported on this host");
                }
                None => {}
            }
        });

        if lookup {
            self.start_location_lookup(ctx);
        }
    }

    #[cfg(not(feature = "net-probe"))]
    fn card_geolocation(&mut self, ui: &mut egui::Ui, _ctx: &egui::Context) {
        card(ui, "4. Geolocation", |ui| {
            ui.label("Not supported in this build (net-probe feature disabled).");
        });
    }

    fn card_camera(&self, ui: &mut egui::Ui, actions: &mut Vec<DeckAction>) {
        card(ui, "5. Camera", |ui| {
            ui.label("Ask whether a capture device exists. No stream is opened.");
            ui.add_space(4.0);
            if ui.button("Probe Camera").clicked() {
                actions.push(DeckAction::CameraProbed(camera::probe()));
            }
            if let Some(capability) = &self.state.camera {
                match capability {
                    Capability::Granted(device) => {
                        ui.colored_label(OK_COLOR, format!("Found {}", device.path));
                    }
                    Capability::Denied(reason) => {
                        ui.colored_label(ERROR_COLOR, reason.as_str());
                    }
                    Capability::Unsupported => {
                        ui.label("Not supported on this host");
                    }
                }
            }
        });
    }

    fn card_form(&mut self, ui: &mut egui::Ui, actions: &mut Vec<DeckAction>) {
        card(ui, "6. Form Validation", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.state.form.name)
                    .hint_text(format!("Name (min {} chars)", forms::MIN_NAME_LEN)),
            );
            if let Some(message) = self.state.form_errors.name {
                ui.colored_label(ERROR_COLOR, message);
            }

            ui.add(egui::TextEdit::singleline(&mut self.state.form.email).hint_text("Email"));
            if let Some(message) = self.state.form_errors.email {
                ui.colored_label(ERROR_COLOR, message);
            }

            if ui.button("Validate").clicked() {
                actions.push(DeckAction::ValidateForm);
            }
        });
    }

    fn card_notifications(&self, ui: &mut egui::Ui, actions: &mut Vec<DeckAction>) {
        card(ui, "7. Notifications", |ui| {
            let permission = self.state.notifications.permission();
            let status = match permission {
                Permission::Default => "Permission not requested yet",
                Permission::Granted => "Enabled",
                Permission::Denied => "Denied by the platform",
            };
            ui.label(status);
            ui.add_space(4.0);

            let askable = permission == Permission::Default;
            if ui
                .add_enabled(askable, egui::Button::new("Enable Notifications"))
                .clicked()
            {
                actions.push(DeckAction::RequestNotifications);
            }
        });
    }

    fn card_connectivity(&self, ui: &mut egui::Ui) {
        card(ui, "8. Offline Detection", |ui| {
            ui.label("A background probe watches reachability; the header dot follows it.");
            ui.add_space(4.0);
            if self.state.online {
                ui.colored_label(OK_COLOR, "Online");
            } else {
                ui.colored_label(ERROR_COLOR, "Offline");
            }
            #[cfg(feature = "net-probe")]
            ui.label(format!(
                "Probing every {}s",
                connectivity::PROBE_INTERVAL.as_secs()
            ));
            #[cfg(not(feature = "net-probe"))]
            ui.label("Probe disabled in this build");
        });
    }

    fn card_install(&self, ui: &mut egui::Ui, actions: &mut Vec<DeckAction>) {
        card(ui, "9. Install", |ui| {
            ui.label("Add the deck to your applications.");
            ui.add_space(4.0);
            let label = if self.state.install.is_available() {
                "Install App"
            } else {
                "Already Installed / Not Available"
            };
            if ui.button(label).clicked() {
                actions.push(DeckAction::InstallAccepted);
            }
        });
    }

    fn card_gestures(&self, ui: &mut egui::Ui) {
        card(ui, "10. Touch Gestures", |ui| {
            ui.label("Swipe left or right anywhere on the deck.");
            ui.add_space(4.0);
            ui.label(format!(
                "Recognized so far: {} left, {} right",
                self.state.stats.swipes_left, self.state.stats.swipes_right
            ));
        });
    }
}

/// One framed card with a heading.
fn card(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).size(18.0).strong());
        ui.add_space(6.0);
        body(ui);
    });
    ui.add_space(8.0);
}

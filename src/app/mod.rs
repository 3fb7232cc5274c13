//! `DeckApp` — the top-level egui application state.
//!
//! This module declares the `DeckApp` struct and its frame loop.
//! Drawing is split across the sibling sub-modules:
//!
//! - `header` — title strip: connectivity dot, install button, theme toggle
//! - `cards`  — the capability card grid and the stats side panel

pub mod cards;
pub mod header;

use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;

use capdeck::gesture::swipe::SwipeRecognizer;
use capdeck::prefs::Prefs;
use capdeck::state::{DeckAction, DeckState};

#[cfg(feature = "net-probe")]
use std::sync::mpsc;

#[cfg(feature = "net-probe")]
use capdeck::platform::connectivity;
#[cfg(feature = "net-probe")]
use capdeck::platform::geo::{GeoFix, GeolocationSource, IpGeolocation};
#[cfg(feature = "net-probe")]
use capdeck::platform::Capability;

// ─── Application state ───────────────────────────────────────────────────────

pub struct DeckApp {
    pub state: DeckState,
    pub recognizer: SwipeRecognizer,
    pub show_stats: bool,
    prefs_path: PathBuf,
    #[cfg(feature = "net-probe")]
    net_rx: mpsc::Receiver<bool>,
    #[cfg(feature = "net-probe")]
    geo_rx: Option<mpsc::Receiver<Capability<GeoFix>>>,
}

impl DeckApp {
    pub fn new(ctx: &egui::Context, prefs_path: PathBuf, prefs: &Prefs) -> Self {
        #[cfg(not(feature = "net-probe"))]
        let _ = ctx;

        let mut state = DeckState::from_prefs(prefs);
        // The host reports its install prompt as a single boolean; on this
        // host a fresh window always has one to offer.
        state.apply(DeckAction::InstallAvailable(true), Instant::now());

        Self {
            state,
            recognizer: SwipeRecognizer::new(),
            show_stats: false,
            prefs_path,
            #[cfg(feature = "net-probe")]
            net_rx: spawn_connectivity_monitor(ctx.clone()),
            #[cfg(feature = "net-probe")]
            geo_rx: None,
        }
    }

    /// Feed raw pointer/touch events into the swipe recognizer.
    ///
    /// Touch input also arrives as synthesized pointer presses; the
    /// recognizer's overwrite-on-start and stray-end rules make the
    /// duplicates harmless.
    fn handle_swipe_input(&mut self, ctx: &egui::Context, now: Instant) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if pressed {
                        self.recognizer.on_start(pos.x);
                    } else {
                        let result = self.recognizer.on_end(pos.x);
                        self.state.apply(DeckAction::SwipeRecognized(result), now);
                    }
                }
                egui::Event::Touch { phase, pos, .. } => match phase {
                    egui::TouchPhase::Start => self.recognizer.on_start(pos.x),
                    egui::TouchPhase::End => {
                        let result = self.recognizer.on_end(pos.x);
                        self.state.apply(DeckAction::SwipeRecognized(result), now);
                    }
                    egui::TouchPhase::Cancel => {
                        // Cancelled interactions end the session with no indicator.
                        let _ = self.recognizer.on_end(pos.x);
                    }
                    egui::TouchPhase::Move => {}
                },
                _ => {}
            }
        }
    }

    /// Poll the background probe channels and turn results into actions.
    #[cfg(feature = "net-probe")]
    fn check_probes(&mut self, now: Instant) {
        while let Ok(online) = self.net_rx.try_recv() {
            self.state.apply(DeckAction::ConnectivityChanged(online), now);
        }

        let resolved = match &self.geo_rx {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        if let Some(capability) = resolved {
            self.geo_rx = None;
            self.state.apply(DeckAction::LocationResolved(capability), now);
        }
    }

    /// Kick off one IP-geolocation lookup on a worker thread.
    #[cfg(feature = "net-probe")]
    pub fn start_location_lookup(&mut self, ctx: &egui::Context) {
        if self.geo_rx.is_some() {
            return; // one lookup at a time
        }

        let (tx, rx) = mpsc::channel();
        self.geo_rx = Some(rx);

        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let fix = IpGeolocation::new().current_fix();
            let _ = tx.send(fix);
            ctx.request_repaint();
        });
    }

    #[cfg(feature = "net-probe")]
    pub fn location_pending(&self) -> bool {
        self.geo_rx.is_some()
    }

    /// Flush preferences when the reducer marked them dirty.
    fn flush_prefs(&mut self) {
        if !self.state.prefs_dirty {
            return;
        }
        if let Err(e) = self.state.prefs().save(&self.prefs_path) {
            log::warn!("{}", e);
        }
        self.state.prefs_dirty = false;
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        #[cfg(feature = "net-probe")]
        self.check_probes(now);

        self.handle_swipe_input(ctx, now);
        self.state.notice.poll(now);

        // Apply dark/light visuals
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            actions.extend(self.draw_header(ui));
        });

        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_stats_panel(ui);
                });
        }

        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(self.draw_cards(ui, &ctx_clone));
        });

        for action in actions {
            self.state.apply(action, now);
        }

        self.flush_prefs();
        self.draw_notice_overlay(ctx);

        // Wake up again exactly when the indicator is due to clear.
        if let Some(deadline) = self.state.notice.deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}

impl DeckApp {
    /// Centered transient indicator ("Swiped Left", save confirmations, …).
    fn draw_notice_overlay(&self, ctx: &egui::Context) {
        let Some(text) = self.state.notice.visible() else {
            return;
        };

        egui::Area::new(egui::Id::new("notice_overlay"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .inner_margin(egui::Margin::symmetric(24.0, 16.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(text).size(24.0).strong());
                    });
            });
    }
}

/// Re-probe reachability at a fixed cadence for the lifetime of the app.
#[cfg(feature = "net-probe")]
fn spawn_connectivity_monitor(ctx: egui::Context) -> mpsc::Receiver<bool> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || loop {
        let online = connectivity::probe(connectivity::DEFAULT_PROBE_URL);
        if tx.send(online).is_err() {
            break; // app is gone
        }
        ctx.request_repaint();
        std::thread::sleep(connectivity::PROBE_INTERVAL);
    });

    rx
}

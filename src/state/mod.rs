//! Application state and its reducer.
//!
//! Everything the cards display lives in one [`DeckState`]. Discrete
//! events are [`DeckAction`] values fed through [`DeckState::apply`];
//! the UI layer dispatches actions and renders from the state it gets
//! back. Text fields bind directly to state strings (immediate-mode
//! editing); anything with a consequence goes through the reducer.
//!
//! The reducer never touches the disk or the network itself: persisted
//! fields flip `prefs_dirty` and the host flushes, probes report back in
//! as actions.

use std::time::Instant;

use crate::forms::{self, FormData, FormErrors};
use crate::gesture::notice::NoticeBoard;
use crate::gesture::swipe::SwipeResult;
use crate::platform::camera::CameraDevice;
use crate::platform::notify::{Notifications, Permission};
use crate::platform::{Capability, InstallPrompt};
use crate::prefs::Prefs;
use crate::stats::DeckStats;

#[cfg(feature = "net-probe")]
use crate::platform::geo::GeoFix;

/// Discrete events the deck reacts to.
#[derive(Debug)]
pub enum DeckAction {
    ToggleDarkMode,
    /// Persist the demo value currently in the storage card.
    SaveDemoValue,
    ValidateForm,
    /// A completed gesture session, classified by the recognizer.
    SwipeRecognized(SwipeResult),
    ConnectivityChanged(bool),
    CameraProbed(Capability<CameraDevice>),
    RequestNotifications,
    InstallAvailable(bool),
    InstallAccepted,
    #[cfg(feature = "net-probe")]
    LocationResolved(Capability<GeoFix>),
}

/// The single application state struct.
pub struct DeckState {
    pub dark_mode: bool,
    /// The storage card's text field; persisted on explicit save.
    pub demo_value: String,
    pub form: FormData,
    pub form_errors: FormErrors,
    pub online: bool,
    pub camera: Option<Capability<CameraDevice>>,
    pub notifications: Notifications,
    pub install: InstallPrompt,
    pub notice: NoticeBoard,
    pub stats: DeckStats,
    /// Set when a persisted field changed; the host clears it on flush.
    pub prefs_dirty: bool,
    #[cfg(feature = "net-probe")]
    pub location: Option<Capability<GeoFix>>,
}

impl DeckState {
    /// Build the initial state from loaded preferences.
    pub fn from_prefs(prefs: &Prefs) -> Self {
        Self {
            dark_mode: prefs.dark_mode,
            demo_value: prefs.demo_value.clone(),
            form: FormData::default(),
            form_errors: FormErrors::default(),
            online: true,
            camera: None,
            notifications: Notifications::new(),
            install: InstallPrompt::new(),
            notice: NoticeBoard::new(),
            stats: DeckStats::new(),
            prefs_dirty: false,
            #[cfg(feature = "net-probe")]
            location: None,
        }
    }

    /// Snapshot of the persisted fields, for flushing to disk.
    pub fn prefs(&self) -> Prefs {
        Prefs {
            dark_mode: self.dark_mode,
            demo_value: self.demo_value.clone(),
        }
    }

    /// The reducer: apply one action at `now`.
    pub fn apply(&mut self, action: DeckAction, now: Instant) {
        match action {
            DeckAction::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                self.prefs_dirty = true;
            }

            DeckAction::SaveDemoValue => {
                self.prefs_dirty = true;
                self.notice.show("Saved to local storage", now);
            }

            DeckAction::ValidateForm => {
                self.form_errors = forms::validate(&self.form);
                self.stats.validations_run += 1;
                if self.form_errors.is_clean() {
                    self.notice.show("Form is valid ✓", now);
                }
            }

            DeckAction::SwipeRecognized(result) => {
                match result {
                    SwipeResult::Left { .. } => self.stats.swipes_left += 1,
                    SwipeResult::Right { .. } => self.stats.swipes_right += 1,
                    SwipeResult::None => self.stats.gestures_ignored += 1,
                }
                if let Some(label) = result.label() {
                    self.notice.show(label, now);
                }
            }

            DeckAction::ConnectivityChanged(online) => {
                if self.online != online {
                    log::info!("Connectivity: {}", if online { "online" } else { "offline" });
                }
                self.online = online;
                self.stats.probes_run += 1;
            }

            DeckAction::CameraProbed(capability) => {
                let text = match &capability {
                    Capability::Granted(device) => {
                        format!("Camera found: {}", device.path)
                    }
                    Capability::Denied(reason) => format!("Camera denied: {}", reason),
                    Capability::Unsupported => "Camera probe unsupported here".to_string(),
                };
                self.notice.show(text, now);
                self.camera = Some(capability);
            }

            DeckAction::RequestNotifications => {
                let permission = self.notifications.request();
                if permission == Permission::Granted {
                    if let Some(text) = self.notifications.deliver("Notifications are now enabled") {
                        self.notice.show(text, now);
                    }
                }
            }

            DeckAction::InstallAvailable(available) => {
                self.install.relay(available);
            }

            DeckAction::InstallAccepted => {
                if self.install.accept() {
                    self.notice.show("Installed", now);
                } else {
                    self.notice
                        .show("Already installed or prompt not available", now);
                }
            }

            #[cfg(feature = "net-probe")]
            DeckAction::LocationResolved(capability) => {
                if let Capability::Denied(ref reason) = capability {
                    self.notice.show(format!("Location: {}", reason), now);
                }
                self.location = Some(capability);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::notice::NOTICE_DURATION;
    use std::time::Duration;

    fn fresh() -> DeckState {
        DeckState::from_prefs(&Prefs::default())
    }

    #[test]
    fn toggle_dark_mode_marks_prefs_dirty() {
        let mut state = fresh();
        assert!(!state.dark_mode);

        state.apply(DeckAction::ToggleDarkMode, Instant::now());
        assert!(state.dark_mode);
        assert!(state.prefs_dirty);
        assert!(state.prefs().dark_mode);
    }

    #[test]
    fn save_demo_value_persists_and_confirms() {
        let mut state = fresh();
        state.demo_value = "hello".to_string();

        state.apply(DeckAction::SaveDemoValue, Instant::now());
        assert!(state.prefs_dirty);
        assert_eq!(state.prefs().demo_value, "hello");
        assert_eq!(state.notice.visible(), Some("Saved to local storage"));
    }

    #[test]
    fn swipe_shows_indicator_and_counts() {
        let now = Instant::now();
        let mut state = fresh();

        state.apply(
            DeckAction::SwipeRecognized(SwipeResult::Left { magnitude: 60.0 }),
            now,
        );
        assert_eq!(state.notice.visible(), Some("Swiped Left"));
        assert_eq!(state.stats.swipes_left, 1);

        // None results show nothing and replace nothing.
        state.apply(DeckAction::SwipeRecognized(SwipeResult::None), now);
        assert_eq!(state.notice.visible(), Some("Swiped Left"));
        assert_eq!(state.stats.gestures_ignored, 1);
    }

    #[test]
    fn second_swipe_restarts_indicator_countdown() {
        let t0 = Instant::now();
        let mut state = fresh();

        state.apply(
            DeckAction::SwipeRecognized(SwipeResult::Left { magnitude: 60.0 }),
            t0,
        );
        let t1 = t0 + Duration::from_millis(1500);
        state.apply(
            DeckAction::SwipeRecognized(SwipeResult::Right { magnitude: 70.0 }),
            t1,
        );

        state.notice.poll(t0 + NOTICE_DURATION + Duration::from_millis(100));
        assert_eq!(state.notice.visible(), Some("Swiped Right"));

        state.notice.poll(t1 + NOTICE_DURATION);
        assert_eq!(state.notice.visible(), None);
    }

    #[test]
    fn validate_form_routes_through_reducer() {
        let now = Instant::now();
        let mut state = fresh();
        state.form.name = "Ada".to_string();
        state.form.email = "bad".to_string();

        state.apply(DeckAction::ValidateForm, now);
        assert!(state.form_errors.email.is_some());
        assert_eq!(state.notice.visible(), None);

        state.form.email = "ada@lovelace.dev".to_string();
        state.apply(DeckAction::ValidateForm, now);
        assert!(state.form_errors.is_clean());
        assert_eq!(state.notice.visible(), Some("Form is valid ✓"));
        assert_eq!(state.stats.validations_run, 2);
    }

    #[test]
    fn connectivity_transitions() {
        let now = Instant::now();
        let mut state = fresh();
        assert!(state.online);

        state.apply(DeckAction::ConnectivityChanged(false), now);
        assert!(!state.online);
        state.apply(DeckAction::ConnectivityChanged(true), now);
        assert!(state.online);
        assert_eq!(state.stats.probes_run, 2);
    }

    #[test]
    fn notification_request_delivers_welcome() {
        let now = Instant::now();
        let mut state = fresh();

        state.apply(DeckAction::RequestNotifications, now);
        assert_eq!(state.notifications.permission(), Permission::Granted);
        assert_eq!(state.notice.visible(), Some("Notifications are now enabled"));
    }

    #[test]
    fn denied_notifications_deliver_nothing() {
        let now = Instant::now();
        let mut state = fresh();
        state.notifications = Notifications::with_permission(Permission::Denied);

        state.apply(DeckAction::RequestNotifications, now);
        assert_eq!(state.notice.visible(), None);
    }

    #[test]
    fn install_accept_consumes_availability() {
        let now = Instant::now();
        let mut state = fresh();

        state.apply(DeckAction::InstallAvailable(true), now);
        assert!(state.install.is_available());

        state.apply(DeckAction::InstallAccepted, now);
        assert_eq!(state.notice.visible(), Some("Installed"));
        assert!(!state.install.is_available());

        state.apply(DeckAction::InstallAccepted, now);
        assert_eq!(
            state.notice.visible(),
            Some("Already installed or prompt not available")
        );
    }

    #[cfg(feature = "net-probe")]
    #[test]
    fn location_results_land_in_state() {
        let now = Instant::now();
        let mut state = fresh();

        state.apply(
            DeckAction::LocationResolved(Capability::Granted(GeoFix {
                lat: 1.0,
                lon: 2.0,
            })),
            now,
        );
        assert!(matches!(state.location, Some(Capability::Granted(_))));

        state.apply(
            DeckAction::LocationResolved(Capability::Denied("refused".into())),
            now,
        );
        assert_eq!(state.notice.visible(), Some("Location: refused"));
    }
}

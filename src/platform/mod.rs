//! Platform capability providers.
//!
//! Permission-gated platform features are consumed through
//! [`Capability`], which separates "granted with a payload", "denied
//! with a reason", and "unsupported here" so the UI and logic can be
//! exercised without real hardware or network.
//!
//! - `camera`       — capture device probe
//! - `notify`       — notification permission machine
//! - `connectivity` — online/offline reachability probe (`net-probe`)
//! - `geo`          — IP-based geolocation lookup (`net-probe`)

pub mod camera;
pub mod notify;

#[cfg(feature = "net-probe")]
pub mod connectivity;

#[cfg(feature = "net-probe")]
pub mod geo;

/// Outcome of asking the platform for a capability.
#[derive(Debug, Clone, PartialEq)]
pub enum Capability<T> {
    /// Available; carries the provider's payload.
    Granted(T),
    /// The platform refused, with a human-readable reason.
    Denied(String),
    /// This build or host has no such capability.
    Unsupported,
}

impl<T> Capability<T> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Capability::Granted(_))
    }

    /// Short status word for card footers.
    pub fn status_label(&self) -> &'static str {
        match self {
            Capability::Granted(_) => "granted",
            Capability::Denied(_) => "denied",
            Capability::Unsupported => "unsupported",
        }
    }
}

/// Relay for the host's install-to-desktop prompt.
///
/// The platform reports availability as a single boolean; accepting the
/// prompt consumes it. Nothing of the prompt lifecycle beyond that is
/// modeled.
#[derive(Debug, Default)]
pub struct InstallPrompt {
    available: bool,
}

impl InstallPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what the platform reported.
    pub fn relay(&mut self, available: bool) {
        self.available = available;
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Accept the prompt. Returns false (and does nothing) when none is
    /// available.
    pub fn accept(&mut self) -> bool {
        if self.available {
            self.available = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_status_labels() {
        assert_eq!(Capability::Granted(()).status_label(), "granted");
        assert_eq!(
            Capability::<()>::Denied("no".into()).status_label(),
            "denied"
        );
        assert_eq!(Capability::<()>::Unsupported.status_label(), "unsupported");
    }

    #[test]
    fn install_prompt_relays_one_boolean() {
        let mut prompt = InstallPrompt::new();
        assert!(!prompt.is_available());
        assert!(!prompt.accept());

        prompt.relay(true);
        assert!(prompt.is_available());
        assert!(prompt.accept()); // consumes availability
        assert!(!prompt.is_available());
        assert!(!prompt.accept());
    }
}

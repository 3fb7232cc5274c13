//! Notification permission machine.
//!
//! Mirrors the three-state web permission model: `Default` (not yet
//! asked), `Granted`, `Denied`. Delivery itself is out of scope; a
//! granted channel hands its message back to the host, which surfaces it
//! through the shared notice overlay.

/// Permission state for the notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Not asked yet.
    Default,
    Granted,
    Denied,
}

/// The host's notification channel.
pub struct Notifications {
    permission: Permission,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            permission: Permission::Default,
        }
    }

    /// A channel whose permission is already decided (test doubles,
    /// policy-locked hosts).
    pub fn with_permission(permission: Permission) -> Self {
        Self { permission }
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Ask for permission. Asking resolves `Default` on this host; a
    /// prior `Denied` stays denied — re-prompting is the platform's
    /// decision, not ours.
    pub fn request(&mut self) -> Permission {
        if self.permission == Permission::Default {
            self.permission = Permission::Granted;
            log::info!("Notification permission granted");
        }
        self.permission
    }

    /// Hand back `text` for delivery when the channel is granted.
    pub fn deliver<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self.permission {
            Permission::Granted => Some(text),
            _ => None,
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

//! Platform notification dispatcher contract.
//!
//! # Responsibility
//! - Describe the capability and permission surface of the host notifier.
//! - Carry the rendered notification payload to the host.
//!
//! # Invariants
//! - Callers dispatch only while `permission_state()` is `Granted`.
//! - A permission request resolves exactly once; there is no retry.

use serde::{Deserialize, Serialize};

/// Rendered user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Current notification permission as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    /// Host has no notification support at all.
    Unsupported,
    /// User has not answered a permission prompt yet.
    #[default]
    Default,
    Granted,
    Denied,
}

/// Resolution of one permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionOutcome {
    Granted,
    Denied,
    /// Prompt dismissed without an answer.
    Default,
}

/// Host-side notifier.
pub trait NotificationDispatcher {
    fn permission_state(&self) -> PermissionState;

    fn is_supported(&self) -> bool {
        self.permission_state() != PermissionState::Unsupported
    }

    /// Prompts the user once. Only called when `is_supported()` holds.
    fn request_permission(&mut self) -> PermissionOutcome;

    fn dispatch(&mut self, notification: &Notification);
}

/// Dispatcher for hosts without notification support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedDispatcher;

impl NotificationDispatcher for UnsupportedDispatcher {
    fn permission_state(&self) -> PermissionState {
        PermissionState::Unsupported
    }

    fn request_permission(&mut self) -> PermissionOutcome {
        PermissionOutcome::Denied
    }

    fn dispatch(&mut self, _notification: &Notification) {}
}

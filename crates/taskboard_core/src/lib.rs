//! Core state and rules for the taskboard application.
//! This crate is the single source of truth for task, contact and alert
//! invariants; hosts render its state and forward user actions to it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::{ShellConfig, DEFAULT_FEEDBACK_DURATION};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactDraft, ContactId};
pub use model::screen::Screen;
pub use model::task::{Priority, Task, TaskFilter, TaskId, TaskValidationError};
pub use notify::dispatcher::{
    Notification, NotificationDispatcher, PermissionOutcome, PermissionState,
    UnsupportedDispatcher,
};
pub use notify::tracker::{AlertRequest, AlertTracker, ReleasePolicy};
pub use repo::settings_repo::{
    RepoError, RepoResult, SettingsRepository, SqliteSettingsRepository, DARK_MODE_KEY,
};
pub use service::app_shell::{AppShell, PermissionRequestResult};
pub use service::directory::ContactDirectory;
pub use service::feedback::{Feedback, FeedbackSlot, FeedbackToken};
pub use service::task_board::{TaskBoard, TaskProgress};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

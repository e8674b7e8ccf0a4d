//! Shell configuration.

use crate::notify::tracker::ReleasePolicy;
use std::time::Duration;

/// How long a feedback message stays visible before the host expires it.
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_secs(3);

/// Startup options for `AppShell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// When alerted tasks become eligible to alert again.
    pub release_policy: ReleasePolicy,
    /// Display window the host should wait before calling `expire_feedback`.
    pub feedback_duration: Duration,
    /// Start with the demo tasks and contacts instead of empty lists.
    pub seed_demo_data: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            release_policy: ReleasePolicy::default(),
            feedback_duration: DEFAULT_FEEDBACK_DURATION,
            seed_demo_data: true,
        }
    }
}

impl ShellConfig {
    /// Configuration with empty task and contact lists.
    pub fn empty() -> Self {
        Self {
            seed_demo_data: false,
            ..Self::default()
        }
    }
}

//! Application shell.
//!
//! # Responsibility
//! - Own task, contact, navigation, theme and feedback state.
//! - Route every task-set change through the alert tracker and forward
//!   new alerts to the notification dispatcher.
//! - Persist the theme flag on every change.
//!
//! # Invariants
//! - The tracker only advances while notification permission is granted,
//!   so no alert is marked as sent without being dispatched.
//! - Task and contact mutations never fail on unknown ids.

use crate::config::ShellConfig;
use crate::model::contact::{Contact, ContactDraft, ContactId};
use crate::model::screen::Screen;
use crate::model::task::{Priority, Task, TaskId, TaskValidationError};
use crate::notify::dispatcher::{NotificationDispatcher, PermissionOutcome, PermissionState};
use crate::notify::tracker::AlertTracker;
use crate::repo::settings_repo::{RepoResult, SettingsRepository};
use crate::seed;
use crate::service::directory::ContactDirectory;
use crate::service::feedback::{Feedback, FeedbackSlot, FeedbackToken};
use crate::service::task_board::TaskBoard;
use log::{debug, info};
use std::time::Duration;

const MSG_TASK_ADDED: &str = "Task added";
const MSG_TASK_DELETED: &str = "Task deleted";
const MSG_PRIORITY_UPDATED: &str = "Priority updated";
const MSG_COMPLETED_CLEARED: &str = "Completed tasks cleared";
const MSG_CONTACT_SAVED: &str = "Contact saved";
const MSG_NOTIFICATIONS_UNSUPPORTED: &str = "Notifications not supported";
const MSG_NOTIFICATIONS_ENABLED: &str = "Notifications enabled!";
const MSG_PERMISSION_DENIED: &str = "Permission denied";

/// Result of a user-initiated notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionRequestResult {
    /// Host cannot show notifications; no prompt was shown.
    Unsupported,
    Resolved(PermissionOutcome),
}

/// Single owner of application state.
pub struct AppShell<S: SettingsRepository, D: NotificationDispatcher> {
    board: TaskBoard,
    directory: ContactDirectory,
    screen: Screen,
    dark_mode: bool,
    feedback: FeedbackSlot,
    tracker: AlertTracker,
    feedback_duration: Duration,
    settings: S,
    dispatcher: D,
}

impl<S: SettingsRepository, D: NotificationDispatcher> AppShell<S, D> {
    /// Builds the shell, loading the persisted theme flag.
    ///
    /// Runs one reconciliation over the initial task set, so seeded urgent
    /// tasks alert immediately when permission is already granted.
    ///
    /// # Errors
    /// - Returns repository errors when the stored theme flag is unreadable.
    pub fn new(config: ShellConfig, settings: S, dispatcher: D) -> RepoResult<Self> {
        let dark_mode = settings.load_dark_mode()?;
        let (board, directory) = if config.seed_demo_data {
            (
                TaskBoard::from_tasks(seed::demo_tasks()),
                ContactDirectory::from_contacts(seed::demo_contacts()),
            )
        } else {
            (TaskBoard::new(), ContactDirectory::new())
        };

        let mut shell = Self {
            board,
            directory,
            screen: Screen::default(),
            dark_mode,
            feedback: FeedbackSlot::new(),
            tracker: AlertTracker::new(config.release_policy),
            feedback_duration: config.feedback_duration,
            settings,
            dispatcher,
        };

        info!(
            "event=shell_start module=shell status=ok tasks={} contacts={} dark_mode={} policy={:?}",
            shell.board.len(),
            shell.directory.len(),
            shell.dark_mode,
            shell.tracker.policy()
        );
        shell.reconcile_alerts();
        Ok(shell)
    }

    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn contacts(&self) -> &[Contact] {
        self.directory.contacts()
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn tracker(&self) -> &AlertTracker {
        &self.tracker
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Adds a task at the top of the board.
    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
    ) -> Result<TaskId, TaskValidationError> {
        let id = self.board.add(title, priority)?;
        debug!("event=task_add module=shell status=ok priority={priority:?}");
        self.show_feedback(MSG_TASK_ADDED);
        self.reconcile_alerts();
        Ok(id)
    }

    pub fn delete_task(&mut self, id: TaskId) {
        let removed = self.board.delete(id);
        debug!("event=task_delete module=shell status=ok removed={removed}");
        self.show_feedback(MSG_TASK_DELETED);
        self.reconcile_alerts();
    }

    pub fn set_priority(&mut self, id: TaskId, priority: Priority) {
        let found = self.board.set_priority(id, priority);
        debug!("event=task_priority module=shell status=ok found={found} priority={priority:?}");
        self.show_feedback(MSG_PRIORITY_UPDATED);
        self.reconcile_alerts();
    }

    pub fn toggle_complete(&mut self, id: TaskId) {
        let found = self.board.toggle_complete(id);
        debug!("event=task_toggle module=shell status=ok found={found}");
        self.reconcile_alerts();
    }

    pub fn clear_completed(&mut self) {
        let removed = self.board.clear_completed();
        debug!("event=task_clear_completed module=shell status=ok removed={removed}");
        self.show_feedback(MSG_COMPLETED_CLEARED);
        self.reconcile_alerts();
    }

    pub fn add_contact(&mut self, draft: ContactDraft) -> ContactId {
        let id = self.directory.add(draft);
        debug!(
            "event=contact_add module=shell status=ok contacts={}",
            self.directory.len()
        );
        self.show_feedback(MSG_CONTACT_SAVED);
        id
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn active_screen(&self) -> Screen {
        self.screen
    }

    pub fn header_title(&self) -> &'static str {
        self.screen.title()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Writes the theme flag through to storage, then applies it.
    ///
    /// # Errors
    /// - Returns repository errors; the in-memory flag is left unchanged.
    pub fn set_dark_mode(&mut self, enabled: bool) -> RepoResult<()> {
        self.settings.save_dark_mode(enabled)?;
        self.dark_mode = enabled;
        info!("event=theme_change module=shell status=ok dark_mode={enabled}");
        Ok(())
    }

    pub fn toggle_dark_mode(&mut self) -> RepoResult<()> {
        self.set_dark_mode(!self.dark_mode)
    }

    /// Asks the host for notification permission once.
    ///
    /// Every outcome is reported through the feedback slot. A denied or
    /// unsupported result is final for this request.
    pub fn request_notification_permission(&mut self) -> PermissionRequestResult {
        if !self.dispatcher.is_supported() {
            info!("event=notify_permission module=shell status=unsupported");
            self.show_feedback(MSG_NOTIFICATIONS_UNSUPPORTED);
            return PermissionRequestResult::Unsupported;
        }

        let outcome = self.dispatcher.request_permission();
        info!("event=notify_permission module=shell status=ok outcome={outcome:?}");
        match outcome {
            PermissionOutcome::Granted => self.show_feedback(MSG_NOTIFICATIONS_ENABLED),
            PermissionOutcome::Denied | PermissionOutcome::Default => {
                self.show_feedback(MSG_PERMISSION_DENIED)
            }
        }
        PermissionRequestResult::Resolved(outcome)
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.current()
    }

    /// How long the host should wait before calling `expire_feedback`.
    pub fn feedback_duration(&self) -> Duration {
        self.feedback_duration
    }

    /// Timer callback for a previously shown message.
    pub fn expire_feedback(&mut self, token: FeedbackToken) -> bool {
        self.feedback.expire(token)
    }

    fn show_feedback(&mut self, message: &str) {
        self.feedback.show(message);
    }

    fn reconcile_alerts(&mut self) {
        let permission = self.dispatcher.permission_state();
        if permission != PermissionState::Granted {
            debug!("event=alert_reconcile module=shell status=skipped permission={permission:?}");
            return;
        }

        let alerts = self.tracker.observe(self.board.tasks());
        for alert in &alerts {
            self.dispatcher.dispatch(&alert.to_notification());
            info!(
                "event=alert_dispatch module=shell status=ok task_id={}",
                alert.task_id
            );
        }
    }
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage with a short scripted session.
//! - Keep output deterministic apart from generated ids.

use log::info;
use taskboard_core::db::open_store_in_memory;
use taskboard_core::{
    core_version, default_log_level, init_logging, logging_status, AppShell, Notification,
    NotificationDispatcher, PermissionOutcome, PermissionState, Priority, ShellConfig,
    SqliteSettingsRepository, TaskFilter,
};

/// Prints notifications to stdout once permission is granted.
struct ConsoleDispatcher {
    state: PermissionState,
}

impl NotificationDispatcher for ConsoleDispatcher {
    fn permission_state(&self) -> PermissionState {
        self.state
    }

    fn request_permission(&mut self) -> PermissionOutcome {
        self.state = PermissionState::Granted;
        PermissionOutcome::Granted
    }

    fn dispatch(&mut self, notification: &Notification) {
        println!("notify title={:?} body={:?}", notification.title, notification.body);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("taskboard_core version={}", core_version());

    let log_dir = std::env::temp_dir().join("taskboard-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }
    if let Some((level, dir)) = logging_status() {
        println!("logging level={level} dir={}", dir.display());
    }

    let conn = open_store_in_memory()?;
    let dispatcher = ConsoleDispatcher {
        state: PermissionState::Default,
    };
    let mut shell = AppShell::new(
        ShellConfig::default(),
        SqliteSettingsRepository::new(&conn),
        dispatcher,
    )?;

    shell.request_notification_permission();
    shell.add_task("Prepare the usability test", Priority::High)?;
    shell.toggle_dark_mode()?;
    shell.clear_completed();

    let progress = shell.board().progress();
    println!(
        "tasks total={} active={} progress={}% dark_mode={} contacts={}",
        progress.total,
        shell.board().filtered(TaskFilter::Active).count(),
        progress.percent,
        shell.dark_mode(),
        shell.contacts().len()
    );
    if let Some(feedback) = shell.feedback() {
        println!("feedback={:?}", feedback.message);
    }
    info!("event=cli_smoke module=cli status=ok");
    Ok(())
}

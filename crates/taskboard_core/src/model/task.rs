//! Task domain model.
//!
//! # Responsibility
//! - Define the task record, its priority scale and list filters.
//! - Validate user-submitted titles before a task enters the board.
//!
//! # Invariants
//! - `id` is generated once and never reused for another task.
//! - `title` is trimmed and never empty.
//! - A task is urgent iff `priority == High && !completed`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Importance level chosen when a task is created or re-prioritized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All levels in ascending order, as offered by priority pickers.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// User-facing badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "Urgent",
        }
    }
}

/// Visibility filter for the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks only.
    Done,
}

impl TaskFilter {
    /// Returns whether `task` is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Done => task.completed,
        }
    }
}

/// One entry of the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    /// Creates an open task with a freshly generated id.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::EmptyTitle` when `title` is blank.
    pub fn new(title: &str, priority: Priority) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, priority)
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// Used by seed data and tests where identity is fixed up front.
    pub fn with_id(
        id: TaskId,
        title: &str,
        priority: Priority,
    ) -> Result<Self, TaskValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            completed: false,
            priority,
        })
    }

    /// Returns whether this task should raise an urgent alert.
    pub fn is_urgent(&self) -> bool {
        self.priority == Priority::High && !self.completed
    }
}

/// Validation errors for task creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

#[cfg(test)]
mod tests {
    use super::{Priority, Task, TaskFilter, TaskValidationError};

    #[test]
    fn new_task_is_open_and_trimmed() {
        let task = Task::new("  review slides  ", Priority::Low).expect("valid title");
        assert_eq!(task.title, "review slides");
        assert!(!task.completed);
        assert!(!task.id.is_nil());
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = Task::new(" \t ", Priority::High).expect_err("blank title must fail");
        assert_eq!(err, TaskValidationError::EmptyTitle);
    }

    #[test]
    fn urgency_requires_high_and_open() {
        let mut task = Task::new("call back", Priority::High).expect("valid title");
        assert!(task.is_urgent());

        task.completed = true;
        assert!(!task.is_urgent());

        task.completed = false;
        task.priority = Priority::Medium;
        assert!(!task.is_urgent());
    }

    #[test]
    fn filters_split_on_completion() {
        let mut done = Task::new("done", Priority::Low).expect("valid title");
        done.completed = true;
        let open = Task::new("open", Priority::Low).expect("valid title");

        assert!(TaskFilter::All.matches(&done) && TaskFilter::All.matches(&open));
        assert!(TaskFilter::Active.matches(&open) && !TaskFilter::Active.matches(&done));
        assert!(TaskFilter::Done.matches(&done) && !TaskFilter::Done.matches(&open));
    }

    #[test]
    fn default_priority_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::High.label(), "Urgent");
    }
}

//! In-memory task list.
//!
//! # Responsibility
//! - Apply add/delete/re-prioritize/toggle/clear mutations.
//! - Provide filtered views and completion progress.
//!
//! # Invariants
//! - New tasks are prepended; other mutations preserve relative order.
//! - Mutations addressed to unknown ids are silent no-ops.

use crate::model::task::{Priority, Task, TaskFilter, TaskId, TaskValidationError};

/// Completion summary shown above the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded completion percentage, `0` for an empty board.
    pub percent: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Full task set, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Creates an open task and places it at the top of the list.
    pub fn add(&mut self, title: &str, priority: Priority) -> Result<TaskId, TaskValidationError> {
        let task = Task::new(title, priority)?;
        let id = task.id;
        self.tasks.insert(0, task);
        Ok(id)
    }

    /// Returns whether a task was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Returns whether a task was found.
    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> bool {
        self.update(id, |task| task.priority = priority)
    }

    /// Returns whether a task was found.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        self.update(id, |task| task.completed = !task.completed)
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    pub fn filtered(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn progress(&self) -> TaskProgress {
        let completed = self.completed_count();
        let total = self.tasks.len();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        TaskProgress {
            completed,
            total,
            percent,
        }
    }

    fn update(&mut self, id: TaskId, apply: impl FnOnce(&mut Task)) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                apply(task);
                true
            }
            None => false,
        }
    }
}

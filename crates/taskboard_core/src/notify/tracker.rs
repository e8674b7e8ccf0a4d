//! Alert deduplication tracker.
//!
//! # Responsibility
//! - Track the set of task ids that already raised an urgent alert.
//! - Compute new alerts from a full snapshot of the current task set.
//!
//! # Invariants
//! - `reconcile` is a pure transition: (alerted-set, tasks) -> (alerted-set,
//!   alerts).
//! - Ids whose task is no longer present are always released.
//! - Alerts are emitted in the input order of the task snapshot.

use crate::model::task::{Task, TaskId};
use crate::notify::dispatcher::Notification;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const ALERT_TITLE: &str = "Urgent task";

/// When an alerted id becomes eligible to alert again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePolicy {
    /// Release only when the task leaves the task set. Completing or demoting
    /// a task keeps it marked, so re-promotion does not alert again.
    #[default]
    OnRemoval,
    /// Also release when the task is still present but no longer urgent.
    OnDemotion,
}

/// Request to notify the user about one urgent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub task_id: TaskId,
    pub title: String,
}

impl AlertRequest {
    /// Renders the user-facing notification payload.
    pub fn to_notification(&self) -> Notification {
        Notification {
            title: ALERT_TITLE.to_string(),
            body: format!("Don't forget: {}", self.title),
        }
    }
}

/// Process-lifetime memory of alerted task ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertTracker {
    alerted: BTreeSet<TaskId>,
    policy: ReleasePolicy,
}

impl AlertTracker {
    pub fn new(policy: ReleasePolicy) -> Self {
        Self {
            alerted: BTreeSet::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ReleasePolicy {
        self.policy
    }

    /// Returns whether `id` already raised an alert.
    pub fn is_alerted(&self, id: TaskId) -> bool {
        self.alerted.contains(&id)
    }

    pub fn alerted_count(&self) -> usize {
        self.alerted.len()
    }

    /// Computes the next tracker state and the alerts it emits.
    ///
    /// `current_tasks` must be the full task set, not a delta.
    pub fn reconcile(&self, current_tasks: &[Task]) -> (Self, Vec<AlertRequest>) {
        let mut alerted = self.alerted.clone();
        let mut alerts = Vec::new();

        for task in current_tasks.iter().filter(|task| task.is_urgent()) {
            if alerted.insert(task.id) {
                alerts.push(AlertRequest {
                    task_id: task.id,
                    title: task.title.clone(),
                });
            }
        }

        alerted.retain(|id| {
            match current_tasks.iter().find(|task| task.id == *id) {
                None => false,
                Some(task) => match self.policy {
                    ReleasePolicy::OnRemoval => true,
                    ReleasePolicy::OnDemotion => task.is_urgent(),
                },
            }
        });

        let next = Self {
            alerted,
            policy: self.policy,
        };
        (next, alerts)
    }

    /// Applies `reconcile` in place and returns the emitted alerts.
    pub fn observe(&mut self, current_tasks: &[Task]) -> Vec<AlertRequest> {
        let (next, alerts) = self.reconcile(current_tasks);
        *self = next;
        alerts
    }
}

//! Transient feedback message slot.
//!
//! # Responsibility
//! - Hold the single toast message currently shown to the user.
//! - Let only the latest message's timer clear the slot.
//!
//! # Invariants
//! - Showing a message replaces any previous one (last write wins).
//! - `expire` with a stale token never clears a newer message.

/// Handle returned by `FeedbackSlot::show`, redeemed by the host timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub token: FeedbackToken,
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
    generation: u64,
}

impl FeedbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, replacing any visible one.
    pub fn show(&mut self, message: impl Into<String>) -> FeedbackToken {
        self.generation += 1;
        let token = FeedbackToken(self.generation);
        self.current = Some(Feedback {
            message: message.into(),
            token,
        });
        token
    }

    /// Clears the slot if `token` belongs to the visible message.
    ///
    /// Returns whether the slot was cleared.
    pub fn expire(&mut self, token: FeedbackToken) -> bool {
        match &self.current {
            Some(feedback) if feedback.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|feedback| feedback.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackSlot;

    #[test]
    fn latest_message_wins() {
        let mut slot = FeedbackSlot::new();
        slot.show("Task added");
        slot.show("Task deleted");
        assert_eq!(slot.message(), Some("Task deleted"));
    }

    #[test]
    fn stale_timer_does_not_clear_newer_message() {
        let mut slot = FeedbackSlot::new();
        let first = slot.show("Task added");
        let second = slot.show("Priority updated");

        assert!(!slot.expire(first));
        assert_eq!(slot.message(), Some("Priority updated"));

        assert!(slot.expire(second));
        assert_eq!(slot.message(), None);
        assert!(!slot.expire(second));
    }
}

//! Contact directory model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a contact.
pub type ContactId = Uuid;

/// Form input for a new contact, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One directory entry. Contacts are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Assigns a fresh id to submitted form input.
    pub fn from_draft(draft: ContactDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    pub fn with_id(id: ContactId, draft: ContactDraft) -> Self {
        let ContactDraft { name, email, phone } = draft;
        Self {
            id,
            name,
            email,
            phone,
        }
    }

    /// Case-insensitive substring match over name, email and phone.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

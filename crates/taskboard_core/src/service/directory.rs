//! In-memory contact directory.

use crate::model::contact::{Contact, ContactDraft, ContactId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a contact built from form input.
    pub fn add(&mut self, draft: ContactDraft) -> ContactId {
        let contact = Contact::from_draft(draft);
        let id = contact.id;
        self.contacts.push(contact);
        id
    }

    /// Case-insensitive search over name, email and phone.
    ///
    /// An empty term matches every contact.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Contact> + 'a {
        let needle = term.to_lowercase();
        self.contacts
            .iter()
            .filter(move |contact| contact.matches_lowercase(&needle))
    }
}

//! Demo data the application starts with.

use crate::model::contact::{Contact, ContactDraft};
use crate::model::task::{Priority, Task};

const DEMO_TASKS: &[(&str, Priority, bool)] = &[
    ("Revise the HCI lecture", Priority::High, false),
    ("Draw the paper mockup", Priority::Medium, true),
];

const DEMO_CONTACTS: &[(&str, &str, &str)] = &[
    ("Course instructor", "instructor@univ.example", "0123456789"),
    ("Department office", "office@univ.example", "0987654321"),
];

pub fn demo_tasks() -> Vec<Task> {
    DEMO_TASKS
        .iter()
        .filter_map(|&(title, priority, completed)| {
            let mut task = Task::new(title, priority).ok()?;
            task.completed = completed;
            Some(task)
        })
        .collect()
}

pub fn demo_contacts() -> Vec<Contact> {
    DEMO_CONTACTS
        .iter()
        .map(|&(name, email, phone)| {
            Contact::from_draft(ContactDraft {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
            })
        })
        .collect()
}

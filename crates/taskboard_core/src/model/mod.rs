//! Domain records for the task board and contact directory.
//!
//! # Responsibility
//! - Define the plain data shapes shared by services and the alert tracker.
//! - Keep identity generation and field validation next to the records.
//!
//! # Invariants
//! - Every task and contact carries a stable, process-unique UUID.
//! - Records carry no behavior beyond construction and small predicates.

pub mod contact;
pub mod screen;
pub mod task;

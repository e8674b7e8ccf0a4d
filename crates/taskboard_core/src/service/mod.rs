//! Application services.
//!
//! # Responsibility
//! - Own in-memory task and contact state and its mutation rules.
//! - Wire user actions to alert reconciliation and feedback in one shell.
//!
//! # Invariants
//! - All state has a single owner (`AppShell`); mutations take `&mut self`.

pub mod app_shell;
pub mod directory;
pub mod feedback;
pub mod task_board;

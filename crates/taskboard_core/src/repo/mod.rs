//! Repository contracts over persisted preferences.
//!
//! # Responsibility
//! - Hide SQL details of the `settings` table behind typed accessors.
//!
//! # Invariants
//! - Read paths reject malformed stored values instead of masking them.

pub mod settings_repo;

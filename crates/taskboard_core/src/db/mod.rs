//! SQLite storage for persisted user preferences.
//!
//! # Responsibility
//! - Open and configure the preferences store.
//! - Bring the store schema up to date before any read or write.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`; files from
//!   builds that predate versioning read as version 0.
//! - Task and contact data never touch this store.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_store, open_store_in_memory};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while opening or using the preferences store.
#[derive(Debug)]
pub enum StoreError {
    /// The store could not be opened or configured.
    Open {
        mode: &'static str,
        source: rusqlite::Error,
    },
    /// One migration step failed and the upgrade was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The store was written by a newer build; it is left untouched.
    SchemaTooNew { found: u32, supported: u32 },
    /// A query against an already-open store failed.
    Query(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { mode, source } => {
                write!(f, "failed to open {mode} preferences store: {source}")
            }
            Self::Migration { version, source } => {
                write!(f, "preferences migration to v{version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "preferences store is at schema v{found}, this build supports up to v{supported}"
            ),
            Self::Query(source) => write!(f, "preferences query failed: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migration { source, .. } | Self::Query(source) => {
                Some(source)
            }
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}

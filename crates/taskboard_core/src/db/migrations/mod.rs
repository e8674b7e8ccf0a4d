//! Preferences schema migrations.
//!
//! # Invariants
//! - `version` values are strictly increasing.
//! - Every migration tolerates objects left by pre-versioned builds.
//! - Pending migrations commit together or not at all.

use crate::db::{StoreError, StoreResult};
use rusqlite::Connection;

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_settings.sql"),
}];

/// Returns the schema version this build writes.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Reads the schema version stamped on an open store.
pub fn store_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Upgrades the store to `latest_version()`.
///
/// Returns how many migration steps were applied.
///
/// # Errors
/// - `SchemaTooNew` when the store is ahead of this build.
/// - `Migration` naming the first step that failed.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<usize> {
    let found = store_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(StoreError::SchemaTooNew { found, supported });
    }

    let tx = conn.transaction()?;
    let mut applied = 0;
    for migration in MIGRATIONS.iter().filter(|m| m.version > found) {
        tx.execute_batch(migration.sql)
            .and_then(|()| {
                tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))
            })
            .map_err(|source| StoreError::Migration {
                version: migration.version,
                source,
            })?;
        applied += 1;
    }
    tx.commit()?;

    Ok(applied)
}

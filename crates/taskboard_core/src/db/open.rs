//! Connection bootstrap for the preferences store.
//!
//! # Invariants
//! - Returned connections are at `migrations::latest_version()`.

use super::migrations::apply_migrations;
use super::{StoreError, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens (or creates) the preferences file at `path`.
///
/// # Side effects
/// - Emits `store_open` events with duration, status and applied migrations.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a throwaway in-memory preferences store.
pub fn open_store_in_memory() -> StoreResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<Connection> {
    let started_at = Instant::now();
    let result = connect()
        .and_then(|conn| conn.busy_timeout(Duration::from_secs(5)).map(|()| conn))
        .map_err(|source| StoreError::Open { mode, source })
        .and_then(|mut conn| apply_migrations(&mut conn).map(|applied| (conn, applied)));

    match result {
        Ok((conn, applied)) => {
            info!(
                "event=store_open module=db status=ok mode={mode} applied_migrations={applied} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

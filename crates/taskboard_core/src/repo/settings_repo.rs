//! Preference repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Read and write the theme flag under a fixed key.
//!
//! # Invariants
//! - A missing key reads as the default (light theme).
//! - Only the literals `true` and `false` are valid stored values.

use crate::db::StoreError;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Settings key holding the dark-mode flag.
pub const DARK_MODE_KEY: &str = "taskboard.dark_mode";

pub type RepoResult<T> = Result<T, RepoError>;

/// Preference persistence errors.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted setting: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Query(value))
    }
}

/// Typed access to persisted preferences.
pub trait SettingsRepository {
    /// Returns the stored theme flag, `false` when never written.
    fn load_dark_mode(&self) -> RepoResult<bool>;
    fn save_dark_mode(&self, enabled: bool) -> RepoResult<()>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn load_dark_mode(&self) -> RepoResult<bool> {
        match self.read_value(DARK_MODE_KEY)?.as_deref() {
            None => Ok(false),
            Some(value) => parse_bool(value).ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "invalid boolean `{value}` under settings key `{DARK_MODE_KEY}`"
                ))
            }),
        }
    }

    fn save_dark_mode(&self, enabled: bool) -> RepoResult<()> {
        match self.write_value(DARK_MODE_KEY, bool_to_text(enabled)) {
            Ok(()) => {
                debug!(
                    "event=settings_write module=repo status=ok key={DARK_MODE_KEY} value={enabled}"
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=settings_write module=repo status=error key={DARK_MODE_KEY} error={err}"
                );
                Err(err)
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn bool_to_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_bool, SettingsRepository, SqliteSettingsRepository};
    use crate::db::open_store_in_memory;

    #[test]
    fn missing_flag_reads_as_light() {
        let conn = open_store_in_memory().unwrap();
        let repo = SqliteSettingsRepository::new(&conn);
        assert!(!repo.load_dark_mode().unwrap());
    }

    #[test]
    fn later_writes_overwrite_earlier_ones() {
        let conn = open_store_in_memory().unwrap();
        let repo = SqliteSettingsRepository::new(&conn);

        repo.save_dark_mode(true).unwrap();
        repo.save_dark_mode(false).unwrap();
        assert!(!repo.load_dark_mode().unwrap());
    }

    #[test]
    fn parse_bool_accepts_only_exact_literals() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("TRUE"), None);
        assert_eq!(parse_bool("1"), None);
    }
}

use taskboard_core::db::{open_store, open_store_in_memory};
use taskboard_core::{
    AppShell, RepoError, SettingsRepository, ShellConfig, SqliteSettingsRepository,
    UnsupportedDispatcher, DARK_MODE_KEY,
};

#[test]
fn theme_flag_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.db");

    {
        let conn = open_store(&path).unwrap();
        let repo = SqliteSettingsRepository::new(&conn);
        assert!(!repo.load_dark_mode().unwrap());
        repo.save_dark_mode(true).unwrap();
    }

    let conn = open_store(&path).unwrap();
    assert!(SqliteSettingsRepository::new(&conn).load_dark_mode().unwrap());
}

#[test]
fn shell_starts_with_persisted_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.db");

    {
        let conn = open_store(&path).unwrap();
        let mut shell = AppShell::new(
            ShellConfig::empty(),
            SqliteSettingsRepository::new(&conn),
            UnsupportedDispatcher,
        )
        .unwrap();
        shell.set_dark_mode(true).unwrap();
    }

    let conn = open_store(&path).unwrap();
    let shell = AppShell::new(
        ShellConfig::empty(),
        SqliteSettingsRepository::new(&conn),
        UnsupportedDispatcher,
    )
    .unwrap();
    assert!(shell.dark_mode());
}

#[test]
fn malformed_stored_flag_is_rejected() {
    let conn = open_store_in_memory().unwrap();
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, 'yes');",
        [DARK_MODE_KEY],
    )
    .unwrap();

    let err = SqliteSettingsRepository::new(&conn)
        .load_dark_mode()
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));

    let startup = AppShell::new(
        ShellConfig::empty(),
        SqliteSettingsRepository::new(&conn),
        UnsupportedDispatcher,
    );
    assert!(startup.is_err());
}

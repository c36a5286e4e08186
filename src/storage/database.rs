use std::path::Path;
use std::sync::Mutex;

use log::info;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;

/// Storage key holding the serialized board collection.
pub const BOARDS_KEY: &str = "raffleBoards";
/// Storage key for the selected theme (owned by the UI layer).
pub const THEME_KEY: &str = "raffleTheme";
/// Storage key for the license activation flag (owned by the license layer).
pub const LICENSE_KEY: &str = "license_status";

/// String key-value store backed by SQLite, standing in for the web
/// client's localStorage. One table, string keys, string values.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir).ok();
        let db_path = data_dir.join("raffleboard.db");
        info!("database: {}", db_path.display());

        let conn = Connection::open(&db_path)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// In-memory database for tests; contents vanish on drop.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;
        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Read a value; a missing key is Ok(None), not an error.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a key. Returns true if it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
        Ok(rows > 0)
    }

    /// Theme helpers for the UI layer; read errors fall back to None.
    pub fn selected_theme(&self) -> Option<String> {
        self.get(THEME_KEY).ok().flatten()
    }

    pub fn set_selected_theme(&self, theme: &str) -> Result<()> {
        self.put(THEME_KEY, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get("nope").unwrap(), None);
        assert!(!db.remove("nope").unwrap());
    }

    #[test]
    fn test_put_get_overwrite_remove() {
        let db = Database::open_in_memory().unwrap();
        db.put(BOARDS_KEY, "[]").unwrap();
        assert_eq!(db.get(BOARDS_KEY).unwrap().as_deref(), Some("[]"));

        db.put(BOARDS_KEY, "[1]").unwrap();
        assert_eq!(db.get(BOARDS_KEY).unwrap().as_deref(), Some("[1]"));

        assert!(db.remove(BOARDS_KEY).unwrap());
        assert_eq!(db.get(BOARDS_KEY).unwrap(), None);
    }

    #[test]
    fn test_theme_helpers() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.selected_theme(), None);
        db.set_selected_theme("ocean").unwrap();
        assert_eq!(db.selected_theme().as_deref(), Some("ocean"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let db = Database::open(dir.path()).unwrap();
            db.put(BOARDS_KEY, "persisted").unwrap();
        }
        let db = Database::open(dir.path()).unwrap();
        assert_eq!(db.get(BOARDS_KEY).unwrap().as_deref(), Some("persisted"));
    }
}

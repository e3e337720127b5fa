// Database layer - SQLite connection, migrations, key/value settings
//
// Everything the app persists lives in the `settings` table as text values
// (JSON where structured). `KeyValueStore` is the seam the history store and
// credential lookup depend on, so they can run against an in-memory store.

use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{AppError, Result};

/// Minimal string key/value persistence.
pub trait KeyValueStore {
    /// Value for `key`, or None if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file and run migrations
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::new(path)?;
        db.run_migrations()?;
        Ok(db)
    }

    /// Create a new database connection
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Database { conn })
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Run migrations to set up the database schema
    pub fn run_migrations(&self) -> Result<()> {
        let migration_001 = include_str!("migrations/001_init.sql");
        self.conn.execute_batch(migration_001)?;
        Ok(())
    }

    // --- Settings operations ---

    /// Get a setting value by key. Returns None if the key doesn't exist.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM settings WHERE key = ?")?;
        let result = stmt.query_row([key], |row| row.get::<_, Option<String>>(0));

        match result {
            Ok(value) => Ok(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a setting value (upsert: insert or update if key exists).
    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a setting by key.
    pub fn delete_setting(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM settings WHERE key = ?", [key])?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_setting(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_setting(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.delete_setting(key)
    }
}

/// Shared handle, as held by the server state.
impl<T: KeyValueStore> KeyValueStore for Arc<Mutex<T>> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.lock().map_err(|_| AppError::LockPoisoned)?.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().map_err(|_| AppError::LockPoisoned)?.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock().map_err(|_| AppError::LockPoisoned)?.remove(key)
    }
}

/// Process-local store with no persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_creation() {
        let db = Database::new_in_memory().expect("Failed to create in-memory database");
        db.run_migrations().expect("Failed to run migrations");
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let db = Database::new_in_memory().unwrap();
        db.run_migrations().unwrap();
        db.set_setting("theme", "midnight").unwrap();
        db.run_migrations().unwrap();
        assert_eq!(db.get_setting("theme").unwrap(), Some("midnight".to_string()));
    }

    // --- Settings tests ---

    #[test]
    fn test_get_setting_nonexistent() {
        let db = Database::new_in_memory().unwrap();
        db.run_migrations().unwrap();

        let result = db.get_setting("nonexistent_key").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_set_setting_upsert() {
        let db = Database::new_in_memory().unwrap();
        db.run_migrations().unwrap();

        db.set_setting("ai_api_key", "first").unwrap();
        assert_eq!(db.get_setting("ai_api_key").unwrap(), Some("first".to_string()));

        db.set_setting("ai_api_key", "second").unwrap();
        assert_eq!(db.get_setting("ai_api_key").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_set_setting_json_value() {
        let db = Database::new_in_memory().unwrap();
        db.run_migrations().unwrap();

        let history = r#"[{"id":"1","timestamp":1}]"#;
        db.set_setting("zexly-lyric-history", history).unwrap();

        let value = db.get_setting("zexly-lyric-history").unwrap();
        assert_eq!(value, Some(history.to_string()));
    }

    #[test]
    fn test_delete_setting() {
        let db = Database::new_in_memory().unwrap();
        db.run_migrations().unwrap();

        db.set_setting("ai_api_key", "k").unwrap();
        db.delete_setting("ai_api_key").unwrap();
        assert_eq!(db.get_setting("ai_api_key").unwrap(), None);

        // Should not error when deleting a key that doesn't exist
        assert!(db.delete_setting("nonexistent").is_ok());
    }

    #[test]
    fn test_settings_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zexly.db");

        {
            let db = Database::open(&path).unwrap();
            db.set("ai_api_key", "persisted").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.get("ai_api_key").unwrap(), Some("persisted".to_string()));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_shared_handle_store() {
        let shared = Arc::new(Mutex::new(Database::new_in_memory().unwrap()));
        shared.lock().unwrap().run_migrations().unwrap();

        shared.set("k", "v").unwrap();
        assert_eq!(shared.get("k").unwrap(), Some("v".to_string()));
    }
}

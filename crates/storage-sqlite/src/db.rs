//! Connection handling and schema for the key-value store.

use crate::errors::{connection_err, query_err};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use stockscope_core::errors::Result;

const INIT_SQL: &str = "
CREATE TABLE IF NOT EXISTS app_store (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);
";

/// Durable key-value store over a single SQLite table.
///
/// The connection sits behind a mutex; contention is not a concern here
/// since all mutations are serialized by the single-threaded UI model.
pub struct KvStore {
    conn: Mutex<Connection>,
}

impl KvStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(connection_err)?;
        Self::init(conn)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(connection_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(INIT_SQL).map_err(query_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Reads the value under `key`; `None` when the entry does not exist.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.query_row(
            "SELECT value FROM app_store WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .optional()
        .map_err(query_err)
    }

    /// Writes `value` under `key`, replacing any existing entry.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "INSERT OR REPLACE INTO app_store (key, value) VALUES (?1, ?2)",
            [key, value],
        )
        .map_err(query_err)?;
        Ok(())
    }

    /// Deletes the entry under `key`, if present.
    pub fn delete(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute("DELETE FROM app_store WHERE key = ?1", [key])
            .map_err(query_err)?;
        Ok(())
    }
}

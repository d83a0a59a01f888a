use crate::{
    domain::Order,
    error::{ReorderError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

/// SQLite-based storage: one row per named record in a `records` table
pub struct SqliteStorage {
    connection: Mutex<Connection>,
    record_name: String,
}

impl SqliteStorage {
    const RECORD_NAME: &'static str = "item_order";

    /// Opens (or creates) the database at the given path
    pub fn new(database_path: &str) -> Result<Self> {
        let connection = Connection::open(database_path)?;
        Ok(Self::with_connection(connection))
    }

    /// Opens a private in-memory database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        Ok(Self::with_connection(connection))
    }

    fn with_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
            record_name: Self::RECORD_NAME.to_string(),
        }
    }

    /// Overrides the record key
    pub fn with_record_name(mut self, name: impl Into<String>) -> Self {
        self.record_name = name.into();
        self
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| ReorderError::StorageError("sqlite connection lock poisoned".to_string()))
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn initialize(&self) -> Result<()> {
        self.lock()?.execute(
            "CREATE TABLE IF NOT EXISTS records (name TEXT PRIMARY KEY, body TEXT NOT NULL)",
            [],
        )?;
        Ok(())
    }

    async fn save_order(&self, order: &Order) -> Result<()> {
        let json = serde_json::to_string(order)?;
        self.lock()?.execute(
            "INSERT INTO records (name, body) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET body = excluded.body",
            params![self.record_name, json],
        )?;
        Ok(())
    }

    async fn load_order(&self) -> Result<Option<Order>> {
        let body: Option<String> = self
            .lock()?
            .query_row(
                "SELECT body FROM records WHERE name = ?1",
                params![self.record_name],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    async fn clear_order(&self) -> Result<()> {
        self.lock()?.execute(
            "DELETE FROM records WHERE name = ?1",
            params![self.record_name],
        )?;
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        let Ok(connection) = self.lock() else {
            return false;
        };
        connection
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'records'",
                [],
                |_| Ok(()),
            )
            .optional()
            .map(|found| found.is_some())
            .unwrap_or(false)
    }
}

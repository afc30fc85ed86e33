use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use serde_json::Value;

use crate::keys::ConfigKey;
use crate::repository::{ConfigRepository, RepositoryError};

pub struct SqliteConfigRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteConfigRepository {
    pub fn open(path: &str) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path).map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let conn = self.conn.lock();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config_overrides (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );",
        )
        .map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(())
    }
}

impl ConfigRepository for SqliteConfigRepository {
    fn load_all(&self) -> Result<HashMap<ConfigKey, Value>, RepositoryError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare("SELECT key, value FROM config_overrides")
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        let mut rows = stmt
            .query([])
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        let mut values = HashMap::new();
        while let Some(row) = rows.next().map_err(|err| RepositoryError::Store(err.to_string()))? {
            let name: String = row
                .get(0)
                .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
            let payload: String = row
                .get(1)
                .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
            let Some(key) = ConfigKey::parse(&name) else {
                continue;
            };
            let value = serde_json::from_str(&payload)
                .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
            values.insert(key, value);
        }
        Ok(values)
    }

    fn get(&self, key: ConfigKey) -> Result<Option<Value>, RepositoryError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare("SELECT value FROM config_overrides WHERE key = ?1")
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        let mut rows = stmt
            .query(params![key.as_str()])
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        let row = match rows.next().map_err(|err| RepositoryError::Store(err.to_string()))? {
            Some(row) => row,
            None => return Ok(None),
        };
        let payload: String = row
            .get(0)
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
        let value = serde_json::from_str(&payload)
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    fn upsert(&self, key: ConfigKey, value: &Value) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string(value)
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO config_overrides (key, value, updated_at)
             VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            params![key.as_str(), payload],
        )
        .map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(())
    }

    fn delete(&self, key: ConfigKey) -> Result<(), RepositoryError> {
        let conn = self.conn.lock();
        conn.execute(
            "DELETE FROM config_overrides WHERE key = ?1",
            params![key.as_str()],
        )
        .map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(())
    }
}

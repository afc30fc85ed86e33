use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use postgres::{Client, NoTls};
use serde_json::Value;

use crate::keys::ConfigKey;
use crate::repository::{ConfigRepository, RepositoryError};

pub struct PgConfigRepository {
    client: Arc<Mutex<Client>>,
}

impl PgConfigRepository {
    pub fn connect(dsn: &str) -> Result<Self, RepositoryError> {
        let client =
            Client::connect(dsn, NoTls).map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
        })
    }

    pub fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let mut client = self.client.lock();
        client
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS config_overrides (
                    key TEXT PRIMARY KEY,
                    value JSONB NOT NULL,
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );",
            )
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(())
    }
}

impl ConfigRepository for PgConfigRepository {
    fn load_all(&self) -> Result<HashMap<ConfigKey, Value>, RepositoryError> {
        let mut client = self.client.lock();
        let rows = client
            .query("SELECT key, value FROM config_overrides", &[])
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        let mut values = HashMap::new();
        for row in rows {
            let name: String = row
                .try_get(0)
                .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
            let value: Value = row
                .try_get(1)
                .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
            if let Some(key) = ConfigKey::parse(&name) {
                values.insert(key, value);
            }
        }
        Ok(values)
    }

    fn get(&self, key: ConfigKey) -> Result<Option<Value>, RepositoryError> {
        let mut client = self.client.lock();
        let row = client
            .query_opt(
                "SELECT value FROM config_overrides WHERE key = $1",
                &[&key.as_str()],
            )
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        let Some(row) = row else {
            return Ok(None);
        };
        let value: Value = row
            .try_get(0)
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    fn upsert(&self, key: ConfigKey, value: &Value) -> Result<(), RepositoryError> {
        let mut client = self.client.lock();
        client
            .execute(
                "INSERT INTO config_overrides (key, value, updated_at)
                 VALUES ($1, $2, NOW())
                 ON CONFLICT (key)
                 DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
                &[&key.as_str(), value],
            )
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(())
    }

    fn delete(&self, key: ConfigKey) -> Result<(), RepositoryError> {
        let mut client = self.client.lock();
        client
            .execute(
                "DELETE FROM config_overrides WHERE key = $1",
                &[&key.as_str()],
            )
            .map_err(|err| RepositoryError::Store(err.to_string()))?;
        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use thiserror::Error;

use crate::keys::ConfigKey;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository error: {0}")]
    Store(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub trait ConfigRepository: Send + Sync {
    fn load_all(&self) -> Result<HashMap<ConfigKey, Value>, RepositoryError>;
    fn get(&self, key: ConfigKey) -> Result<Option<Value>, RepositoryError>;
    fn upsert(&self, key: ConfigKey, value: &Value) -> Result<(), RepositoryError>;
    fn delete(&self, key: ConfigKey) -> Result<(), RepositoryError>;
}

#[derive(Clone, Default)]
pub struct InMemoryConfigRepository {
    values: Arc<RwLock<HashMap<ConfigKey, Value>>>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl ConfigRepository for InMemoryConfigRepository {
    fn load_all(&self) -> Result<HashMap<ConfigKey, Value>, RepositoryError> {
        Ok(self.values.read().clone())
    }

    fn get(&self, key: ConfigKey) -> Result<Option<Value>, RepositoryError> {
        Ok(self.values.read().get(&key).cloned())
    }

    fn upsert(&self, key: ConfigKey, value: &Value) -> Result<(), RepositoryError> {
        self.values.write().insert(key, value.clone());
        Ok(())
    }

    fn delete(&self, key: ConfigKey) -> Result<(), RepositoryError> {
        self.values.write().remove(&key);
        Ok(())
    }
}

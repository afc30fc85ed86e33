use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::coerce::{coerce, CoerceError};
use crate::defaults::{type_of, DefaultProvider};
use crate::keys::ConfigKey;
use crate::repository::{ConfigRepository, RepositoryError};
use crate::schema::validate_update;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Input validation error")]
    Validation(Vec<String>),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Coerce(#[from] CoerceError),
}

pub struct ConfigService {
    defaults: DefaultProvider,
    repo: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    pub fn new(defaults: DefaultProvider, repo: Arc<dyn ConfigRepository>) -> Self {
        Self { defaults, repo }
    }

    pub fn effective(&self) -> Result<Map<String, Value>, ConfigError> {
        let overrides = self.repo.load_all()?;
        let mut merged = Map::new();
        for key in ConfigKey::ALL {
            let raw = overrides
                .get(key)
                .or_else(|| self.defaults.default_value_of(*key));
            let Some(raw) = raw else {
                continue;
            };
            let value = match type_of(*key) {
                Some(tag) => coerce(raw, tag)?,
                None => raw.clone(),
            };
            merged.insert(key.as_str().to_string(), value);
        }
        Ok(merged)
    }

    pub fn apply_update(
        &self,
        body: Map<String, Value>,
    ) -> Result<Map<String, Value>, ConfigError> {
        let violations = validate_update(&body);
        if !violations.is_empty() {
            return Err(ConfigError::Validation(violations));
        }
        for (field, value) in &body {
            if let Some(key) = ConfigKey::parse(field) {
                self.repo.upsert(key, value)?;
            }
        }
        self.effective()
    }

    pub fn remove(&self, key: &str) -> Result<(), ConfigError> {
        if let Some(key) = ConfigKey::parse(key) {
            self.repo.delete(key)?;
        }
        Ok(())
    }
}

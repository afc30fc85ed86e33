use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct SettingsItem {
    pub key: &'static str,
    pub description: &'static str,
    pub value_type: &'static str,
    pub default_value: &'static str,
}

pub static SETTINGS_TABLE: &[SettingsItem] = &[
    SettingsItem {
        key: "storage.dsn",
        description: "Override store connection string (postgres, or sqlite:<path>)",
        value_type: "string",
        default_value: "",
    },
    SettingsItem {
        key: "storage.sqlite_path",
        description: "SQLite database path (used when storage.dsn is empty)",
        value_type: "string",
        default_value: "stampede.sqlite",
    },
];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemSettings {
    values: HashMap<String, String>,
}

impl SystemSettings {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_string(&self, key: &str) -> String {
        self.get(key)
            .map(str::to_string)
            .or_else(|| default_value(key))
            .unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings parse error: {0}")]
    Parse(String),
    #[error("unknown settings key: {0}")]
    UnknownKey(String),
    #[error("type mismatch for key {0}: expected {1}")]
    TypeMismatch(String, String),
}

pub struct SettingsLoader;

impl SettingsLoader {
    pub fn from_str(input: &str) -> Result<SystemSettings, SettingsError> {
        let value: toml::Value =
            toml::from_str(input).map_err(|err| SettingsError::Parse(err.to_string()))?;
        let mut values = HashMap::new();
        let mut errors = Vec::new();
        flatten_values(&mut values, String::new(), &value, &mut errors);
        if let Some(err) = errors.into_iter().next() {
            return Err(err);
        }
        Ok(SystemSettings { values })
    }
}

fn flatten_values(
    output: &mut HashMap<String, String>,
    prefix: String,
    value: &toml::Value,
    errors: &mut Vec<SettingsError>,
) {
    match value {
        toml::Value::Table(table) => {
            for (key, nested) in table {
                let new_prefix = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_values(output, new_prefix, nested, errors);
            }
        }
        toml::Value::String(value) => {
            insert_checked(output, &prefix, value.to_string(), "string", errors);
        }
        toml::Value::Integer(value) => {
            insert_checked(output, &prefix, value.to_string(), "number", errors);
        }
        toml::Value::Float(value) => {
            insert_checked(output, &prefix, value.to_string(), "number", errors);
        }
        toml::Value::Boolean(value) => {
            insert_checked(output, &prefix, value.to_string(), "boolean", errors);
        }
        _ => {
            errors.push(SettingsError::TypeMismatch(
                prefix,
                "string|number|boolean".to_string(),
            ));
        }
    }
}

fn insert_checked(
    output: &mut HashMap<String, String>,
    key: &str,
    value: String,
    expected_type: &str,
    errors: &mut Vec<SettingsError>,
) {
    let Some(item) = settings_item(key) else {
        errors.push(SettingsError::UnknownKey(key.to_string()));
        return;
    };
    if item.value_type != expected_type {
        errors.push(SettingsError::TypeMismatch(
            key.to_string(),
            item.value_type.to_string(),
        ));
        return;
    }
    output.insert(key.to_string(), value);
}

fn settings_item(key: &str) -> Option<&'static SettingsItem> {
    SETTINGS_TABLE.iter().find(|item| item.key == key)
}

fn default_value(key: &str) -> Option<String> {
    settings_item(key).map(|item| item.default_value.to_string())
}

use std::path::Path;
use std::sync::Arc;

use config_plane::{
    resolve_repository, ConfigService, DefaultProvider, SettingsLoader, SystemSettings,
};
use tokio::sync::Mutex;

use crate::error::AppError;

pub struct AppState {
    pub service: Arc<ConfigService>,
    pub write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(service: ConfigService) -> Self {
        Self {
            service: Arc::new(service),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_settings(settings: &SystemSettings) -> Result<Self, AppError> {
        let repo = resolve_repository(settings)?;
        let service = ConfigService::new(DefaultProvider::from_env(), repo);
        Ok(Self::new(service))
    }
}

pub fn load_settings(path: &Path) -> Result<SystemSettings, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(SettingsLoader::from_str(&raw)?)
}

pub fn create_default_settings(path: &Path) -> Result<String, AppError> {
    let content = default_settings_template();
    std::fs::write(path, content.as_bytes())?;
    Ok(content)
}

pub fn default_settings_template() -> String {
    "storage = { dsn = \"\", sqlite_path = \"stampede.sqlite\" }\n".to_string()
}

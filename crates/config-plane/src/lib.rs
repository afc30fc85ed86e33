pub mod bootstrap;
pub mod coerce;
pub mod defaults;
pub mod keys;
pub mod pg_repository;
pub mod repository;
pub mod schema;
pub mod service;
pub mod settings;
pub mod sqlite_repository;

pub use bootstrap::resolve_repository;
pub use coerce::{coerce, CoerceError};
pub use defaults::{type_of, DefaultEntry, DefaultProvider, DEFAULT_TABLE};
pub use keys::{ConfigKey, TypeTag};
pub use pg_repository::PgConfigRepository;
pub use repository::{ConfigRepository, InMemoryConfigRepository, RepositoryError};
pub use schema::{validate_update, FieldRule, FieldType, UPDATE_RULES};
pub use service::{ConfigError, ConfigService};
pub use settings::{SettingsError, SettingsItem, SettingsLoader, SystemSettings, SETTINGS_TABLE};
pub use sqlite_repository::SqliteConfigRepository;

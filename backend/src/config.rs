//! Runtime configuration for the bookmarks server.
//!
//! Settings are layered: built-in defaults, then an optional `bookmarks.toml`
//! in the working directory, then `BOOKMARKS_*` environment variables
//! (`BOOKMARKS_SERVER__PORT=9000` sets `server.port`).

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub api: ApiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Which [`crate::storage::BookmarkStorage`] implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            database_url: "sqlite:bookmarks.db".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Path prefix the bookmark collection is served under
    pub mount_path: String,
    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            mount_path: "/api/bookmarks".to_string(),
            cors_origin: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directives, overridden by `RUST_LOG` when that is set
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `bookmarks.toml` (optional) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let source = config::Config::builder()
            .add_source(config::File::with_name("bookmarks").required(false))
            .add_source(
                config::Environment::with_prefix("BOOKMARKS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(source)
    }

    fn from_config(source: config::Config) -> Result<Self, ConfigError> {
        let mut settings = source.try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&mut self) -> Result<(), ConfigError> {
        let mount_path = self.api.mount_path.trim_end_matches('/');
        if !mount_path.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "api.mount_path must start with '/' and not be the root, got '{}'",
                self.api.mount_path
            )));
        }
        self.api.mount_path = mount_path.to_string();

        if self.storage.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn settings_from_toml(toml: &str) -> Result<Settings, ConfigError> {
        let source = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::from_config(source)
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from_toml("").expect("Empty config should load");

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.storage.backend, StorageBackend::Sqlite);
        assert_eq!(settings.storage.database_url, "sqlite:bookmarks.db");
        assert_eq!(settings.storage.max_connections, 5);
        assert_eq!(settings.api.mount_path, "/api/bookmarks");
        assert!(settings.api.cors_origin.is_none());
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn test_file_overrides() {
        let settings = settings_from_toml(
            r#"
            [server]
            port = 9001

            [storage]
            backend = "memory"

            [api]
            mount_path = "/bookmarks/"
            cors_origin = "http://localhost:3000"
            "#,
        )
        .expect("Config should load");

        assert_eq!(settings.server.port, 9001);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
        assert_eq!(settings.api.mount_path, "/bookmarks");
        assert_eq!(settings.api.cors_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_rejects_root_mount_path() {
        let result = settings_from_toml("[api]\nmount_path = \"/\"");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = settings_from_toml("[api]\nmount_path = \"bookmarks\"");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_zero_connections() {
        let result = settings_from_toml("[storage]\nmax_connections = 0");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_unknown_backend() {
        let result = settings_from_toml("[storage]\nbackend = \"postgres\"");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}

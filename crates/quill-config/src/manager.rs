//! Configuration manager implementation

use std::{collections::HashMap, path::PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::AppConfig,
};

/// Prefix of environment overrides, e.g. `QUILL_SERVER__PORT`
pub const ENV_PREFIX: &str = "QUILL";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "QUILL_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "quill.toml";

/// Configuration manager
///
/// A file named explicitly (through [`ConfigManager::with_path`] or
/// `QUILL_CONFIG`) must exist. The default `quill.toml` is optional.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Whether a missing file is an error
    required: bool,
    /// Replaces the process environment when set
    env_source: Option<HashMap<String, String>>,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::with_path(PathBuf::from(path)),
            _ => Self {
                config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
                required: false,
                env_source: None,
            },
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
            env_source: None,
        }
    }

    /// Read overrides from `vars` instead of the process environment
    pub fn with_environment(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration
    pub fn load(&self) -> Result<AppConfig> {
        if self.required && !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.display().to_string()));
        }

        debug!("Loading configuration from {}", self.config_path.display());

        let config = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(self.env_source.clone()),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load and validate in one step
    pub fn load_validated(&self) -> Result<AppConfig> {
        let config = self.load()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<()> {
        match config.database.connection_string.as_deref() {
            Some(s) if !s.trim().is_empty() => {}
            _ => return Err(ConfigError::MissingConnectionString),
        }
        if config.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port must be greater than 0".to_string(),
            ));
        }
        if config.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

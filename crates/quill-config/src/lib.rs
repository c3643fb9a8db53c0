//! Quill Configuration Management
//!
//! Loads [`AppConfig`] from built-in defaults, an optional TOML file and
//! `QUILL_*` environment variables, in that order of precedence.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{ConfigManager, CONFIG_PATH_VAR, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use types::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig, MEMORY_DATABASE};

//! Core configuration types and data structures

use serde::{Deserialize, Serialize};

/// Connection string that selects the in-memory repository
pub const MEMORY_DATABASE: &str = "memory";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub server: ServerConfig,
    /// Storage configuration
    pub database: DatabaseConfig,
    /// Log output configuration
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` form accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite URL such as `sqlite://quill.db`, or `memory`
    pub connection_string: Option<String>,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Whether the in-memory repository was requested
    pub fn is_memory(&self) -> bool {
        self.connection_string
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(MEMORY_DATABASE))
    }
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

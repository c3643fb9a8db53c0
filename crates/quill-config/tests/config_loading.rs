use std::collections::HashMap;

use proptest::prelude::*;
use quill_config::{AppConfig, ConfigError, ConfigManager};
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn write_config(dir: &TempDir, contents: &str) -> ConfigManager {
    let path = dir.path().join("quill.toml");
    std::fs::write(&path, contents).unwrap();
    ConfigManager::with_path(path).with_environment(HashMap::new())
}

#[test]
fn file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let manager = write_config(
        &dir,
        r#"
[server]
port = 9000

[database]
connection_string = "sqlite://blog.db"
"#,
    );

    let config = manager.load().unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(
        config.database.connection_string.as_deref(),
        Some("sqlite://blog.db")
    );
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let manager = write_config(
        &dir,
        r#"
[database]
connection_string = "sqlite://blog.db"
"#,
    )
    .with_environment(env(&[
        ("QUILL_DATABASE__CONNECTION_STRING", "memory"),
        ("QUILL_SERVER__PORT", "7070"),
        ("UNRELATED_SERVER__PORT", "1"),
    ]));

    let config = manager.load().unwrap();
    assert!(config.database.is_memory());
    assert_eq!(config.server.port, 7070);
}

#[test]
fn explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("missing.toml"));

    assert!(matches!(manager.load(), Err(ConfigError::NotFound(_))));
}

#[test]
fn missing_connection_string_is_rejected() {
    let dir = TempDir::new().unwrap();
    let manager = write_config(&dir, "[server]\nport = 8081\n");

    let err = manager.load_validated().unwrap_err();
    assert!(matches!(err, ConfigError::MissingConnectionString));
}

#[test]
fn blank_connection_string_is_rejected() {
    let mut config = AppConfig::default();
    config.database.connection_string = Some("   ".into());

    assert!(matches!(
        ConfigManager::validate(&config),
        Err(ConfigError::MissingConnectionString)
    ));
}

#[test]
fn zero_port_and_pool_size_are_rejected() {
    let mut config = AppConfig::default();
    config.database.connection_string = Some("memory".into());
    assert!(ConfigManager::validate(&config).is_ok());

    config.server.port = 0;
    assert!(matches!(
        ConfigManager::validate(&config),
        Err(ConfigError::Validation(_))
    ));

    config.server.port = 8080;
    config.database.max_connections = 0;
    assert!(matches!(
        ConfigManager::validate(&config),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let manager = write_config(&dir, "[server\nport = ");

    assert!(matches!(manager.load(), Err(ConfigError::Parse(_))));
}

proptest! {
    #[test]
    fn any_nonzero_port_from_env_is_accepted(port in 1u16..=u16::MAX) {
        let dir = TempDir::new().unwrap();
        let manager = write_config(&dir, "")
            .with_environment(env(&[
                ("QUILL_SERVER__PORT", &port.to_string()),
                ("QUILL_DATABASE__CONNECTION_STRING", "memory"),
            ]));

        let config = manager.load_validated().unwrap();
        prop_assert_eq!(config.server.port, port);
    }
}

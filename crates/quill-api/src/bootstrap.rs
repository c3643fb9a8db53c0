//! Startup wiring: configuration to repository to mediator to state

use std::sync::Arc;

use anyhow::Context;
use quill_application::{blog_mediator, blogs::SharedBlogRepository};
use quill_config::{AppConfig, ConfigError, DatabaseConfig};
use quill_persistence::{InMemoryBlogRepository, SqliteBlogRepository, SqliteConnection};
use tracing::info;

use crate::state::AppState;

/// Build the blog repository selected by `config`
///
/// SQLite databases are created if missing and migrated before use.
pub async fn build_repository(config: &DatabaseConfig) -> anyhow::Result<SharedBlogRepository> {
    if config.is_memory() {
        info!("Using in-memory blog repository");
        return Ok(Arc::new(InMemoryBlogRepository::new()));
    }

    let url = config
        .connection_string
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingConnectionString)?;

    let connection = SqliteConnection::connect(url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {url}"))?;
    connection
        .migrate()
        .await
        .context("Failed to create the Blog table")?;

    info!("Using SQLite blog repository");
    Ok(Arc::new(SqliteBlogRepository::new(connection)))
}

/// Build the shared state for the router
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository = build_repository(&config.database).await?;
    let mediator = blog_mediator(repository).context("Incomplete handler registration")?;
    Ok(AppState::new(mediator))
}

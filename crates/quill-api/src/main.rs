use anyhow::Context;
use quill_api::{bootstrap, create_router, ApiServer};
use quill_config::ConfigManager;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let manager = ConfigManager::new();
    let config = manager
        .load_validated()
        .with_context(|| format!("Invalid configuration in {}", manager.config_path().display()))?;

    init_tracing(&config.logging.level);

    tracing::info!("Quill {} - Starting Server", env!("CARGO_PKG_VERSION"));

    let state = bootstrap::build_state(&config).await?;
    let router = create_router(state);

    ApiServer::new(config.server).run(router).await
}

fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

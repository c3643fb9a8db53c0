//! HTTP server with graceful shutdown

use std::future::Future;

use axum::Router;
use quill_config::ServerConfig;
use tokio::{net::TcpListener, signal};

/// Binds the configured address and serves a router until shutdown
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    /// Create a server for `config`
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Listener configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn run(self, router: Router) -> anyhow::Result<()> {
        let address = self.config.address();

        tracing::info!("Starting server on {}", address);
        let listener = TcpListener::bind(&address).await?;

        serve(listener, router, shutdown_signal()).await
    }
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[test]
    fn test_config_is_kept() {
        let server = ApiServer::new(ServerConfig {
            host: "127.0.0.1".into(),
            port: 9000,
        });
        assert_eq!(server.config().address(), "127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().route("/ping", get(|| async { "pong" }));

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve(listener, router, async {
            let _ = rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /ping HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("pong"));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}

//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_post_routes, health_routes};
use crate::config::ServerConfig;
use crate::core::{PostStorage, PostStore};
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the blog HTTP server
///
/// Without an explicit storage backend, the backend described by the
/// configuration is used.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_storage(InMemoryStorage::with_seed_posts())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    store: Option<PostStore>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            store: None,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific storage backend instead of the configured one
    pub fn with_storage(mut self, storage: impl PostStorage + 'static) -> Self {
        self.store = Some(PostStore::new(storage));
        self
    }

    /// Use an existing store
    ///
    /// Useful when the caller needs to keep a handle on the same collection.
    pub fn with_store(mut self, store: PostStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Get the configuration the server will use
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Post CRUD and search routes
    /// - Health check routes
    /// - An open CORS policy (any origin, method and header)
    /// - Request tracing
    pub fn build(self) -> Result<Router> {
        let store = match self.store {
            Some(store) => store,
            None => PostStore::from_arc(self.config.build_storage()),
        };
        tracing::debug!(backend = store.backend_name(), "building router");

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = health_routes()
            .merge(build_post_routes(AppState::new(store)))
            .layer(cors)
            .layer(TraceLayer::new_for_http());

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.socket_addr();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

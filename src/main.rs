//! Blog posts backend server
//!
//! Usage: `blog-backend [config.yaml]`
//!
//! Without a configuration file the server listens on 0.0.0.0:5002 and
//! stores posts in `posts.json`. Log verbosity follows `RUST_LOG`.

use blog::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            ServerConfig::from_yaml_file(&path)?
        }
        None => ServerConfig::default(),
    };

    tracing::info!(
        storage = ?config.storage,
        data_file = %config.data_file.display(),
        "Starting blog backend"
    );

    ServerBuilder::new().with_config(config).serve().await
}

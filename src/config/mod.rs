//! Configuration loading and management

use crate::core::PostStorage;
use crate::storage::{InMemoryStorage, JsonFileStorage};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Which storage backend holds the posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Process memory, lost on restart
    Memory,
    /// A JSON file rewritten on every mutation
    #[default]
    File,
}

/// Server configuration
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
///
/// ```yaml
/// host: 127.0.0.1
/// port: 8080
/// storage: file
/// data_file: /var/lib/blog/posts.json
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5002)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Storage backend (default: file)
    #[serde(default)]
    pub storage: StorageKind,

    /// Backing file of the file storage (default: "posts.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Start the memory storage with two seed posts (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5002
}

fn default_data_file() -> PathBuf {
    PathBuf::from("posts.json")
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            storage: StorageKind::default(),
            data_file: default_data_file(),
            seed: default_seed(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the storage backend this configuration describes
    pub fn build_storage(&self) -> Arc<dyn PostStorage> {
        match self.storage {
            StorageKind::Memory if self.seed => Arc::new(InMemoryStorage::with_seed_posts()),
            StorageKind::Memory => Arc::new(InMemoryStorage::new()),
            StorageKind::File => Arc::new(JsonFileStorage::new(self.data_file.clone())),
        }
    }
}

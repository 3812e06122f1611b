//! Flat-file implementation of PostStorage
//!
//! The whole collection is stored as one JSON array and rewritten on every
//! save. There is no locking and no atomic rename: a crash in the middle of
//! a write can leave a truncated file behind.

use crate::core::{Post, PostStorage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// JSON file post storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PostStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<Post>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "data file not found, starting with an empty collection"
                );
                self.save(&[]).await?;
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };

        serde_json::from_str(&content).with_context(|| format!("parse {}", self.path.display()))
    }

    async fn save(&self, posts: &[Post]) -> Result<()> {
        let content = serde_json::to_string_pretty(posts)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("write {}", self.path.display()))
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

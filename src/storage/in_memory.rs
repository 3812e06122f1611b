//! In-memory implementation of PostStorage for testing and development

use crate::core::{Post, PostStorage};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory post storage
///
/// The collection lives in process memory and is lost on restart. Uses
/// RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryStorage {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Create an in-memory storage holding `posts`
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    /// Create an in-memory storage holding the two seed posts
    pub fn with_seed_posts() -> Self {
        Self::with_posts(Self::seed_posts())
    }

    /// The two posts a fresh development server starts with
    pub fn seed_posts() -> Vec<Post> {
        vec![
            Post {
                id: 1,
                title: "First post".to_string(),
                content: "This is the first post.".to_string(),
                author: "Admin".to_string(),
                date: "2023-06-07".to_string(),
            },
            Post {
                id: 2,
                title: "Second post".to_string(),
                content: "This is the second post.".to_string(),
                author: "Admin".to_string(),
                date: "2023-06-08".to_string(),
            },
        ]
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStorage for InMemoryStorage {
    async fn load(&self) -> Result<Vec<Post>> {
        let posts = self
            .posts
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(posts.clone())
    }

    async fn save(&self, posts: &[Post]) -> Result<()> {
        let mut stored = self
            .posts
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        *stored = posts.to_vec();

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

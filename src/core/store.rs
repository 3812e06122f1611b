//! The post store
//!
//! [`PostStore`] owns the authoritative collection through a storage
//! backend. Every operation re-reads the backend, and every mutation writes
//! the whole collection back before returning.

use crate::core::error::BlogError;
use crate::core::post::{DATE_FORMAT, NewPost, Post, PostPatch};
use crate::core::service::PostStorage;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store for blog posts
///
/// Cloning is cheap and clones share the same backend and write lock.
#[derive(Clone)]
pub struct PostStore {
    storage: Arc<dyn PostStorage>,
    /// Serializes read-modify-write sequences within this process
    write_lock: Arc<Mutex<()>>,
}

impl PostStore {
    /// Create a store over a storage backend
    pub fn new(storage: impl PostStorage + 'static) -> Self {
        Self::from_arc(Arc::new(storage))
    }

    /// Create a store over a shared storage backend
    pub fn from_arc(storage: Arc<dyn PostStorage>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Name of the underlying backend
    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    async fn load(&self) -> Result<Vec<Post>, BlogError> {
        self.storage.load().await.map_err(BlogError::Storage)
    }

    async fn save(&self, posts: &[Post]) -> Result<(), BlogError> {
        self.storage.save(posts).await.map_err(BlogError::Storage)
    }

    /// List all posts in stored order
    pub async fn list(&self) -> Result<Vec<Post>, BlogError> {
        let posts = self.load().await?;
        tracing::debug!(count = posts.len(), "listed posts");
        Ok(posts)
    }

    /// Get a post by id
    pub async fn get(&self, id: u64) -> Result<Post, BlogError> {
        self.load()
            .await?
            .into_iter()
            .find(|post| post.id == id)
            .ok_or_else(|| BlogError::not_found(id))
    }

    /// Create a post
    ///
    /// The id is `max(existing ids) + 1`, or 1 for an empty store. A post
    /// without a date is stamped with today's server-local date.
    pub async fn create(&self, new_post: NewPost) -> Result<Post, BlogError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        let id = next_id(&posts)?;
        let post = new_post.into_post(id, &today());
        posts.push(post.clone());
        self.save(&posts).await?;

        tracing::info!(id = post.id, "created post");
        Ok(post)
    }

    /// Merge a patch over an existing post
    pub async fn update(&self, id: u64, patch: PostPatch) -> Result<Post, BlogError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        let slot = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| BlogError::not_found(id))?;
        let updated = patch.apply(slot);
        *slot = updated.clone();
        self.save(&posts).await?;

        tracing::info!(id, "updated post");
        Ok(updated)
    }

    /// Delete a post
    pub async fn delete(&self, id: u64) -> Result<(), BlogError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.load().await?;

        let position = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| BlogError::not_found(id))?;
        posts.remove(position);
        self.save(&posts).await?;

        tracing::info!(id, "deleted post");
        Ok(())
    }
}

/// Next id to assign: one past the highest id in use
///
/// Fails when the highest id is already `u64::MAX`, which only a
/// hand-edited data file can produce.
pub fn next_id(posts: &[Post]) -> Result<u64, BlogError> {
    match posts.iter().map(|post| post.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            BlogError::Storage(anyhow::anyhow!("post id space exhausted after id {}", max))
        }),
    }
}

/// Today's server-local date, formatted `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

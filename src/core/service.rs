//! Storage trait for the post collection

use crate::core::post::Post;
use anyhow::Result;
use async_trait::async_trait;

/// Load/save interface of a persistence backend
///
/// A backend only knows how to read and write the whole collection. Id
/// assignment, lookups and merging live in [`PostStore`](crate::core::store::PostStore),
/// so backends can be swapped without touching handler or query logic.
#[async_trait]
pub trait PostStorage: Send + Sync {
    /// Return the full collection, in stored order
    ///
    /// A backend with nothing persisted yet returns an empty collection.
    async fn load(&self) -> Result<Vec<Post>>;

    /// Replace the full collection
    async fn save(&self, posts: &[Post]) -> Result<()>;

    /// Short name used in logs
    fn backend_name(&self) -> &'static str;
}

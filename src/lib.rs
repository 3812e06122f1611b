//! # Blog Posts Backend
//!
//! A small HTTP JSON API managing blog posts: list, create, update, delete,
//! sort and search.
//!
//! ## Features
//!
//! - **REST Endpoints**: `/api/posts` CRUD plus `/api/posts/search`
//! - **Sorting**: by title, content, author or date, ascending or descending
//! - **Substring Search**: one term across every field, or per-field terms
//! - **Pluggable Storage**: in-memory or a single JSON file
//! - **Open CORS**: any origin may call the API
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blog::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_storage(JsonFileStorage::new("posts.json"))
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BlogError, ErrorResponse, ListParams, NewPost, Post, PostField, PostPatch, PostStorage,
        PostStore, SearchParams, SortDirection, ValidationError,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStorage, JsonFileStorage};

    // === Config ===
    pub use crate::config::{ServerConfig, StorageKind};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}

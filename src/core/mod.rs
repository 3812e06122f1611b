//! Core module containing the domain model, validation, queries and the store

pub mod error;
pub mod post;
pub mod query;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{BlogError, ErrorResponse, ValidationError};
pub use post::{NewPost, Post, PostField, PostPatch};
pub use query::{ListParams, SearchParams, SortDirection};
pub use service::PostStorage;
pub use store::PostStore;

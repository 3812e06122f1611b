//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires the post store into
//! the route table and applies the CORS and tracing layers.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;

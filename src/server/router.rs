//! Route table

use crate::server::handlers::{
    AppState, create_post, delete_post, get_post, list_posts, search_posts, update_post,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the post routes
///
/// - GET /api/posts - List posts, optionally sorted
/// - POST /api/posts - Create a post
/// - GET /api/posts/search - Search posts
/// - GET /api/posts/{id} - Get a post
/// - PUT /api/posts/{id} - Update a post
/// - DELETE /api/posts/{id} - Delete a post
pub fn build_post_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/search", get(search_posts))
        .route(
            "/api/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME")
    }))
}

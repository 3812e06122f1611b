//! HTTP handlers for post operations
//!
//! Each handler is a single load-validate-act-respond sequence. Handlers
//! return `Result<_, BlogError>` so every failure renders as a JSON
//! `{"message": ...}` body with the matching status code.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::error::BlogError;
use crate::core::query::{self, ListParams, SearchParams};
use crate::core::validation::{self, JsonObject, QueryPairs};
use crate::core::{Post, PostStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: PostStore,
}

impl AppState {
    pub fn new(store: PostStore) -> Self {
        Self { store }
    }
}

/// Body of a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse the `{id}` path segment
///
/// A segment that is not a post id can never match a post, so it is
/// reported as not found with the segment echoed back.
fn parse_id(raw: &str) -> Result<u64, BlogError> {
    raw.parse().map_err(|_| BlogError::NotFound {
        id: raw.to_string(),
    })
}

/// List all posts
///
/// Route: GET /api/posts?sort={field}&direction={asc|desc}
pub async fn list_posts(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Vec<Post>>, BlogError> {
    let params = ListParams::from_query(&query);
    let field = validation::validate_sort_field(params.sort.as_deref())?;
    let direction = validation::validate_direction(params.direction.as_deref())?;

    let posts = state.store.list().await?;
    let posts = match field {
        Some(field) => query::sort_posts(posts, field, direction),
        None => posts,
    };

    Ok(Json(posts))
}

/// Create a post
///
/// Route: POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<(StatusCode, Json<Post>), BlogError> {
    let new_post = validation::validate_new_post(&body)?;
    let post = state.store.create(new_post).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a single post
///
/// Route: GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Post>, BlogError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.store.get(id).await?))
}

/// Update a post with the fields supplied in the body
///
/// Route: PUT /api/posts/{id}
///
/// An unknown id is reported before the body is looked at.
pub async fn update_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<JsonObject, BlogError>,
) -> Result<Json<Post>, BlogError> {
    let id = parse_id(&raw_id)?;
    state.store.get(id).await?;

    let JsonObject(body) = body?;
    let patch = validation::validate_patch(&body)?;
    let post = state.store.update(id, patch).await?;

    Ok(Json(post))
}

/// Delete a post
///
/// Route: DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, BlogError> {
    let id = parse_id(&raw_id)?;
    state.store.delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("Post with id {} has been deleted successfully.", id),
    }))
}

/// Search posts by substring
///
/// Route: GET /api/posts/search?term={term}
///
/// Parameters are not validated: any term is accepted, including none.
pub async fn search_posts(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Vec<Post>>, BlogError> {
    let params = SearchParams::from_query(&query);
    let posts = state.store.list().await?;
    Ok(Json(query::search_posts(posts, &params)))
}

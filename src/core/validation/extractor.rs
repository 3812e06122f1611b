//! Axum extractors for request bodies and query strings
//!
//! Handlers that accept a post payload take a [`JsonObject`]. Anything that
//! is not a well-formed JSON object (bad syntax, wrong content type, an
//! array, a bare string) is rejected with a 400 before the handler runs.
//!
//! Handlers that read query parameters take [`QueryPairs`], which keeps
//! every raw pair so a repeated key resolves to its first value instead of
//! failing deserialization.

use crate::core::error::{BlogError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};

/// A request body that parsed as a JSON object
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_post(
///     State(state): State<AppState>,
///     JsonObject(body): JsonObject,
/// ) -> Result<impl IntoResponse, BlogError> {
///     let new_post = validate_new_post(&body)?;
///     // ...
/// }
/// ```
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            BlogError::from(ValidationError::InvalidBody)
        })?;

        match payload {
            Value::Object(map) => Ok(JsonObject(map)),
            _ => Err(ValidationError::InvalidBody.into()),
        }
    }
}

/// The raw key/value pairs of a query string, in order
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn list_posts(query: QueryPairs) -> Result<impl IntoResponse, BlogError> {
///     let params = ListParams::from_query(&query);
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// First value supplied for `key`, if any
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected query string");
                BlogError::from(ValidationError::InvalidQuery)
            })?;

        Ok(QueryPairs(pairs))
    }
}

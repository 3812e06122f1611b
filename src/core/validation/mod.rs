//! Validation of query parameters and request bodies
//!
//! Handlers never look at raw parameters themselves: they pass them through
//! the functions below and receive typed values ([`PostField`],
//! [`SortDirection`], [`NewPost`], [`PostPatch`]) or a [`ValidationError`].

pub mod extractor;
pub mod validators;

pub use extractor::{JsonObject, QueryPairs};

use crate::core::error::ValidationError;
use crate::core::post::{NewPost, PostField, PostPatch};
use crate::core::query::SortDirection;
use serde_json::{Map, Value};

/// Validate the `sort` query parameter
///
/// An absent or empty parameter means "no sort".
pub fn validate_sort_field(sort: Option<&str>) -> Result<Option<PostField>, ValidationError> {
    match sort {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidSortField),
    }
}

/// Validate the `direction` query parameter
///
/// An absent or empty parameter means ascending.
pub fn validate_direction(direction: Option<&str>) -> Result<SortDirection, ValidationError> {
    match direction {
        None | Some("") => Ok(SortDirection::Asc),
        Some(d) => d.parse().map_err(|_| ValidationError::InvalidSortDirection),
    }
}

/// Validate a create body
///
/// `title`, `content` and `author` must all be non-empty strings. `date` is
/// optional; a falsy `date` is treated as absent so the server stamps it.
pub fn validate_new_post(body: &Map<String, Value>) -> Result<NewPost, ValidationError> {
    let title = validators::required_text(body.get("title"));
    let content = validators::required_text(body.get("content"));
    let author = validators::required_text(body.get("author"));

    let (Some(title), Some(content), Some(author)) = (title, content, author) else {
        return Err(ValidationError::MissingRequiredFields);
    };

    let date = match body.get("date") {
        Some(value) if validators::is_falsy(value) => None,
        other => validators::optional_text("date", other)?,
    };

    Ok(NewPost {
        title,
        content,
        author,
        date,
    })
}

/// Validate an update body into a patch
///
/// Only the fields present in the body end up in the patch. Unknown keys
/// (including `id`) are ignored.
pub fn validate_patch(body: &Map<String, Value>) -> Result<PostPatch, ValidationError> {
    Ok(PostPatch {
        title: validators::optional_text("title", body.get("title"))?,
        content: validators::optional_text("content", body.get("content"))?,
        author: validators::optional_text("author", body.get("author"))?,
        date: validators::optional_text("date", body.get("date"))?,
    })
}

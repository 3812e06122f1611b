//! Query parameters, sorting and search
//!
//! Sorting and searching are views over the collection: they take the
//! posts by value and return a new sequence, never touching stored order.

use crate::core::post::{Post, PostField};
use crate::core::validation::QueryPairs;
use std::cmp::Ordering;
use std::str::FromStr;

/// Query parameters of the list endpoint
///
/// Both values are kept raw so that the validator decides what is allowed.
/// A repeated parameter contributes only its first value.
///
/// # Example
/// ```text
/// GET /api/posts?sort=title
/// GET /api/posts?sort=date&direction=desc
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Field to sort by (`title`, `content`, `author` or `date`)
    pub sort: Option<String>,

    /// `asc` (default) or `desc`
    pub direction: Option<String>,
}

impl ListParams {
    /// Read the list parameters from a query string
    pub fn from_query(query: &QueryPairs) -> Self {
        Self {
            sort: query.first("sort").map(str::to_string),
            direction: query.first("direction").map(str::to_string),
        }
    }
}

/// Query parameters of the search endpoint
///
/// `term` is matched against every field. The per-field parameters only
/// check their own field. All criteria are OR-combined, and no criteria at
/// all matches every post.
///
/// # Example
/// ```text
/// GET /api/posts/search?term=rust
/// GET /api/posts/search?title=First&content=second
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub term: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl SearchParams {
    /// Read the search parameters from a query string
    ///
    /// A repeated parameter contributes only its first value.
    pub fn from_query(query: &QueryPairs) -> Self {
        let get = |key: &str| query.first(key).map(str::to_string);
        Self {
            term: get("term"),
            title: get("title"),
            content: get("content"),
            author: get("author"),
            date: get("date"),
        }
    }

    /// Build a search on a single term across all fields
    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Default::default()
        }
    }

    /// Flatten the parameters into (field, needle) pairs
    fn criteria(&self) -> Vec<(PostField, &str)> {
        let mut criteria = Vec::new();

        if let Some(term) = &self.term {
            criteria.extend(PostField::ALL.iter().map(|field| (*field, term.as_str())));
        }

        let per_field = [
            (PostField::Title, &self.title),
            (PostField::Content, &self.content),
            (PostField::Author, &self.author),
            (PostField::Date, &self.date),
        ];
        for (field, needle) in per_field {
            if let Some(needle) = needle {
                criteria.push((field, needle.as_str()));
            }
        }

        criteria
    }

    /// Returns true when `post` satisfies at least one criterion
    pub fn matches(&self, post: &Post) -> bool {
        let criteria = self.criteria();
        criteria.is_empty()
            || criteria
                .iter()
                .any(|(field, needle)| post.field(*field).contains(needle))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Compare two posts on a single field
///
/// Strings compare lexicographically. Dates formatted `YYYY-MM-DD` compare
/// chronologically and come before dates that do not parse, which compare
/// lexicographically among themselves.
pub fn compare_by(a: &Post, b: &Post, field: PostField) -> Ordering {
    match field {
        PostField::Date => match (a.parsed_date(), b.parsed_date()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.date.cmp(&b.date),
        },
        _ => a.field(field).cmp(b.field(field)),
    }
}

/// Sort posts by a field
///
/// The sort is stable in both directions: posts with equal keys keep their
/// relative order even when `direction` is [`SortDirection::Desc`].
pub fn sort_posts(mut posts: Vec<Post>, field: PostField, direction: SortDirection) -> Vec<Post> {
    match direction {
        SortDirection::Asc => posts.sort_by(|a, b| compare_by(a, b, field)),
        SortDirection::Desc => posts.sort_by(|a, b| compare_by(b, a, field)),
    }
    posts
}

/// Keep the posts matching a search
pub fn search_posts(posts: Vec<Post>, params: &SearchParams) -> Vec<Post> {
    posts.into_iter().filter(|post| params.matches(post)).collect()
}

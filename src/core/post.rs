//! The post record and the value objects built around it

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used for server-stamped dates and chronological sorting
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A blog post
///
/// This is the only entity managed by the backend. Its serialized form is
/// both the HTTP representation and the on-disk representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

impl Post {
    /// Read the value of a field through the typed selector
    pub fn field(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Content => &self.content,
            PostField::Author => &self.author,
            PostField::Date => &self.date,
        }
    }

    /// Parse `date` as a calendar date, if it is formatted `YYYY-MM-DD`
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// A validated create payload
///
/// `date` is optional: when absent the store stamps the server-local date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: Option<String>,
}

impl NewPost {
    /// Turn the payload into a stored post
    pub fn into_post(self, id: u64, today: &str) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            date: self.date.unwrap_or_else(|| today.to_string()),
        }
    }
}

/// The fields supplied by an update request
///
/// A `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl PostPatch {
    /// Merge the supplied fields over `post`, returning the new record
    ///
    /// The id is never touched.
    pub fn apply(&self, post: &Post) -> Post {
        Post {
            id: post.id,
            title: self.title.clone().unwrap_or_else(|| post.title.clone()),
            content: self.content.clone().unwrap_or_else(|| post.content.clone()),
            author: self.author.clone().unwrap_or_else(|| post.author.clone()),
            date: self.date.clone().unwrap_or_else(|| post.date.clone()),
        }
    }
}

/// Selector for the text fields of a post
///
/// Used for sorting and searching in place of string-keyed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    Title,
    Content,
    Author,
    Date,
}

impl PostField {
    /// All selectable fields, in declaration order
    pub const ALL: [PostField; 4] = [
        PostField::Title,
        PostField::Content,
        PostField::Author,
        PostField::Date,
    ];

    /// Name of the field as it appears in JSON and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            PostField::Title => "title",
            PostField::Content => "content",
            PostField::Author => "author",
            PostField::Date => "date",
        }
    }
}

impl fmt::Display for PostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

//! The Book record exchanged with the book API

use serde::{Deserialize, Serialize};

/// A single inventory record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique numeric identifier, assigned by the user
    pub id: i64,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Year of publication
    pub publication_year: i32,

    /// ISBN as printed on the book
    pub isbn: String,
}

impl Book {
    /// Create a new book record
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year,
            isbn: isbn.into(),
        }
    }
}

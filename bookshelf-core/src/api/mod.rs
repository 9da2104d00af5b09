//! Book API abstraction
//!
//! [`BookApi`] is the seam between the controller and the REST backend. [`HttpBookApi`]
//! talks to a real server; [`MemoryBookApi`] keeps records in process for tests and demos.

mod http;
mod memory;

pub use http::HttpBookApi;
pub use memory::MemoryBookApi;

use crate::error::ApiError;
use crate::types::Book;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Body of a failed request: `{ "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Remote book collection
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET /all`: every book in the collection
    async fn list(&self) -> ApiResult<Vec<Book>>;

    /// `GET /get/{id}`: a single book
    async fn get(&self, id: i64) -> ApiResult<Book>;

    /// `POST /add`: create a book
    async fn add(&self, book: &Book) -> ApiResult<()>;

    /// `PUT /update`: replace the book with the same id
    async fn update(&self, book: &Book) -> ApiResult<()>;

    /// `DELETE /delete/{id}`: remove a book, returning the server's response text
    async fn delete(&self, id: i64) -> ApiResult<String>;
}

#[async_trait]
impl<T: BookApi + ?Sized> BookApi for std::sync::Arc<T> {
    async fn list(&self) -> ApiResult<Vec<Book>> {
        (**self).list().await
    }

    async fn get(&self, id: i64) -> ApiResult<Book> {
        (**self).get(id).await
    }

    async fn add(&self, book: &Book) -> ApiResult<()> {
        (**self).add(book).await
    }

    async fn update(&self, book: &Book) -> ApiResult<()> {
        (**self).update(book).await
    }

    async fn delete(&self, id: i64) -> ApiResult<String> {
        (**self).delete(id).await
    }
}

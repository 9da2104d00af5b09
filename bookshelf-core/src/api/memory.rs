//! In-memory implementation of [`BookApi`] (for testing)

use super::{ApiResult, BookApi};
use crate::error::ApiError;
use crate::types::Book;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

/// Book collection held in process, keyed and ordered by id
#[derive(Default)]
pub struct MemoryBookApi {
    books: RwLock<BTreeMap<i64, Book>>,
    requests: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryBookApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let api = Self::new();
        api.write().extend(books.into_iter().map(|b| (b.id, b)));
        api
    }

    /// Number of requests received so far, including failed ones
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Make every following request fail with a transport error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Snapshot of the stored records
    pub fn books(&self) -> Vec<Book> {
        self.read().values().cloned().collect()
    }

    fn begin(&self) -> ApiResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<i64, Book>> {
        self.books.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<i64, Book>> {
        self.books.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn conflict(message: String) -> ApiError {
    ApiError::Status {
        status: 409,
        message: Some(message),
    }
}

#[async_trait]
impl BookApi for MemoryBookApi {
    async fn list(&self) -> ApiResult<Vec<Book>> {
        self.begin()?;
        Ok(self.books())
    }

    async fn get(&self, id: i64) -> ApiResult<Book> {
        self.begin()?;
        self.read()
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("book {}", id)))
    }

    async fn add(&self, book: &Book) -> ApiResult<()> {
        self.begin()?;
        let mut books = self.write();
        if books.contains_key(&book.id) {
            return Err(conflict(format!("Book with id {} already exists", book.id)));
        }
        if books.values().any(|b| b.isbn == book.isbn) {
            return Err(conflict(format!("ISBN {} is already in use", book.isbn)));
        }
        books.insert(book.id, book.clone());
        Ok(())
    }

    async fn update(&self, book: &Book) -> ApiResult<()> {
        self.begin()?;
        let mut books = self.write();
        if !books.contains_key(&book.id) {
            return Err(ApiError::Status {
                status: 404,
                message: Some(format!("Book with id {} not found", book.id)),
            });
        }
        if books
            .values()
            .any(|b| b.id != book.id && b.isbn == book.isbn)
        {
            return Err(conflict(format!("ISBN {} is already in use", book.isbn)));
        }
        books.insert(book.id, book.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<String> {
        self.begin()?;
        self.write()
            .remove(&id)
            .map(|_| "Book deleted successfully".to_string())
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: Some(format!("Book with id {} not found", id)),
            })
    }
}

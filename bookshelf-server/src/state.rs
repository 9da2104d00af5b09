//! Application state

use anyhow::Result;
use bookshelf_core::Book;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// In-memory book index
    pub library: Arc<RwLock<Library>>,

    /// JSON file the library is persisted to; `None` keeps everything in memory
    pub data_file: Option<PathBuf>,
}

/// Why a library change was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Book with id {0} not found")]
    NotFound(i64),

    #[error("Book with id {0} already exists")]
    DuplicateId(i64),

    #[error("ISBN {0} is already in use")]
    DuplicateIsbn(String),
}

/// Library index keyed by book id
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Library {
    pub books: BTreeMap<i64, Book>,
}

impl Library {
    /// Every book, ordered by id
    pub fn all(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Result<&Book, LibraryError> {
        self.books.get(&id).ok_or(LibraryError::NotFound(id))
    }

    /// Add a new book; ids and ISBNs must be unused
    pub fn insert(&mut self, book: Book) -> Result<(), LibraryError> {
        if self.books.contains_key(&book.id) {
            return Err(LibraryError::DuplicateId(book.id));
        }
        self.check_isbn(&book)?;
        self.books.insert(book.id, book);
        Ok(())
    }

    /// Replace the book with the same id
    pub fn update(&mut self, book: Book) -> Result<(), LibraryError> {
        if !self.books.contains_key(&book.id) {
            return Err(LibraryError::NotFound(book.id));
        }
        self.check_isbn(&book)?;
        self.books.insert(book.id, book);
        Ok(())
    }

    pub fn remove(&mut self, id: i64) -> Result<Book, LibraryError> {
        self.books.remove(&id).ok_or(LibraryError::NotFound(id))
    }

    fn check_isbn(&self, book: &Book) -> Result<(), LibraryError> {
        if self
            .books
            .values()
            .any(|b| b.id != book.id && b.isbn == book.isbn)
        {
            return Err(LibraryError::DuplicateIsbn(book.isbn.clone()));
        }
        Ok(())
    }

    /// Load library from a JSON file
    pub async fn load(path: &Path) -> Result<Self> {
        // Read file directly, handle NotFound as empty library
        match tokio::fs::read_to_string(path).await {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save library to a JSON file atomically
    /// Writes to a temp file then renames to avoid partial writes
    pub async fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to temp file in same directory (ensures same filesystem for rename)
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &data).await?;

        // Atomic rename
        tokio::fs::rename(&temp_path, path).await?;
        Ok(())
    }
}

impl AppState {
    /// Create application state from the environment.
    ///
    /// `BOOKSHELF_DATA_FILE` names the JSON file backing the library
    /// (default `./bookshelf_data/library.json`).
    pub async fn new() -> Result<Self> {
        let data_file = std::env::var("BOOKSHELF_DATA_FILE")
            .unwrap_or_else(|_| "./bookshelf_data/library.json".to_string());
        Self::with_data_file(PathBuf::from(data_file)).await
    }

    /// State persisted to `data_file`, loading whatever it already holds
    pub async fn with_data_file(data_file: PathBuf) -> Result<Self> {
        let library = match Library::load(&data_file).await {
            Ok(lib) => lib,
            Err(e) => {
                tracing::warn!("Failed to load library, starting fresh: {}", e);
                Library::default()
            }
        };
        tracing::info!(
            books = library.books.len(),
            path = %data_file.display(),
            "Library loaded"
        );

        Ok(Self {
            library: Arc::new(RwLock::new(library)),
            data_file: Some(data_file),
        })
    }

    /// State that is never written to disk
    pub fn in_memory(library: Library) -> Self {
        Self {
            library: Arc::new(RwLock::new(library)),
            data_file: None,
        }
    }

    /// Persist the library if a data file is configured
    pub async fn save_library(&self, library: &Library) -> Result<()> {
        match &self.data_file {
            Some(path) => library.save(path).await,
            None => Ok(()),
        }
    }
}

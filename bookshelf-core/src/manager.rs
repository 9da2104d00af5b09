//! The book manager: UI state plus the handlers that drive it
//!
//! [`BookManager`] owns everything a view renders: the list of books, the form and its
//! [`FormMode`], the fetch-by-id input and result, and the current [`StatusMessage`].
//! Every handler converts its outcome into a status message; none of them fail.
//!
//! Handlers take `&mut self`, so one manager never has two requests in flight.

use crate::api::BookApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ValidationError};
use crate::status::{StatusMessage, DEFAULT_STATUS_TTL};
use crate::types::{Book, BookForm, FormField, FormMode};
use std::time::{Duration, Instant};

/// Question asked before a delete is dispatched
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this book?";

/// Interactive yes/no confirmation
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// State container for the inventory view
pub struct BookManager<A> {
    api: A,
    books: Vec<Book>,
    form: BookForm,
    mode: FormMode,
    id_to_fetch: String,
    fetched: Option<Book>,
    status: Option<StatusMessage>,
    status_ttl: Duration,
    scroll_to_form: bool,
}

impl<A: BookApi> BookManager<A> {
    /// Create a manager with an empty list and an empty form in create mode
    pub fn new(api: A) -> Self {
        Self {
            api,
            books: Vec::new(),
            form: BookForm::new(),
            mode: FormMode::Create,
            id_to_fetch: String::new(),
            fetched: None,
            status: None,
            status_ttl: DEFAULT_STATUS_TTL,
            scroll_to_form: false,
        }
    }

    /// Create a manager using the status lifetime from `config`
    pub fn with_config(api: A, config: &ClientConfig) -> Self {
        let mut manager = Self::new(api);
        manager.status_ttl = config.status_ttl;
        manager
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn id_to_fetch(&self) -> &str {
        &self.id_to_fetch
    }

    pub fn fetched(&self) -> Option<&Book> {
        self.fetched.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Returns whether the view should bring the form into view, clearing the request
    pub fn take_scroll_to_form(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_form)
    }

    /// Load the initial list
    pub async fn mount(&mut self) {
        self.load_books().await;
    }

    /// Replace the list with the server's collection.
    ///
    /// On failure the previous list stays in place.
    pub async fn load_books(&mut self) {
        match self.api.list().await {
            Ok(books) => {
                tracing::debug!(count = books.len(), "Loaded books");
                self.books = books;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch books: {}", e);
                self.set_status("Error: Failed to fetch books.");
            }
        }
    }

    /// Update one form field. The id is locked while editing.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        if field == FormField::Id && self.mode.is_edit() {
            tracing::debug!("Ignoring id change while editing");
            return;
        }
        self.form.set(field, value);
    }

    pub fn set_id_to_fetch(&mut self, value: impl Into<String>) {
        self.id_to_fetch = value.into();
    }

    /// Validate the form without submitting it
    pub fn validate(&self) -> Result<Book, ValidationError> {
        let mut book = self.form.validate()?;
        if let FormMode::Edit { id } = self.mode {
            book.id = id;
        }
        Ok(book)
    }

    /// Add or update the record in the form, depending on the mode
    pub async fn submit(&mut self) {
        let book = match self.validate() {
            Ok(book) => book,
            Err(e) => {
                self.set_status(format!("Error: {}", e));
                return;
            }
        };

        let (result, verb) = match self.mode {
            FormMode::Create => (self.api.add(&book).await, "added"),
            FormMode::Edit { .. } => (self.api.update(&book).await, "updated"),
        };

        match result {
            Ok(()) => {
                tracing::info!(id = book.id, "Book {}", verb);
                self.clear_form();
                self.set_status(format!("Book {} successfully.", verb));
                self.load_books().await;
            }
            Err(e) => {
                tracing::warn!(id = book.id, "Failed to save book: {}", e);
                let reason = e.server_message().unwrap_or("Could not save the book.");
                self.set_status(format!("Error: {}", reason));
            }
        }
    }

    /// Delete a record after asking `confirm`; a refusal does nothing
    pub async fn delete_book(&mut self, id: i64, confirm: &mut impl Confirm) {
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(id, "Delete cancelled");
            return;
        }

        match self.api.delete(id).await {
            Ok(text) => {
                tracing::info!(id, "Book deleted");
                self.set_status(text);
                self.load_books().await;
            }
            Err(e) => {
                tracing::warn!(id, "Failed to delete book: {}", e);
                self.set_status("Error: Could not delete the book.");
            }
        }
    }

    /// Look up the record whose id is in the fetch input
    pub async fn fetch_by_id(&mut self) {
        let input = self.id_to_fetch.trim();
        if input.is_empty() {
            self.set_status("Error: Please enter an ID to fetch.");
            return;
        }

        let result = match input.parse::<i64>() {
            Ok(id) => self.api.get(id).await,
            Err(_) => Err(ApiError::NotFound(input.to_string())),
        };

        match result {
            Ok(book) => {
                self.fetched = Some(book);
                self.set_status("Book found successfully.");
            }
            Err(e) => {
                tracing::debug!("Fetch by id failed: {}", e);
                self.fetched = None;
                self.set_status("Error: Book not found.");
            }
        }
    }

    /// Load a row into the form and switch to edit mode
    pub fn begin_edit(&mut self, book: &Book) {
        self.form = BookForm::from(book);
        self.mode = FormMode::Edit { id: book.id };
        self.scroll_to_form = true;
        self.set_status(format!("Editing book: \"{}\"", book.title));
    }

    /// Like [`begin_edit`](Self::begin_edit), picking the row from the current list
    pub fn begin_edit_by_id(&mut self, id: i64) {
        match self.books.iter().find(|b| b.id == id).cloned() {
            Some(book) => self.begin_edit(&book),
            None => self.set_status(format!("Error: Book {} is not in the list.", id)),
        }
    }

    /// Empty the form, leave edit mode and clear the status message
    pub fn reset_form(&mut self) {
        self.clear_form();
        self.status = None;
    }

    /// Drop the status message once it has expired
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }

    fn clear_form(&mut self) {
        self.form = BookForm::new();
        self.mode = FormMode::Create;
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text, Instant::now(), self.status_ttl));
    }
}

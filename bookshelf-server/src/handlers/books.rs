//! Book CRUD handlers

use crate::state::{AppState, Library, LibraryError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bookshelf_core::{Book, ErrorResponse};

/// Error half of every handler: a status plus `{ "message": ... }`
pub type ApiFailure = (StatusCode, Json<ErrorResponse>);

fn failure(status: StatusCode, message: impl Into<String>) -> ApiFailure {
    (status, Json(ErrorResponse::new(message)))
}

impl From<LibraryError> for (StatusCode, Json<ErrorResponse>) {
    fn from(e: LibraryError) -> Self {
        let status = match e {
            LibraryError::NotFound(_) => StatusCode::NOT_FOUND,
            LibraryError::DuplicateId(_) | LibraryError::DuplicateIsbn(_) => StatusCode::CONFLICT,
        };
        failure(status, e.to_string())
    }
}

/// Apply `change` to the library and persist it, undoing the change if saving fails
async fn mutate<T>(
    state: &AppState,
    change: impl FnOnce(&mut Library) -> Result<T, LibraryError>,
) -> Result<T, ApiFailure> {
    let mut library = state.library.write().await;
    let snapshot = library.clone();
    let value = change(&mut *library)?;

    if let Err(e) = state.save_library(&*library).await {
        *library = snapshot;
        tracing::error!("Failed to save library: {}", e);
        return Err(failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save library",
        ));
    }
    Ok(value)
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let library = state.library.read().await;
    Json(library.all())
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, ApiFailure> {
    let library = state.library.read().await;
    Ok(Json(library.get(id)?.clone()))
}

/// Add a new book
pub async fn add_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> Result<String, ApiFailure> {
    let id = book.id;
    mutate(&state, |library| library.insert(book)).await?;
    tracing::info!(id, "Book added");
    Ok("Book added successfully".to_string())
}

/// Replace an existing book
pub async fn update_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> Result<String, ApiFailure> {
    let id = book.id;
    mutate(&state, |library| library.update(book)).await?;
    tracing::info!(id, "Book updated");
    Ok("Book updated successfully".to_string())
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, ApiFailure> {
    let removed = mutate(&state, |library| library.remove(id)).await?;
    tracing::info!(id, title = %removed.title, "Book deleted");
    Ok("Book deleted successfully".to_string())
}

//! Bookshelf Core Library
//!
//! This crate provides the record types, form validation and the [`BookManager`] controller
//! for the Bookshelf inventory. The controller talks to a REST backend through the
//! [`BookApi`] trait and turns every outcome into a transient [`StatusMessage`].

pub mod api;
pub mod config;
pub mod error;
pub mod manager;
pub mod status;
pub mod types;

pub use api::{BookApi, ErrorResponse, HttpBookApi, MemoryBookApi};
pub use config::ClientConfig;
pub use error::{ApiError, BookshelfError, Result, ValidationError};
pub use manager::{BookManager, Confirm};
pub use status::{StatusKind, StatusMessage};
pub use types::{Book, BookForm, FormField, FormMode};

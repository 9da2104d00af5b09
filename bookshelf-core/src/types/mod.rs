//! Core types for the book inventory

mod book;
mod form;

pub use book::Book;
pub use form::{BookForm, FormField, FormMode};

//! Error types for Bookshelf Core

use crate::types::FormField;
use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by the form validator before any request is made.
///
/// The `Display` text is what the user sees, minus the `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out the '{}' field.", .0.key())]
    EmptyField(FormField),

    #[error("Publication Year must be a valid number.")]
    InvalidYear,

    #[error("Book ID must be a valid number.")]
    InvalidId,
}

/// Errors that occur while talking to the book API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server returned {status}{}", message_suffix(.message))]
    Status {
        status: u16,
        /// Message supplied by the server in an `{ "message": ... }` body, if any
        message: Option<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl ApiError {
    /// The human-readable message the server attached to this failure, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_field() {
        let err = ValidationError::EmptyField(FormField::PublicationYear);
        assert_eq!(
            err.to_string(),
            "Please fill out the 'publicationYear' field."
        );
        assert_eq!(
            ValidationError::InvalidYear.to_string(),
            "Publication Year must be a valid number."
        );
    }

    #[test]
    fn test_server_message_only_for_status_errors() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Duplicate ISBN".to_string()),
        };
        assert_eq!(err.server_message(), Some("Duplicate ISBN"));
        assert_eq!(err.to_string(), "Server returned 409: Duplicate ISBN");

        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.server_message(), None);
        assert_eq!(bare.to_string(), "Server returned 500");
        assert_eq!(ApiError::Transport("refused".into()).server_message(), None);
    }
}

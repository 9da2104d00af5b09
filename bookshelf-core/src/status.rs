//! Transient status messages shown after every action

use std::time::{Duration, Instant};

/// How long a status message stays visible unless configured otherwise
pub const DEFAULT_STATUS_TTL: Duration = Duration::from_secs(5);

/// Styling of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Classify message text: anything mentioning "error" is an error
    pub fn infer(text: &str) -> Self {
        if text.to_lowercase().contains("error") {
            StatusKind::Error
        } else {
            StatusKind::Success
        }
    }
}

/// A user-facing message that expires after a fixed delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    kind: StatusKind,
    expires_at: Instant,
}

impl StatusMessage {
    /// Create a message shown from `now` for `ttl`
    pub fn new(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        let text = text.into();
        Self {
            kind: StatusKind::infer(&text),
            text,
            expires_at: now + ttl,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Whether the message should no longer be shown at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_inferred_from_text() {
        assert_eq!(StatusKind::infer("Error: Book not found."), StatusKind::Error);
        assert_eq!(StatusKind::infer("network ERROR"), StatusKind::Error);
        assert_eq!(StatusKind::infer("Book added successfully."), StatusKind::Success);
        // Substring match, including inside other words
        assert_eq!(StatusKind::infer("Terrors of the Deep deleted"), StatusKind::Error);
    }

    #[test]
    fn test_expiry() {
        let now = Instant::now();
        let message = StatusMessage::new("Book found successfully.", now, DEFAULT_STATUS_TTL);
        assert!(!message.is_error());
        assert!(!message.is_expired(now));
        assert!(!message.is_expired(now + Duration::from_secs(4)));
        assert!(message.is_expired(now + DEFAULT_STATUS_TTL));
    }
}

//! Client configuration read from the environment

use crate::error::{BookshelfError, Result};
use crate::status::DEFAULT_STATUS_TTL;
use std::time::Duration;

/// Server URL used when `BOOKSHELF_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Path segment every book endpoint lives under
pub const API_PREFIX: &str = "bookapi";

/// Settings for talking to the book API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:8080`
    pub url: String,

    /// How long status messages stay visible
    pub status_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            status_ttl: DEFAULT_STATUS_TTL,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the given server root
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Read `BOOKSHELF_API_URL` and `BOOKSHELF_STATUS_TTL_SECS`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("BOOKSHELF_API_URL").filter(|u| !u.trim().is_empty()) {
            config.url = url;
        }
        if let Some(secs) = lookup("BOOKSHELF_STATUS_TTL_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                BookshelfError::Config(format!(
                    "BOOKSHELF_STATUS_TTL_SECS must be a whole number of seconds, got '{}'",
                    secs
                ))
            })?;
            config.status_ttl = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Base of the book endpoints, e.g. `http://localhost:8080/bookapi`
    pub fn api_base(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), API_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base(), "http://localhost:8080/bookapi");
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("BOOKSHELF_API_URL", "http://books.internal:9000/"),
            ("BOOKSHELF_STATUS_TTL_SECS", "2"),
        ]))
        .unwrap();
        assert_eq!(config.api_base(), "http://books.internal:9000/bookapi");
        assert_eq!(config.status_ttl, Duration::from_secs(2));
    }

    #[test]
    fn test_bad_ttl_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[("BOOKSHELF_STATUS_TTL_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, BookshelfError::Config(_)));
    }
}

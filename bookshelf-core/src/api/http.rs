//! HTTP implementation of [`BookApi`] using reqwest

use super::{ApiResult, BookApi, ErrorResponse};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::Book;
use async_trait::async_trait;
use tracing::instrument;

/// Client for a remote book API
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    base: String,
    client: reqwest::Client,
}

impl HttpBookApi {
    /// Create a client for the endpoints under `config.api_base()`
    #[instrument(skip(config), fields(url = %config.url))]
    pub fn new(config: &ClientConfig) -> Self {
        tracing::debug!("Creating book API client");
        Self {
            base: config.api_base(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL requests are sent to
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Servers report failures as `{ "message": ... }`; anything else carries no message
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .map(|e| e.message)
            .filter(|m| !m.trim().is_empty());
        tracing::warn!(status = status.as_u16(), ?message, "Server returned error");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    #[instrument(skip(self))]
    async fn list(&self) -> ApiResult<Vec<Book>> {
        let response = self.send(self.client.get(self.url("all"))).await?;
        let books: Vec<Book> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        tracing::debug!(count = books.len(), "Fetched books");
        Ok(books)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> ApiResult<Book> {
        let response = self
            .send(self.client.get(self.url(&format!("get/{}", id))))
            .await
            .map_err(|e| match e {
                ApiError::Status { status: 404, .. } => ApiError::NotFound(format!("book {}", id)),
                other => other,
            })?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[instrument(skip(self, book), fields(id = book.id))]
    async fn add(&self, book: &Book) -> ApiResult<()> {
        self.send(self.client.post(self.url("add")).json(book))
            .await?;
        tracing::debug!("Book added");
        Ok(())
    }

    #[instrument(skip(self, book), fields(id = book.id))]
    async fn update(&self, book: &Book) -> ApiResult<()> {
        self.send(self.client.put(self.url("update")).json(book))
            .await?;
        tracing::debug!("Book updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> ApiResult<String> {
        let response = self
            .send(self.client.delete(self.url(&format!("delete/{}", id))))
            .await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_built_from_config() {
        let api = HttpBookApi::new(&ClientConfig::new("http://example.test:8080/"));
        assert_eq!(api.base(), "http://example.test:8080/bookapi");
        assert_eq!(api.url("all"), "http://example.test:8080/bookapi/all");
        assert_eq!(api.url("get/4"), "http://example.test:8080/bookapi/get/4");
    }
}

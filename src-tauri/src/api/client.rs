//! API Client
//!
//! Thin reqwest wrapper around the Nadder REST API. Holds the bearer
//! token behind a lock so commands can share one client; all error
//! mapping into DomainError happens here.

use std::sync::Arc;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::{DomainError, DomainResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8082/api/v1";

/// Environment override for the API base URL
pub const BASE_URL_ENV: &str = "NADDER_API_URL";

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub async fn set_token(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    #[cfg(test)]
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> DomainResult<Response> {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = self.token.read().await.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();
        let message = extract_message(&body_text);
        match status {
            StatusCode::UNAUTHORIZED => {
                // Token is no longer valid; drop it so later calls fail fast
                self.clear_token().await;
                let message = if message.is_empty() { "session expired".to_string() } else { message };
                Err(DomainError::Unauthorized(message))
            }
            StatusCode::NOT_FOUND => Err(DomainError::NotFound(message)),
            _ => Err(DomainError::Api(format!("{}: {}", status.as_u16(), message))),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> DomainResult<T> {
        let response = self.execute::<()>(Method::GET, path, None).await?;
        response
            .json()
            .await
            .map_err(|e| DomainError::Internal(format!("decode {}: {}", path, e)))
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> DomainResult<T> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        response
            .json()
            .await
            .map_err(|e| DomainError::Internal(format!("decode {}: {}", path, e)))
    }

    /// POST without a request body, discarding the response body
    pub async fn post_empty(&self, path: &str) -> DomainResult<()> {
        self.execute::<()>(Method::POST, path, None).await?;
        Ok(())
    }

    /// POST where the response body carries nothing the caller needs
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> DomainResult<()> {
        self.execute(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> DomainResult<T> {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        response
            .json()
            .await
            .map_err(|e| DomainError::Internal(format!("decode {}: {}", path, e)))
    }

    /// PUT where the response body carries nothing the caller needs
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> DomainResult<()> {
        self.execute(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> DomainResult<()> {
        self.execute::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }
}

/// Pull a human-readable message out of an error body. The server sends
/// `{"message": ...}` (sometimes `{"error": ...}`); anything else is
/// passed through as-is.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8082/api/v1/");
        assert_eq!(client.url("/projects"), "http://localhost:8082/api/v1/projects");

        let client = ApiClient::new("http://localhost:8082/api/v1");
        assert_eq!(client.url("/projects/3/cards/7"), "http://localhost:8082/api/v1/projects/3/cards/7");
    }

    #[test]
    fn test_extract_message_variants() {
        assert_eq!(extract_message(r#"{"message": "invalid credentials"}"#), "invalid credentials");
        assert_eq!(extract_message(r#"{"error": "nope"}"#), "nope");
        assert_eq!(extract_message("plain text\n"), "plain text");
        assert_eq!(extract_message(""), "");
    }

    #[tokio::test]
    async fn test_token_lifecycle() {
        let client = ApiClient::new(DEFAULT_BASE_URL);
        assert!(!client.has_token().await);
        client.set_token("abc".to_string()).await;
        assert!(client.has_token().await);
        client.clear_token().await;
        assert!(!client.has_token().await);
    }
}

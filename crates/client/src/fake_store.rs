//! HTTP client for the Fake Store catalog API.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use vitrine_catalog::Product;

use crate::error::FetchError;
use crate::provider::ProductProvider;

/// Where the public catalog lives unless a deployment overrides it.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Catalog client backed by the Fake Store REST API.
///
/// Requests carry no timeout: a hung upstream keeps the caller in its loading
/// state until the transport itself gives up.
#[derive(Debug, Clone)]
pub struct FakeStore {
    http: reqwest::Client,
    base_url: String,
}

/// Error body the API sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching catalog resource");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiMessage>(&body)
                .ok()
                .map(|m| m.message);
            tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Default for FakeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProductProvider for FakeStore {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("/products").await
    }

    async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        // Category names contain spaces and apostrophes ("men's clothing"),
        // so the path segment must be percent-encoded.
        let path = format!("/products/category/{}", urlencoding::encode(category));
        self.get_json(&path).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.get_json("/products/categories").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = FakeStore::with_base_url("http://localhost:9000/");
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn default_points_at_the_public_api() {
        assert_eq!(FakeStore::new().base_url(), DEFAULT_BASE_URL);
    }
}

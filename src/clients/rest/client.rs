//! REST client implementation for the Ecwid API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! against a single store with path normalization.

use std::collections::HashMap;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
};
use crate::config::{EcwidConfig, StoreId};

/// REST API client bound to one Ecwid store.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests relative to `{api_url}/{store_id}`.
///
/// # Thread Safety
///
/// `RestClient` is `Clone + Send + Sync`. Clones share the connection pool,
/// which is how background streams get their own handle to the store.
///
/// # Example
///
/// ```rust,ignore
/// use ecwid_api::{EcwidConfig, RestClient, StoreId, AccessToken};
///
/// let config = EcwidConfig::builder()
///     .store_id(StoreId::new(1003).unwrap())
///     .access_token(AccessToken::new("secret_token").unwrap())
///     .build()?;
///
/// let client = RestClient::new(&config);
///
/// // GET request
/// let response = client.get("products", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"name": "New Product", "price": 9.99});
/// let response = client.post("products", body, None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The store this client talks to.
    store_id: StoreId,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the configured store.
    #[must_use]
    pub fn new(config: &EcwidConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            store_id: config.store_id(),
        }
    }

    /// Returns the store ID this client is bound to.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Returns the store-scoped base URI.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "products", "categories/12")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the path is empty.
    /// Returns other [`HttpError`] variants for transport and status failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("keyword".to_string(), "shirt".to_string());
    /// let response = client.get("products", Some(query)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the path is empty.
    /// Returns other [`HttpError`] variants for transport and status failures.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the path is empty.
    /// Returns other [`HttpError`] variants for transport and status failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"quantityDelta": -1});
    /// let response = client.put("products/42/inventory", body, None).await?;
    /// ```
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the path is empty.
    /// Returns other [`HttpError`] variants for transport and status failures.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest {
            method,
            path: normalize_path(path)?,
            body,
            query: query.unwrap_or_default(),
        };

        self.http_client.request(request).await
    }
}

/// Normalizes a REST API path.
///
/// Leading and trailing `/` characters are stripped. Empty paths are rejected.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

//! HTTP client for Ecwid API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against a single store of the Ecwid REST API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::EcwidConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Ecwid API.
///
/// The client handles:
/// - Store-scoped base URI construction (`{api_url}/{store_id}`)
/// - Default headers including User-Agent and the bearer token
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// Every request is attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Clone + Send + Sync`; clones share the underlying
/// connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use ecwid_api::{EcwidConfig, StoreId, AccessToken};
/// use ecwid_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = EcwidConfig::builder()
///     .store_id(StoreId::new(1003).unwrap())
///     .access_token(AccessToken::new("secret_token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::new(HttpMethod::Get, "products");
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://app.ecwid.com/api/v3/1003`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &EcwidConfig) -> Self {
        let base_uri = config.store_url();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Ecwid API Rust Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        tracing::debug!(store_id = %config.store_id(), base_uri = %base_uri, "created Ecwid HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Ecwid API.
    ///
    /// A request with a body is sent with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        tracing::trace!(method = %request.method, url = %url, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let response = HttpResponse::from_raw(code, res_headers, &body_text);

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(Self::response_error(&response)))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Builds the error for a non-2xx response.
    fn response_error(response: &HttpResponse) -> HttpResponseError {
        let message = response.error_message().map_or_else(
            || match &response.body {
                serde_json::Value::String(raw) => raw.clone(),
                other => other.to_string(),
            },
            ToString::to_string,
        );

        HttpResponseError {
            code: response.code,
            message,
            error_code: response.error_code().map(String::from),
            error_reference: response.request_id().map(String::from),
        }
    }
}

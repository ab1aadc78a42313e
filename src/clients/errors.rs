//! HTTP-specific error types for the Ecwid API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// Error returned when an HTTP request receives a non-successful response.
///
/// Ecwid reports failures as `{"errorMessage": "...", "errorCode": "..."}`.
/// `message` carries `errorMessage` when present, otherwise the raw body.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 400,
///     message: "Product name is required".to_string(),
///     error_code: Some("INVALID_VALUE".to_string()),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "Ecwid API responded with 400: Product name is required");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Ecwid API responded with {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human readable error message.
    pub message: String,
    /// Ecwid's machine readable `errorCode`, if present.
    pub error_code: Option<String>,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot send {method} without a JSON body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: HttpMethod,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that takes no body.
        method: HttpMethod,
    },

    /// The request path is empty after normalization.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for all transport errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server produced a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

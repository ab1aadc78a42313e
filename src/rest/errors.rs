//! Resource-specific error types for REST API operations.
//!
//! This module contains [`ResourceError`], which extends the transport-level
//! [`HttpError`] with resource semantics like `NotFound` and
//! `ValidationFailed`.
//!
//! # Error Handling
//!
//! HTTP status codes are mapped to semantic variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **400, 422**: [`ResourceError::ValidationFailed`] - Ecwid rejected the payload
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - Wrapped HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::{RestResource, ResourceError};
//! use ecwid_api::Product;
//!
//! match Product::find(&client, 123).await {
//!     Ok(product) => println!("Found: {:?}", product.name),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::ValidationFailed { message, .. }) => {
//!         println!("Rejected: {}", message);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use ecwid_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Product",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "Product with id 123 not found");
///
/// let error = ResourceError::ValidationFailed {
///     message: "Name is required".to_string(),
///     error_code: Some("INVALID_VALUE".to_string()),
///     request_id: None,
/// };
/// assert!(error.to_string().contains("Validation failed"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Product", "Category").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Ecwid rejected the request payload (HTTP 400 or 422).
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Ecwid's `errorMessage`.
        message: String,
        /// Ecwid's `errorCode`, if present.
        error_code: Option<String>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The type name of the resource being decoded.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A record or set of search parameters could not be serialized into a request.
    #[error("Failed to encode {resource} request: {source}")]
    Encode {
        /// The type name of the value being encoded.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The server returned an empty page before reaching the reported total.
    ///
    /// Records visited before this point were delivered; the rest were not.
    #[error("{resource} search stopped at {visited} of {total} records: server returned an empty page")]
    Truncated {
        /// The type name of the resource being searched.
        resource: &'static str,
        /// Records visited before the empty page.
        visited: usize,
        /// The total the server reported.
        total: u64,
    },

    /// The server accepted an update but reported that nothing changed.
    #[error("{resource} with id {id} was not updated")]
    NothingUpdated {
        /// The type name of the resource.
        resource: &'static str,
        /// The ID that was targeted.
        id: String,
    },

    /// The resource has no path for the requested operation.
    #[error("Cannot resolve path for {resource}::{operation}")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "adjust_inventory").
        operation: &'static str,
    },

    /// Iteration was stopped by a cancellation signal.
    #[error("Operation cancelled")]
    Cancelled,

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for errors that don't map to
    /// a specific resource error type.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a transport error onto resource semantics.
    ///
    /// - 404 -> `NotFound`
    /// - 400, 422 -> `ValidationFailed`
    /// - Anything else -> `Http`
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecwid_api::clients::{HttpError, HttpResponseError};
    /// use ecwid_api::rest::ResourceError;
    ///
    /// let http = HttpError::Response(HttpResponseError {
    ///     code: 404,
    ///     message: "Product #123 not found".to_string(),
    ///     error_code: None,
    ///     error_reference: None,
    /// });
    ///
    /// let error = ResourceError::from_http_error(http, "Product", Some("123"));
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            HttpError::Response(response) => match response.code {
                404 => Self::NotFound {
                    resource,
                    id: id.unwrap_or("unknown").to_string(),
                },
                400 | 422 => Self::ValidationFailed {
                    message: response.message,
                    error_code: response.error_code,
                    request_id: response.error_reference,
                },
                _ => Self::Http(HttpError::Response(response)),
            },
            other => Self::Http(other),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if this error is the cancellation signal.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

//! Requests sent to a store's REST endpoint.
//!
//! Ecwid's catalog API only ever exchanges JSON, so an [`HttpRequest`] is a
//! method, a store-relative path, an optional JSON body and a flat query map.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Ecwid REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Searches and single-record lookups.
    Get,
    /// Creates a record.
    Post,
    /// Updates a record or adjusts inventory.
    Put,
    /// Removes a record.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if requests with this method carry a JSON body.
    #[must_use]
    pub const fn takes_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request against the store-scoped base URI.
///
/// # Example
///
/// ```rust
/// use ecwid_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let adjust = HttpRequest::new(HttpMethod::Put, "products/42/inventory")
///     .with_body(json!({"quantityDelta": -1}));
/// assert!(adjust.verify().is_ok());
///
/// let search = HttpRequest::new(HttpMethod::Get, "products")
///     .with_query([("keyword".to_string(), "shirt".to_string())].into());
/// assert_eq!(search.query["keyword"], "shirt");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Path relative to `{api_url}/{store_id}`, without leading `/`.
    pub path: String,
    /// JSON body for `POST` and `PUT`.
    pub body: Option<serde_json::Value>,
    /// Query parameters; an empty map sends none.
    pub query: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a request with no body and no query parameters.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: HashMap::new(),
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Replaces the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Checks that the body matches the method.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a `POST` or `PUT`
    /// without a body, and [`InvalidHttpRequestError::UnexpectedBody`] for a
    /// `GET` or `DELETE` with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.method.takes_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.method,
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.method,
            }),
            _ => Ok(()),
        }
    }
}

//! HTTP response types for the Ecwid API client.

use std::collections::HashMap;

/// An HTTP response from the Ecwid API.
///
/// The body is parsed as JSON when possible. An empty body becomes `{}` and
/// a body that is not valid JSON is kept verbatim as a JSON string, so the
/// decoding layer can report it as a decode failure instead of losing it.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Builds a response from a raw body, applying the JSON parsing rules
    /// described on [`HttpResponse`].
    #[must_use]
    pub fn from_raw(code: u16, headers: HashMap<String, Vec<String>>, body_text: &str) -> Self {
        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(body_text)
                .unwrap_or_else(|_| serde_json::Value::String(body_text.to_string()))
        };
        Self::new(code, headers, body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns Ecwid's `errorMessage` body field, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("errorMessage").and_then(serde_json::Value::as_str)
    }

    /// Returns Ecwid's `errorCode` body field, if present.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("errorCode").and_then(serde_json::Value::as_str)
    }
}

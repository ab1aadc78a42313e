//! Error types for the Ecwid API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Ecwid secret or public token.")]
    EmptyAccessToken,

    /// Store ID is invalid.
    #[error("Invalid store ID '{store_id}'. Expected a positive integer (e.g., '1003').")]
    InvalidStoreId {
        /// The invalid store ID that was provided.
        store_id: String,
    },

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://app.ecwid.com/api/v3').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

//! Configuration types for the Ecwid API client.
//!
//! This module provides the configuration types used to initialize the
//! client for API communication with a single Ecwid store.
//!
//! # Overview
//!
//! - [`EcwidConfig`]: The configuration struct holding all client settings
//! - [`EcwidConfigBuilder`]: A builder for constructing [`EcwidConfig`] instances
//! - [`StoreId`]: A validated store ID newtype
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`ApiUrl`]: A validated base URL for the REST API
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::{EcwidConfig, StoreId, AccessToken};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new(1003).unwrap())
//!     .access_token(AccessToken::new("secret_token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.store_id().get(), 1003);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiUrl, StoreId};

use crate::error::ConfigError;

/// Configuration for the Ecwid API client.
///
/// # Thread Safety
///
/// `EcwidConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct EcwidConfig {
    store_id: StoreId,
    access_token: AccessToken,
    api_url: ApiUrl,
    user_agent_prefix: Option<String>,
}

impl EcwidConfig {
    /// Creates a new builder for constructing an `EcwidConfig`.
    #[must_use]
    pub fn builder() -> EcwidConfigBuilder {
        EcwidConfigBuilder::new()
    }

    /// Returns the store ID.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the base API URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the store-scoped base URL, e.g. `https://app.ecwid.com/api/v3/1003`.
    #[must_use]
    pub fn store_url(&self) -> String {
        format!("{}/{}", self.api_url.as_ref(), self.store_id)
    }
}

// Verify EcwidConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EcwidConfig>();
};

/// Builder for constructing [`EcwidConfig`] instances.
///
/// Required fields are `store_id` and `access_token`.
///
/// # Defaults
///
/// - `api_url`: [`ApiUrl::DEFAULT`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use ecwid_api::{EcwidConfig, StoreId, AccessToken, ApiUrl};
///
/// let config = EcwidConfig::builder()
///     .store_id(StoreId::new(1003).unwrap())
///     .access_token(AccessToken::new("secret_token").unwrap())
///     .api_url(ApiUrl::new("http://localhost:8080/api/v3").unwrap())
///     .user_agent_prefix("CatalogSync/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.store_url(), "http://localhost:8080/api/v3/1003");
/// ```
#[derive(Debug, Default)]
pub struct EcwidConfigBuilder {
    store_id: Option<StoreId>,
    access_token: Option<AccessToken>,
    api_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl EcwidConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store ID (required).
    #[must_use]
    pub const fn store_id(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the base API URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EcwidConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_id` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<EcwidConfig, ConfigError> {
        let store_id = self
            .store_id
            .ok_or(ConfigError::MissingRequiredField { field: "store_id" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(EcwidConfig {
            store_id,
            access_token,
            api_url: self.api_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("secret_token").unwrap()
    }

    #[test]
    fn test_builder_requires_store_id() {
        let result = EcwidConfigBuilder::new().access_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "store_id" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = EcwidConfigBuilder::new()
            .store_id(StoreId::new(666).unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new(666).unwrap())
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.api_url(), &ApiUrl::default());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.store_url(), "https://app.ecwid.com/api/v3/666");
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new(666).unwrap())
            .access_token(token())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("EcwidConfig"));
        assert!(!debug_str.contains("secret_token"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = EcwidConfig::builder()
            .store_id(StoreId::new(666).unwrap())
            .access_token(token())
            .api_url(ApiUrl::new("http://127.0.0.1:9000/api/v3").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.store_url(), "http://127.0.0.1:9000/api/v3/666");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }
}

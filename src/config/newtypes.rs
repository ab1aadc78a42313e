//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around raw values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated Ecwid store ID.
///
/// Every API path is scoped to a store: `{api_url}/{store_id}/products`.
/// Store IDs are positive integers.
///
/// # Example
///
/// ```rust
/// use ecwid_api::StoreId;
///
/// let store = StoreId::new(1003).unwrap();
/// assert_eq!(store.get(), 1003);
///
/// let parsed: StoreId = "1003".parse().unwrap();
/// assert_eq!(parsed, store);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StoreId(u64);

impl StoreId {
    /// Creates a new validated store ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreId`] if the ID is zero.
    pub fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidStoreId {
                store_id: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    /// Returns the numeric store ID.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for StoreId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidStoreId {
                store_id: s.to_string(),
            })?;
        Self::new(id)
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StoreId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for StoreId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Self::new(id).map_err(de::Error::custom)
    }
}

/// A validated Ecwid access token (secret or public).
///
/// The token is sent as `Authorization: Bearer <token>` on every request.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use ecwid_api::AccessToken;
///
/// let token = AccessToken::new("secret_abc").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated base URL for the Ecwid REST API.
///
/// Defaults to [`ApiUrl::DEFAULT`]. Overriding it is mostly useful for
/// pointing the client at a proxy or a local mock server. Trailing slashes
/// are stripped so paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use ecwid_api::ApiUrl;
///
/// let url = ApiUrl::new("http://localhost:8080/api/v3/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/api/v3");
/// assert_eq!(url.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
}

impl ApiUrl {
    /// The public Ecwid REST API v3 endpoint.
    pub const DEFAULT: &'static str = "https://app.ecwid.com/api/v3";

    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let host = url[host_start..]
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        if host.is_empty() || host.starts_with(':') {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_id_rejects_zero() {
        assert!(matches!(
            StoreId::new(0),
            Err(ConfigError::InvalidStoreId { store_id }) if store_id == "0"
        ));
    }

    #[test]
    fn test_store_id_parses_from_string() {
        let store: StoreId = " 666 ".parse().unwrap();
        assert_eq!(store.get(), 666);
        assert_eq!(store.to_string(), "666");

        assert!("abc".parse::<StoreId>().is_err());
        assert!("-5".parse::<StoreId>().is_err());
        assert!("0".parse::<StoreId>().is_err());
    }

    #[test]
    fn test_store_id_serde_round_trip() {
        let store = StoreId::new(1003).unwrap();
        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(json, "1003");

        let restored: StoreId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);

        assert!(serde_json::from_str::<StoreId>("0").is_err());
    }

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("secret_very_private").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("very_private"));
        assert_eq!(token.as_ref(), "secret_very_private");
    }

    #[test]
    fn test_api_url_default_points_at_ecwid() {
        let url = ApiUrl::default();
        assert_eq!(url.as_ref(), "https://app.ecwid.com/api/v3");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url, ApiUrl::new(ApiUrl::DEFAULT).unwrap());
    }

    #[test]
    fn test_api_url_strips_trailing_slashes() {
        let url = ApiUrl::new("http://127.0.0.1:5000//").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        assert!(ApiUrl::new("app.ecwid.com/api/v3").is_err());
        assert!(ApiUrl::new("ftp://app.ecwid.com").is_err());
        assert!(ApiUrl::new("https://").is_err());
        assert!(ApiUrl::new("https://:8080/api").is_err());
    }
}

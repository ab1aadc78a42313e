//! REST API client for the Ecwid API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Path Normalization
//!
//! - Leading and trailing slashes are stripped: `/products/` -> `products`
//! - Empty paths are rejected with
//!   [`InvalidHttpRequestError::InvalidPath`](crate::clients::InvalidHttpRequestError::InvalidPath)
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::{EcwidConfig, RestClient, StoreId, AccessToken};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new(1003).unwrap())
//!     .access_token(AccessToken::new("secret_token").unwrap())
//!     .build()?;
//!
//! let client = RestClient::new(&config);
//! let response = client.get("categories", None).await?;
//! println!("Categories: {}", response.body);
//! ```

mod client;

pub use client::RestClient;

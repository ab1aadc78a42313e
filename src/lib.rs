//! # Ecwid API Rust Client
//!
//! A typed async client for the Ecwid REST API v3, covering the store catalog:
//! products and categories.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`EcwidConfig`] and [`EcwidConfigBuilder`]
//! - Validated newtypes for the store ID, access token and API URL
//! - An async HTTP client that authenticates every request with a bearer token
//! - Typed [`Product`] and [`Category`] records with add, find, update, delete and search
//! - An offset pagination trampoline that visits every search result
//! - A cancellable [`ItemStream`] that yields search results from a background task
//!
//! ## Quick Start
//!
//! ```rust
//! use ecwid_api::{AccessToken, EcwidConfig, StoreId};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new(1003).unwrap())
//!     .access_token(AccessToken::new("secret_token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.store_url(), "https://app.ecwid.com/api/v3/1003");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use ecwid_api::{Product, RestClient};
//! use ecwid_api::rest::{Filter, RestResource};
//!
//! let client = RestClient::new(&config);
//!
//! let product = Product::find(&client, 66821181).await?;
//! Product::adjust_inventory(&client, 66821181, -1).await?;
//!
//! let mut filter = Filter::new();
//! filter.insert("keyword".to_string(), "orange".to_string());
//! let page = Product::search(&client, &filter).await?;
//! ```
//!
//! ## Streaming
//!
//! ```rust,ignore
//! use futures_util::StreamExt;
//! use ecwid_api::{Category, RestClient};
//! use ecwid_api::rest::{Filter, RestResource};
//!
//! let mut categories = Category::stream(&client, &Filter::new());
//! while let Some(category) = categories.next().await {
//!     println!("{:?}", category.name);
//! }
//! categories.finish().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients, configuration and streams are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiUrl, EcwidConfig, EcwidConfigBuilder, StoreId};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    InvalidHttpRequestError, RestClient,
};

// Re-export resource types
pub use rest::resources::{Category, CategorySearchParams, Product, ProductSearchParams};
pub use rest::{CancelHandle, Filter, ItemStream, ResourceError, RestResource, SearchResponse};

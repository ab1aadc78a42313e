//! HTTP client types for Ecwid API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to a single Ecwid store.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: Higher-level REST API client
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::{EcwidConfig, StoreId, AccessToken};
//! use ecwid_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = EcwidConfig::builder()
//!     .store_id(StoreId::new(1003).unwrap())
//!     .access_token(AccessToken::new("secret_token").unwrap())
//!     .build()?;
//!
//! let client = HttpClient::new(&config);
//! let request = HttpRequest::new(HttpMethod::Get, "products");
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retries
//!
//! Requests are sent exactly once. Callers that want retries wrap the call
//! themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;

pub use rest::RestClient;

//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v3/
//!     mod.rs         <- Version-specific resources
//!     common/        <- Embedded structs shared by resources
//! ```
//!
//! # Using Resources
//!
//! The latest version is re-exported at this module level for convenience:
//!
//! ```rust,ignore
//! use ecwid_api::rest::resources::Product;  // Uses latest version
//!
//! // Or explicitly specify a version:
//! use ecwid_api::rest::resources::v3::Product;
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::resources::{Product, ProductSearchParams};
//! use ecwid_api::rest::RestResource;
//!
//! // Find a single product
//! let product = Product::find(&client, 66821181).await?;
//!
//! // Search enabled products in stock
//! let params = ProductSearchParams {
//!     enabled: Some(true),
//!     in_stock: Some(true),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let page = Product::search_with(&client, &params).await?;
//! println!("{} of {} products", page.count, page.total);
//! ```

pub mod v3;

// Re-export types from the latest version for convenience
pub use v3::*;

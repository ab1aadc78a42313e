//! REST resources for Ecwid API v3.
//!
//! # Available Resources
//!
//! ## Product Resource
//!
//! - [`Product`] - An item in the store catalog
//! - [`ProductSearchParams`] - Parameters for searching products
//! - [`ProductSortBy`] - Sort orders accepted by product search
//!
//! The Product resource also provides a resource-specific operation:
//! - `Product::adjust_inventory()` - Apply a signed stock change
//!
//! ## Category Resource
//!
//! - [`Category`] - A node in the store's category tree
//! - [`CategorySearchParams`] - Parameters for searching categories
//!
//! ## Common Types
//!
//! Embedded structs shared by the resources live in [`common`], with
//! [`EcwidDateTime`](common::EcwidDateTime) handling Ecwid's timestamp format.

mod category;
pub mod common;
mod product;

pub use category::{Category, CategorySearchParams};
pub use common::*;
pub use product::{Product, ProductSearchParams, ProductSortBy};

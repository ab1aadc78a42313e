//! Common types and embedded structs used across catalog resources.
//!
//! These types are not full REST resources themselves (they don't implement
//! `RestResource`), but are nested within [`Product`](super::Product) and
//! [`Category`](super::Category).
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::rest::resources::v3::common::{ProductDimensions, WholesalePrice};
//!
//! let dimensions = ProductDimensions {
//!     length: Some(30.0),
//!     width: Some(20.0),
//!     height: Some(2.5),
//! };
//!
//! let tiers = vec![
//!     WholesalePrice { quantity: 10, price: 9.0 },
//!     WholesalePrice { quantity: 100, price: 7.5 },
//! ];
//! ```

mod catalog;
mod datetime;
mod media;
mod pricing;
mod shipping;

pub use catalog::{
    AttributeValue, CategoryMembership, OptionType, OptionValue, PriceModifierType,
    ProductOption, ProductOptionChoice, ProductVariation, RelatedCategory, RelatedProducts,
};
pub use datetime::{EcwidDateTime, ECWID_DATETIME_FORMAT};
pub use media::{ImageDetails, ProductImage, ProductMedia};
pub use pricing::{TaxInfo, WholesalePrice};
pub use shipping::{ProductDimensions, ShippingSettings, ShippingType};

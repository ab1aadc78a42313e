//! Pricing and tax types embedded in products.

use serde::{Deserialize, Serialize};

/// A bulk price tier.
///
/// # Example
///
/// ```rust
/// use ecwid_api::rest::resources::v3::common::WholesalePrice;
///
/// let tier = WholesalePrice { quantity: 10, price: 8.5 };
/// let json = serde_json::to_value(&tier).unwrap();
/// assert_eq!(json["quantity"], 10);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WholesalePrice {
    /// Minimum quantity for this tier.
    pub quantity: i64,
    /// Unit price at this tier.
    pub price: f64,
}

/// Tax settings for a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxInfo {
    /// Whether the product is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// Tax rate already included in the price for the store's default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_location_included_tax_rate: Option<f64>,

    /// IDs of manual taxes applied to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_manual_taxes: Option<Vec<u64>>,

    /// Tax class code used by automatic tax providers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class_code: Option<String>,
}

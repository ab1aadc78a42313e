//! Shipping settings and physical dimensions of a product.

use serde::{Deserialize, Serialize};

/// How shipping is calculated for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingType {
    /// All store shipping methods apply.
    GlobalMethods,
    /// Only the methods listed in `enabled_methods` apply.
    SelectedMethods,
    /// A fixed rate per item.
    FlatRate,
    /// No shipping charge.
    FreeShipping,
    /// A value this client does not recognise.
    #[serde(other)]
    Unknown,
}

/// Per-product shipping settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSettings {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<ShippingType>,

    /// Extra charge added to calculated shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_markup: Option<f64>,

    /// Rate used when `shipping_type` is `FlatRate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_methods: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_methods: Option<Vec<String>>,
}

/// Package dimensions in the store's length unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

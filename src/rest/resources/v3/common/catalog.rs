//! Catalog sub-entities embedded in products: options, attributes,
//! variations and cross-references.

use serde::{Deserialize, Serialize};

use super::media::ProductImage;
use super::pricing::WholesalePrice;

/// Input control a product option is rendered with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    Select,
    Radio,
    Checkbox,
    Textfield,
    Textarea,
    Date,
    Files,
    /// A value this client does not recognise.
    #[serde(other)]
    Unknown,
}

/// How a choice modifies the base price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceModifierType {
    /// `price_modifier` is an absolute amount.
    Absolute,
    /// `price_modifier` is a percentage of the base price.
    Percent,
    /// A value this client does not recognise.
    #[serde(other)]
    Unknown,
}

/// A configurable product option such as size or color.
///
/// # Example
///
/// ```rust
/// use ecwid_api::rest::resources::v3::common::{OptionType, ProductOption, ProductOptionChoice};
///
/// let size = ProductOption {
///     option_type: Some(OptionType::Select),
///     name: Some("Size".to_string()),
///     choices: Some(vec![
///         ProductOptionChoice { text: Some("S".to_string()), ..Default::default() },
///         ProductOptionChoice { text: Some("M".to_string()), ..Default::default() },
///     ]),
///     default_choice: Some(0),
///     required: Some(true),
/// };
///
/// let json = serde_json::to_value(&size).unwrap();
/// assert_eq!(json["type"], "SELECT");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<OptionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ProductOptionChoice>>,

    /// Index into `choices` selected by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_choice: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// One selectable value of a [`ProductOption`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptionChoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_modifier: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_modifier_type: Option<PriceModifierType>,
}

/// A product attribute value, such as brand or UPC.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    /// Attribute ID within the product class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Attribute kind (e.g., `CUSTOM`, `UPC`, `BRAND`). Read-only.
    #[serde(rename = "type", skip_serializing)]
    pub attribute_type: Option<String>,

    /// Where the attribute is displayed (e.g., `DESCR`, `PRICE`). Read-only.
    #[serde(skip_serializing)]
    pub show: Option<String>,
}

/// A selected option value identifying a variation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OptionValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A product variation: one combination of option values with its own
/// stock, price and images.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    /// Variation ID. Read-only.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Ordinal of this combination within the product. Read-only.
    #[serde(skip_serializing)]
    pub combination_number: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wholesale_prices: Option<Vec<WholesalePrice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeValue>>,

    #[serde(skip_serializing)]
    pub default_displayed_price: Option<f64>,

    #[serde(skip_serializing)]
    pub default_displayed_price_formatted: Option<String>,

    #[serde(skip_serializing)]
    pub thumbnail_url: Option<String>,

    #[serde(skip_serializing)]
    pub image_url: Option<String>,

    #[serde(skip_serializing)]
    pub small_thumbnail_url: Option<String>,

    #[serde(skip_serializing)]
    pub hd_thumbnail_url: Option<String>,

    #[serde(skip_serializing)]
    pub original_image_url: Option<String>,

    #[serde(skip_serializing)]
    pub images: Option<Vec<ProductImage>>,
}

/// Products shown as "You may also like" for a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProducts {
    /// Explicitly related product IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<u64>>,

    /// Random picks from a category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_category: Option<RelatedCategory>,
}

/// Category used to pick related products at random.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// `0` picks from the whole store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u32>,
}

/// Membership of a product in a category, as reported on the product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMembership {
    /// Category ID.
    pub id: u64,
    /// Whether the category is enabled.
    #[serde(default)]
    pub enabled: bool,
}

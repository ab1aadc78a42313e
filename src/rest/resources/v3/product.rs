//! Product resource implementation.
//!
//! This module provides the Product resource, which represents an item in an
//! Ecwid store catalog, along with typed search parameters and inventory
//! adjustment.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::RestResource;
//! use ecwid_api::rest::resources::v3::{Product, ProductSearchParams, ProductSortBy};
//!
//! // Search products
//! let params = ProductSearchParams {
//!     keyword: Some("shirt".to_string()),
//!     sort_by: Some(ProductSortBy::PriceAsc),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let page = Product::search_with(&client, &params).await?;
//!
//! // Create a new product
//! let product = Product {
//!     name: Some("My New Product".to_string()),
//!     sku: Some("NEW-001".to_string()),
//!     price: Some(19.99),
//!     quantity: Some(5),
//!     ..Default::default()
//! };
//! let id = Product::add(&client, &product).await?;
//!
//! // Sell one
//! let remaining = Product::adjust_inventory(&client, id, -1).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::response::decode_update_count;
use crate::rest::resource::resolve_path;
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::{
    AttributeValue, CategoryMembership, EcwidDateTime, ProductDimensions, ProductMedia,
    ProductOption, ProductVariation, RelatedProducts, ShippingSettings, TaxInfo, WholesalePrice,
};

/// A product in an Ecwid store.
///
/// # Fields
///
/// ## Writable Fields
/// - `name`, `sku`, `description`, `seo_title`, `seo_description`
/// - `quantity`, `unlimited`, `warning_limit`
/// - `price`, `compare_to_price`, `wholesale_prices`
/// - `enabled`, `show_on_frontpage`, `created`
/// - `weight`, `dimensions`, `is_shipping_required`, `fixed_shipping_rate_only`,
///   `fixed_shipping_rate`, `shipping`
/// - `product_class_id`, `default_category_id`, `category_ids`
/// - `options`, `attributes`, `tax`, `related_products`, `media`
///
/// ## Read-Only Fields
/// - `id`, `in_stock`, `url`, `updated`, `create_timestamp`, `update_timestamp`
/// - `default_displayed_price` and every `*_formatted` / discount field
/// - `default_combination_id`, `is_sample_product`, `combinations`, `categories`
///
/// Only populated writable fields are sent on add and update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The unique identifier of the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product name. Required when adding a product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The stock keeping unit. Ecwid generates one if omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Units in stock. Ignored when `unlimited` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Whether stock is unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,

    /// Whether the product is in stock.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub in_stock: Option<bool>,

    /// Base price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// "Was" price shown struck through next to `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_to_price: Option<f64>,

    #[serde(skip_serializing)]
    pub default_displayed_price: Option<f64>,

    #[serde(skip_serializing)]
    pub default_displayed_price_formatted: Option<String>,

    #[serde(skip_serializing)]
    pub compare_to_price_formatted: Option<String>,

    #[serde(skip_serializing)]
    pub compare_to_price_discount: Option<f64>,

    #[serde(skip_serializing)]
    pub compare_to_price_discount_formatted: Option<String>,

    #[serde(skip_serializing)]
    pub compare_to_price_discount_percent: Option<f64>,

    #[serde(skip_serializing)]
    pub compare_to_price_discount_percent_formatted: Option<String>,

    /// Bulk pricing tiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wholesale_prices: Option<Vec<WholesalePrice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shipping_required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_shipping_rate_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_shipping_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingSettings>,

    /// Product class (product type) ID. `0` is the default class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_class_id: Option<u64>,

    /// When the product was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<EcwidDateTime>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated: Option<EcwidDateTime>,

    /// Creation time as a UNIX timestamp.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub create_timestamp: Option<u64>,

    /// Last update time as a UNIX timestamp.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub update_timestamp: Option<u64>,

    /// Whether the product is visible in the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Stock level that triggers a low-stock notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_limit: Option<u32>,

    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,

    /// Storefront URL of the product page.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category_id: Option<u64>,

    /// Position on the store front page; `0` hides it there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_on_frontpage: Option<i32>,

    /// IDs of categories the product belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<u64>>,

    /// Category membership with enabled flags.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub categories: Option<Vec<CategoryMembership>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<TaxInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_products: Option<RelatedProducts>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<ProductMedia>,

    /// Variation selected by default.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub default_combination_id: Option<u64>,

    /// Variations of this product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub combinations: Option<Vec<ProductVariation>>,

    /// Whether this is one of Ecwid's demo products.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub is_sample_product: Option<bool>,
}

impl Product {
    /// Applies a signed stock change to the product.
    ///
    /// `delta` is sent as `quantityDelta` exactly as given, including
    /// negative values. The returned number is the one the server reports
    /// (`updateCount`), unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the product doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let reported = Product::adjust_inventory(&client, 42, -1).await?;
    /// ```
    pub async fn adjust_inventory(
        client: &RestClient,
        id: u64,
        delta: i64,
    ) -> Result<i64, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::AdjustInventory, Some(id))?;
        let id_str = id.to_string();

        let response = client
            .put(&path, json!({ "quantityDelta": delta }), None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, Self::NAME, Some(&id_str)))?;

        let reported = decode_update_count(response, Self::NAME)?;
        tracing::debug!(id, delta, reported, "inventory adjusted");
        Ok(reported)
    }
}

impl RestResource for Product {
    type SearchParams = ProductSearchParams;

    const NAME: &'static str = "Product";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "products"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "products/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Add, &[], "products"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "products/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "products/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::AdjustInventory,
            &["id"],
            "products/{id}/inventory",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Sort orders accepted by product search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSortBy {
    Relevance,
    AddedTimeDesc,
    AddedTimeAsc,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    UpdatedTimeAsc,
    UpdatedTimeDesc,
}

/// Parameters for searching products.
///
/// Option and attribute filters (`option_{name}`, `attribute_{name}`) have
/// dynamic keys; add them to a raw [`Filter`](crate::rest::Filter) instead.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchParams {
    /// Full-text search across name, description and SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to: Option<f64>,

    /// Restrict to one category ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_subcategories: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<ProductSortBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Page size. Ecwid caps this at 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<EcwidDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<EcwidDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_from: Option<EcwidDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_to: Option<EcwidDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    /// `onsale` or `notonsale`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onsale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Storefront base URL used to build product `url` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_urls: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, serialize_to_query};
    use serde_json::json;

    #[test]
    fn test_product_serialization_sends_only_writable_fields() {
        let product = Product {
            id: Some(12345),
            name: Some("Test Product".to_string()),
            sku: Some("TP-1".to_string()),
            price: Some(9.99),
            quantity: Some(5),
            in_stock: Some(true),
            url: Some("https://store.example.com/p/12345".to_string()),
            default_displayed_price_formatted: Some("$9.99".to_string()),
            combinations: Some(vec![]),
            ..Default::default()
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Test Product",
                "sku": "TP-1",
                "quantity": 5,
                "price": 9.99
            })
        );
    }

    #[test]
    fn test_product_deserialization_from_api_response() {
        let json_str = r#"{
            "id": 66821181,
            "sku": "00004",
            "quantity": 5,
            "unlimited": false,
            "inStock": true,
            "name": "Orange",
            "price": 15.0,
            "defaultDisplayedPrice": 15.0,
            "defaultDisplayedPriceFormatted": "$15.00",
            "url": "https://store.example.com/Orange-p66821181",
            "created": "2016-07-14 12:10:12 +0000",
            "updated": "2016-07-15 09:30:00 +0000",
            "createTimestamp": 1468498212,
            "productClassId": 0,
            "enabled": true,
            "categoryIds": [9691094],
            "categories": [{"id": 9691094, "enabled": true}],
            "defaultCategoryId": 9691094,
            "dimensions": {"length": 1.0, "width": 2.0, "height": 3.0},
            "media": {"images": [{"id": "0", "isMain": true, "orderBy": 0}]},
            "combinations": [{"id": 1, "combinationNumber": 1, "sku": "00004-S", "quantity": 2}],
            "isSampleProduct": false
        }"#;

        let product: Product = serde_json::from_str(json_str).unwrap();

        assert_eq!(product.id, Some(66_821_181));
        assert_eq!(product.name.as_deref(), Some("Orange"));
        assert_eq!(product.in_stock, Some(true));
        assert_eq!(product.product_class_id, Some(0));
        assert_eq!(product.category_ids, Some(vec![9_691_094]));
        assert_eq!(
            product.created.map(|c| c.to_string()).as_deref(),
            Some("2016-07-14 12:10:12 +0000")
        );
        assert_eq!(product.dimensions.and_then(|d| d.height), Some(3.0));
        assert_eq!(
            product
                .combinations
                .as_ref()
                .and_then(|c| c.first())
                .and_then(|c| c.sku.as_deref()),
            Some("00004-S")
        );
    }

    #[test]
    fn test_product_paths() {
        let search = get_path(Product::PATHS, ResourceOperation::Search, &[]).unwrap();
        assert_eq!(search.template, "products");
        assert_eq!(search.http_method, HttpMethod::Get);

        let add = get_path(Product::PATHS, ResourceOperation::Add, &[]).unwrap();
        assert_eq!(add.http_method, HttpMethod::Post);

        let inventory =
            get_path(Product::PATHS, ResourceOperation::AdjustInventory, &["id"]).unwrap();
        assert_eq!(inventory.template, "products/{id}/inventory");
        assert_eq!(inventory.http_method, HttpMethod::Put);

        assert!(get_path(Product::PATHS, ResourceOperation::Find, &[]).is_none());
    }

    #[test]
    fn test_search_params_serialize_to_ecwid_names() {
        let params = ProductSearchParams {
            keyword: Some("test product".to_string()),
            price_from: Some(10.0),
            with_subcategories: Some(true),
            sort_by: Some(ProductSortBy::AddedTimeDesc),
            limit: Some(100),
            created_from: Some("2020-01-01 00:00:00 +0000".parse().unwrap()),
            ..Default::default()
        };

        let query = serialize_to_query(&params).unwrap();
        assert_eq!(query.get("keyword"), Some(&"test product".to_string()));
        assert_eq!(query.get("priceFrom"), Some(&"10.0".to_string()));
        assert_eq!(query.get("withSubcategories"), Some(&"true".to_string()));
        assert_eq!(query.get("sortBy"), Some(&"ADDED_TIME_DESC".to_string()));
        assert_eq!(query.get("limit"), Some(&"100".to_string()));
        assert_eq!(
            query.get("createdFrom"),
            Some(&"2020-01-01 00:00:00 +0000".to_string())
        );
        assert!(!query.contains_key("offset"));
        assert_eq!(query.len(), 6);
    }
}

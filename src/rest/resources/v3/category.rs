//! Category resource implementation.
//!
//! Categories group products in the storefront. They form a tree through
//! `parent_id`; root categories have no parent.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::RestResource;
//! use ecwid_api::rest::resources::v3::{Category, CategorySearchParams};
//!
//! // List the root categories
//! let params = CategorySearchParams {
//!     parent: Some(0),
//!     ..Default::default()
//! };
//! let page = Category::search_with(&client, &params).await?;
//!
//! // Create a subcategory
//! let category = Category {
//!     name: Some("Summer".to_string()),
//!     parent_id: Some(9691094),
//!     ..Default::default()
//! };
//! let id = Category::add(&client, &category).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::ImageDetails;

/// A product category in an Ecwid store.
///
/// Image URLs and product counters are computed by Ecwid and are read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The unique identifier of the category.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Parent category ID. Absent for root categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Sort position among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<i32>,

    #[serde(skip_serializing)]
    pub hd_thumbnail_url: Option<String>,

    #[serde(skip_serializing)]
    pub thumbnail_url: Option<String>,

    #[serde(skip_serializing)]
    pub image_url: Option<String>,

    #[serde(skip_serializing)]
    pub original_image_url: Option<String>,

    #[serde(skip_serializing)]
    pub original_image: Option<ImageDetails>,

    /// The category name. Required when adding a category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Storefront URL of the category page.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url: Option<String>,

    /// Number of products in the category and its subcategories.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub product_count: Option<u32>,

    /// Number of enabled products in the category.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub enabled_product_count: Option<u32>,

    /// Whether the category is visible in the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Products assigned to this category, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<u64>>,
}

impl RestResource for Category {
    type SearchParams = CategorySearchParams;

    const NAME: &'static str = "Category";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "categories"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "categories/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Add, &[], "categories"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "categories/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "categories/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for searching categories.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySearchParams {
    /// Parent category ID. `0` returns root categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,

    /// Include disabled categories.
    #[serde(rename = "hidden_categories", skip_serializing_if = "Option::is_none")]
    pub hidden_categories: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Include `product_ids` in each category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_urls: Option<bool>,
}

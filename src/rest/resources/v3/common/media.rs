//! Image types shared by products and categories.

use serde::{Deserialize, Serialize};

/// Product gallery and main image container.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductMedia {
    /// Images in display order. The main image has `is_main` set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
}

impl ProductMedia {
    /// Returns the image flagged as main, if any.
    #[must_use]
    pub fn main_image(&self) -> Option<&ProductImage> {
        self.images
            .as_deref()
            .and_then(|images| images.iter().find(|image| image.is_main == Some(true)))
    }
}

/// One product image rendered at several sizes.
///
/// URLs are generated by Ecwid and are read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image ID, unique within the product.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_main: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<i32>,

    #[serde(rename = "image160pxUrl", skip_serializing)]
    pub image_160px_url: Option<String>,

    #[serde(rename = "image400pxUrl", skip_serializing)]
    pub image_400px_url: Option<String>,

    #[serde(rename = "image800pxUrl", skip_serializing)]
    pub image_800px_url: Option<String>,

    #[serde(rename = "image1500pxUrl", skip_serializing)]
    pub image_1500px_url: Option<String>,

    #[serde(skip_serializing)]
    pub image_original_url: Option<String>,
}

/// Dimensions and location of an uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    /// Public image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

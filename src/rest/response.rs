//! Response decoding for REST resource operations.
//!
//! Ecwid answers every catalog call with a small JSON envelope:
//!
//! | Operation | Body |
//! |-----------|------|
//! | search | `{"total", "count", "offset", "limit", "items"}` |
//! | find | the record itself |
//! | add | `{"id": N}` |
//! | update | `{"updateCount": N}` |
//! | delete | `{"deleteCount": N}` |
//! | inventory | `{"updateCount": N}` |
//!
//! The `decode_*` functions turn an [`HttpResponse`] into the typed value or
//! a [`ResourceError::Decode`].
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::rest::SearchResponse;
//! use serde_json::json;
//!
//! let page: SearchResponse<u64> = serde_json::from_value(json!({
//!     "total": 25, "count": 10, "offset": 10, "limit": 10,
//!     "items": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//! })).unwrap();
//!
//! assert!(page.has_more());
//! assert_eq!(page.next_offset(), 20);
//! assert_eq!(page.len(), 10);
//! ```

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// One page of search results.
///
/// `SearchResponse<T>` implements `Deref<Target = [T]>`, so the page can be
/// iterated and indexed like a slice of its items.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
    /// Number of records matching the filter across all pages.
    pub total: u64,
    /// Number of records in this page.
    pub count: u64,
    /// Offset of the first record in this page.
    pub offset: u64,
    /// Page size limit applied by the server.
    #[serde(default)]
    pub limit: u64,
    /// The records in server order.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> SearchResponse<T> {
    /// Returns `true` if records remain beyond this page.
    ///
    /// Only `offset + count` against `total` decides this; a short page does
    /// not end the result set on its own.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.offset.saturating_add(self.count) < self.total
    }

    /// Returns the offset of the page after this one.
    #[must_use]
    pub const fn next_offset(&self) -> u64 {
        self.offset.saturating_add(self.count)
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for SearchResponse<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for SearchResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[derive(Deserialize)]
struct AddedId {
    id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCount {
    update_count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteCount {
    delete_count: i64,
}

fn decode<T: DeserializeOwned>(
    response: HttpResponse,
    resource: &'static str,
) -> Result<T, ResourceError> {
    serde_json::from_value(response.body)
        .map_err(|source| ResourceError::Decode { resource, source })
}

/// Decodes a single record.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body does not match `T`.
pub fn decode_item<T: DeserializeOwned>(
    response: HttpResponse,
    resource: &'static str,
) -> Result<T, ResourceError> {
    decode(response, resource)
}

/// Decodes a search page.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body is not a search envelope.
pub fn decode_search<T: DeserializeOwned>(
    response: HttpResponse,
    resource: &'static str,
) -> Result<SearchResponse<T>, ResourceError> {
    decode(response, resource)
}

/// Decodes the `{"id": N}` body returned by add.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if `id` is missing or not an integer.
pub fn decode_added_id(
    response: HttpResponse,
    resource: &'static str,
) -> Result<u64, ResourceError> {
    decode::<AddedId>(response, resource).map(|added| added.id)
}

/// Decodes the `{"updateCount": N}` body, returning `N` as reported.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if `updateCount` is missing.
pub fn decode_update_count(
    response: HttpResponse,
    resource: &'static str,
) -> Result<i64, ResourceError> {
    decode::<UpdateCount>(response, resource).map(|count| count.update_count)
}

/// Decodes an update acknowledgement.
///
/// # Errors
///
/// Returns [`ResourceError::NothingUpdated`] if the server reports a zero
/// `updateCount`, or [`ResourceError::Decode`] if the field is missing.
pub fn decode_update(
    response: HttpResponse,
    resource: &'static str,
    id: &str,
) -> Result<(), ResourceError> {
    if decode_update_count(response, resource)? == 0 {
        return Err(ResourceError::NothingUpdated {
            resource,
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Decodes the `{"deleteCount": N}` body returned by delete.
///
/// A JSON object without a count decodes as `0`; callers do not act on
/// the value.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body is not a JSON object or
/// `deleteCount` is not an integer.
pub fn decode_delete(
    response: HttpResponse,
    resource: &'static str,
) -> Result<i64, ResourceError> {
    let missing_count = response
        .body
        .as_object()
        .is_some_and(|body| !body.contains_key("deleteCount"));
    if missing_count {
        return Ok(0);
    }
    decode::<DeleteCount>(response, resource).map(|count| count.delete_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn ok(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    #[test]
    fn test_search_response_completion_rule() {
        let page: SearchResponse<u64> = serde_json::from_value(json!({
            "total": 25, "count": 5, "offset": 20, "limit": 10, "items": [1, 2, 3, 4, 5]
        }))
        .unwrap();
        assert!(!page.has_more());
        assert_eq!(page.next_offset(), 25);

        let page: SearchResponse<u64> = serde_json::from_value(json!({
            "total": 0, "count": 0, "offset": 0, "limit": 100, "items": []
        }))
        .unwrap();
        assert!(!page.has_more());
        assert!(page.is_empty());
    }

    #[test]
    fn test_short_page_with_more_remaining_is_not_complete() {
        let page: SearchResponse<u64> = serde_json::from_value(json!({
            "total": 30, "count": 3, "offset": 0, "limit": 10, "items": [1, 2, 3]
        }))
        .unwrap();
        assert!(page.has_more());
        assert_eq!(page.next_offset(), 3);
    }

    #[test]
    fn test_search_response_defaults_missing_items() {
        let page: SearchResponse<u64> =
            serde_json::from_value(json!({"total": 0, "count": 0, "offset": 0})).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.limit, 0);
    }

    #[test]
    fn test_decode_added_id() {
        assert_eq!(decode_added_id(ok(json!({"id": 77})), "Product").unwrap(), 77);
        assert!(matches!(
            decode_added_id(ok(json!({})), "Product"),
            Err(ResourceError::Decode { resource: "Product", .. })
        ));
    }

    #[test]
    fn test_decode_update_rejects_zero_count() {
        assert!(decode_update(ok(json!({"updateCount": 1})), "Category", "9").is_ok());

        let error = decode_update(ok(json!({"updateCount": 0})), "Category", "9").unwrap_err();
        assert!(matches!(
            error,
            ResourceError::NothingUpdated { resource: "Category", ref id } if id == "9"
        ));
    }

    #[test]
    fn test_decode_update_count_passes_value_through() {
        assert_eq!(
            decode_update_count(ok(json!({"updateCount": -3})), "Product").unwrap(),
            -3
        );
    }

    #[test]
    fn test_decode_delete_tolerates_missing_count() {
        assert_eq!(decode_delete(ok(json!({"deleteCount": 1})), "Product").unwrap(), 1);
        assert_eq!(decode_delete(ok(json!({})), "Product").unwrap(), 0);
    }

    #[test]
    fn test_decode_delete_rejects_non_object_body() {
        assert!(matches!(
            decode_delete(ok(json!("<html>")), "Product"),
            Err(ResourceError::Decode { resource: "Product", .. })
        ));
        assert!(matches!(
            decode_delete(ok(json!({"deleteCount": "one"})), "Product"),
            Err(ResourceError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_item_reports_malformed_body() {
        let error = decode_item::<HashMap<String, u64>>(ok(json!("<html>")), "Product").unwrap_err();
        assert!(matches!(error, ResourceError::Decode { .. }));
    }
}

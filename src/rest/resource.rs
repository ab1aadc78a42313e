//! REST Resource trait for catalog operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for Ecwid catalog collections. Resources that implement this
//! trait gain `search()`, `find()`, `add()`, `update()`, `delete()`,
//! `trampoline()` and `stream()`.
//!
//! # Implementing a Resource
//!
//! 1. Define a record struct with serde derives (camelCase, server-assigned
//!    fields marked `skip_serializing`)
//! 2. Implement the `RestResource` trait with its name, paths and search params
//! 3. The trait provides default implementations for every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::{RestResource, ResourcePath, ResourceOperation};
//! use ecwid_api::HttpMethod;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Coupon {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub name: Option<String>,
//! }
//!
//! impl RestResource for Coupon {
//!     type SearchParams = ();
//!
//!     const NAME: &'static str = "Coupon";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "discount_coupons"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "discount_coupons/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let page = Coupon::search(&client, &Filter::new()).await?;
//! let coupon = Coupon::find(&client, 42).await?;
//! ```

use std::collections::HashMap;
use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::response::{
    decode_added_id, decode_delete, decode_item, decode_search, decode_update,
};
use crate::rest::stream::{self, CancelHandle, ItemStream};
use crate::rest::{
    build_path, get_path, pagination, ResourceError, ResourceOperation, ResourcePath,
    SearchResponse,
};

/// Query parameters for a search, passed through to Ecwid as-is.
///
/// No local validation is applied; unknown keys are forwarded and the server
/// decides what they mean.
pub type Filter = HashMap<String, String>;

/// A catalog collection that can be searched, fetched, created, updated and
/// deleted.
///
/// Records never carry a back-reference to the client: every operation takes
/// the [`RestClient`] explicitly.
///
/// # Associated Types
///
/// - `SearchParams`: typed search filter that serializes into a [`Filter`]
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name used in errors and logs (e.g., "Product")
/// - `PATHS`: Path templates for each supported operation
#[allow(async_fn_in_trait)]
pub trait RestResource:
    Serialize + DeserializeOwned + Clone + Send + Sync + Sized + 'static
{
    /// Typed search filter for this resource.
    ///
    /// Use `()` if the resource has no typed filter.
    type SearchParams: Serialize + Default + Send + Sync;

    /// The singular name of the resource (e.g., "Product").
    const NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the server-assigned ID, or `None` for a record not yet added.
    fn get_id(&self) -> Option<u64>;

    /// Fetches one page of records matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::Decode`] if the page cannot be decoded.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut filter = Filter::new();
    /// filter.insert("keyword".to_string(), "shirt".to_string());
    ///
    /// let page = Product::search(&client, &filter).await?;
    /// println!("{} of {} products", page.count, page.total);
    /// ```
    async fn search(
        client: &RestClient,
        filter: &Filter,
    ) -> Result<SearchResponse<Self>, ResourceError> {
        search_page::<Self>(client, filter).await
    }

    /// Fetches one page using the typed search parameters.
    ///
    /// # Errors
    ///
    /// Same as [`RestResource::search`].
    async fn search_with(
        client: &RestClient,
        params: &Self::SearchParams,
    ) -> Result<SearchResponse<Self>, ResourceError> {
        let filter = serialize_to_query(params)?;
        search_page::<Self>(client, &filter).await
    }

    /// Fetches a single record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server reports no such record.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::find(&client, 123).await?;
    /// println!("Found: {:?}", product.name);
    /// ```
    async fn find(client: &RestClient, id: u64) -> Result<Self, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Find, Some(id))?;
        let id_str = id.to_string();

        let response = client
            .get(&path, None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, Self::NAME, Some(&id_str)))?;

        decode_item(response, Self::NAME)
    }

    /// Submits a new record and returns the ID the server assigned.
    ///
    /// Server-assigned fields on `record` are never sent. Missing required
    /// fields are reported by the server as [`ResourceError::ValidationFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Ecwid rejects the record.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product {
    ///     name: Some("Shirt".to_string()),
    ///     sku: Some("SHIRT-01".to_string()),
    ///     price: Some(19.99),
    ///     ..Default::default()
    /// };
    /// let id = Product::add(&client, &product).await?;
    /// ```
    async fn add(client: &RestClient, record: &Self) -> Result<u64, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Add, None)?;
        let body = to_body::<Self>(record)?;

        let response = client
            .post(&path, body, None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, Self::NAME, None))?;

        decode_added_id(response, Self::NAME)
    }

    /// Replaces the populated fields of the record with the given ID.
    ///
    /// Fields left as `None` on `record` are not sent, so this doubles as a
    /// partial update.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NothingUpdated`] if the server reports a zero
    /// update count and [`ResourceError::NotFound`] for an unknown ID.
    async fn update(client: &RestClient, id: u64, record: &Self) -> Result<(), ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Update, Some(id))?;
        let body = to_body::<Self>(record)?;
        let id_str = id.to_string();

        let response = client
            .put(&path, body, None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, Self::NAME, Some(&id_str)))?;

        decode_update(response, Self::NAME, &id_str)
    }

    /// Removes the record with the given ID.
    ///
    /// The delete count in the response is not checked; repeated deletes are
    /// forwarded to the server, which decides the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server reports no such record.
    async fn delete(client: &RestClient, id: u64) -> Result<(), ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Delete, Some(id))?;
        let id_str = id.to_string();

        let response = client
            .delete(&path, None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, Self::NAME, Some(&id_str)))?;

        let deleted = decode_delete(response, Self::NAME)?;
        tracing::debug!(resource = Self::NAME, id, deleted, "delete acknowledged");
        Ok(())
    }

    /// Visits every record matching `filter`, fetching pages until the server
    /// reports none remain.
    ///
    /// See [`pagination::trampoline`] for the exact termination rules.
    ///
    /// # Errors
    ///
    /// Returns the first search failure or the first error returned by `visit`.
    /// If the server returns an empty page before the total it reported, the
    /// walk stops with [`ResourceError::Truncated`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut names = Vec::new();
    /// Product::trampoline(&client, &Filter::new(), |index, product: Product| {
    ///     names.push((index, product.name.clone()));
    ///     async { Ok::<_, ResourceError>(()) }
    /// })
    /// .await?;
    /// ```
    async fn trampoline<F, Fut, E>(client: &RestClient, filter: &Filter, visit: F) -> Result<(), E>
    where
        F: FnMut(usize, Self) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: From<ResourceError>,
    {
        pagination::trampoline::<Self, F, Fut, E>(client, filter, visit).await
    }

    /// Streams every record matching `filter` from a background task.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use futures_util::StreamExt;
    ///
    /// let mut products = Product::stream(&client, &Filter::new());
    /// while let Some(product) = products.next().await {
    ///     println!("{:?}", product.name);
    /// }
    /// ```
    #[must_use]
    fn stream(client: &RestClient, filter: &Filter) -> ItemStream<Self> {
        Self::stream_with_cancel(client, filter, CancelHandle::new())
    }

    /// Streams every record matching `filter`, stopping when `cancel` fires.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[must_use]
    fn stream_with_cancel(
        client: &RestClient,
        filter: &Filter,
        cancel: CancelHandle,
    ) -> ItemStream<Self> {
        stream::spawn::<Self>(client.clone(), filter.clone(), cancel)
    }
}

/// Fetches one search page for `R`.
///
/// The returned future is `Send` for any `R`; the streaming producer
/// depends on that.
pub(crate) async fn search_page<R: RestResource>(
    client: &RestClient,
    filter: &Filter,
) -> Result<SearchResponse<R>, ResourceError> {
    let path = resolve_path::<R>(ResourceOperation::Search, None)?;
    let query = if filter.is_empty() {
        None
    } else {
        Some(filter.clone())
    };

    let response = client
        .get(&path, query)
        .await
        .map_err(|e| ResourceError::from_http_error(e, R::NAME, None))?;

    decode_search(response, R::NAME)
}

/// Resolves the path for `operation`, interpolating `id` when given.
pub(crate) fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
    id: Option<u64>,
) -> Result<String, ResourceError> {
    let mut ids: HashMap<&str, u64> = HashMap::new();
    if let Some(id) = id {
        ids.insert("id", id);
    }

    let available_ids: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;

    Ok(build_path(path.template, &ids))
}

fn to_body<R: RestResource>(record: &R) -> Result<Value, ResourceError> {
    serde_json::to_value(record).map_err(|source| ResourceError::Encode {
        resource: R::NAME,
        source,
    })
}

/// Serializes typed parameters into a [`Filter`].
///
/// `None` fields are skipped, arrays become comma-separated values and
/// nested objects are sent as JSON strings.
///
/// # Errors
///
/// Returns [`ResourceError::Encode`] if `params` cannot be serialized.
pub fn serialize_to_query<T: Serialize>(params: &T) -> Result<Filter, ResourceError> {
    let value = serde_json::to_value(params).map_err(|source| ResourceError::Encode {
        resource: "SearchParams",
        source,
    })?;

    let mut query = Filter::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HttpMethod;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
    struct MockCoupon {
        #[serde(skip_serializing)]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    impl RestResource for MockCoupon {
        type SearchParams = ();

        const NAME: &'static str = "Coupon";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Search,
                &[],
                "discount_coupons",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["id"],
                "discount_coupons/{id}",
            ),
        ];

        fn get_id(&self) -> Option<u64> {
            self.id
        }
    }

    #[test]
    fn test_resolve_path_interpolates_id() {
        assert_eq!(
            resolve_path::<MockCoupon>(ResourceOperation::Find, Some(8)).unwrap(),
            "discount_coupons/8"
        );
        assert_eq!(
            resolve_path::<MockCoupon>(ResourceOperation::Search, None).unwrap(),
            "discount_coupons"
        );
    }

    #[test]
    fn test_resolve_path_fails_for_unsupported_operation() {
        let error = resolve_path::<MockCoupon>(ResourceOperation::Delete, Some(8)).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                resource: "Coupon",
                operation: "delete"
            }
        ));
    }

    #[test]
    fn test_body_never_contains_server_assigned_id() {
        let coupon = MockCoupon {
            id: Some(5),
            name: Some("SUMMER".to_string()),
        };
        let body = to_body(&coupon).unwrap();
        assert_eq!(body, serde_json::json!({"name": "SUMMER"}));
    }

    #[test]
    fn test_serialize_to_query_handles_basic_types() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            limit: u32,
            keyword: String,
            in_stock: bool,
        }

        let params = Params {
            limit: 50,
            keyword: "shirt".to_string(),
            in_stock: true,
        };

        let query = serialize_to_query(&params).unwrap();
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("keyword"), Some(&"shirt".to_string()));
        assert_eq!(query.get("inStock"), Some(&"true".to_string()));
    }

    #[test]
    fn test_serialize_to_query_skips_none_and_joins_arrays() {
        #[derive(Serialize)]
        struct Params {
            #[serde(skip_serializing_if = "Option::is_none")]
            offset: Option<u32>,
            parent: Option<u64>,
            ids: Vec<u64>,
        }

        let params = Params {
            offset: None,
            parent: None,
            ids: vec![1, 2, 3],
        };

        let query = serialize_to_query(&params).unwrap();
        assert!(!query.contains_key("offset"));
        assert!(!query.contains_key("parent"));
        assert_eq!(query.get("ids"), Some(&"1,2,3".to_string()));
    }

    #[test]
    fn test_unserializable_params_are_encode_errors() {
        let mut params: HashMap<Vec<u8>, u8> = HashMap::new();
        params.insert(vec![1], 1);

        let error = serialize_to_query(&params).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Encode {
                resource: "SearchParams",
                ..
            }
        ));
    }

    #[test]
    fn test_unit_params_serialize_to_empty_filter() {
        assert!(serialize_to_query(&()).unwrap().is_empty());
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: RestResource>() {}
        assert_trait_bounds::<MockCoupon>();
    }
}

//! Path building infrastructure for REST resources.
//!
//! Each resource declares a static table of [`ResourcePath`] entries, one per
//! operation it supports. [`get_path`] picks the entry for an operation and
//! [`build_path`] interpolates IDs into its template.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use ecwid_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "products"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "products/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", 42);
//! assert_eq!(build_path(path.template, &ids), "products/42");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations a catalog resource may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Paginated search over the collection.
    Search,
    /// Fetch a single record by ID.
    Find,
    /// Create a record.
    Add,
    /// Replace fields of an existing record.
    Update,
    /// Remove a record.
    Delete,
    /// Apply a relative stock change (products only).
    AdjustInventory,
}

impl ResourceOperation {
    /// Returns the HTTP method conventionally used for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Search | Self::Find => HttpMethod::Get,
            Self::Add => HttpMethod::Post,
            Self::Update | Self::AdjustInventory => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name used in logs and errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Find => "find",
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::AdjustInventory => "adjust_inventory",
        }
    }
}

/// A path template for one operation on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path serves.
    pub operation: ResourceOperation,
    /// IDs that must be supplied to fill the template.
    pub ids: &'static [&'static str],
    /// Template with `{name}` placeholders, relative to the store URL.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new path entry.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of IDs this path requires.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if every required ID is available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the path for `operation`, preferring the one that uses the most
/// of the available IDs.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces `{name}` placeholders in `template` with the given IDs.
///
/// Placeholders without a matching ID are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

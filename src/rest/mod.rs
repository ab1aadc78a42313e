//! REST resource infrastructure for the Ecwid API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: CRUD and search operations shared by every resource
//! - **[`SearchResponse<T>`]**: One page of search results
//! - **[`pagination`]**: The offset trampoline that walks every page
//! - **[`stream`]**: A cancellable background stream built on the trampoline
//! - **Path building**: Operation-to-URL tables per resource
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::{EcwidConfig, RestClient};
//! use ecwid_api::rest::{Filter, RestResource};
//! use ecwid_api::rest::resources::Product;
//!
//! let client = RestClient::new(&config);
//!
//! // One page
//! let page = Product::search(&client, &Filter::new()).await?;
//! for product in page.iter() {
//!     println!("- {:?}", product.name);
//! }
//!
//! // Every page
//! Product::trampoline::<_, _, ecwid_api::rest::ResourceError>(
//!     &client,
//!     &Filter::new(),
//!     |index, product| async move {
//!         println!("{index}: {:?}", product.sku);
//!         Ok(())
//!     },
//! )
//! .await?;
//!
//! // Create, update and delete
//! let id = Product::add(&client, &new_product).await?;
//! Product::update(&client, id, &changes).await?;
//! Product::delete(&client, id).await?;
//! ```

mod errors;
mod path;
mod resource;
mod response;

pub mod pagination;
pub mod resources;
pub mod stream;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{serialize_to_query, Filter, RestResource};
pub use response::{
    decode_added_id, decode_delete, decode_item, decode_search, decode_update,
    decode_update_count, SearchResponse,
};
pub use stream::{CancelHandle, ItemStream};

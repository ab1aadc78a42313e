//! Offset pagination over search results.
//!
//! [`trampoline`] drives repeated searches, advancing the `offset` query
//! parameter, and hands every record to a caller-supplied visitor.
//!
//! # Termination
//!
//! The loop stops when any of these happen:
//!
//! - the page satisfies `offset + count >= total`
//! - a search fails (the error is returned)
//! - the visitor returns an error (that error is returned unchanged)
//! - the server reports an empty page while `offset < total`; this returns
//!   [`ResourceError::Truncated`] so a cut-short walk is never mistaken for a
//!   complete one
//!
//! Page fullness is never consulted: a short page with more results
//! remaining leads to another search.

use std::future::Future;

use crate::clients::RestClient;
use crate::rest::resource::search_page;
use crate::rest::{Filter, ResourceError, RestResource};

/// Query parameter advanced between pages.
pub const OFFSET_PARAM: &str = "offset";

/// Visits every record of `R` matching `filter`.
///
/// `filter` is copied; the caller's map is never modified. The visitor
/// receives a running index counted across pages and each record in server
/// order. Returning `Err` from the visitor stops iteration immediately: no
/// further records are visited and no further pages are fetched.
///
/// # Errors
///
/// Returns the search failure converted into `E`, or the visitor's own error.
/// An empty page before the reported total yields [`ResourceError::Truncated`].
///
/// # Example
///
/// ```rust,ignore
/// use ecwid_api::rest::{pagination, Filter, ResourceError};
/// use ecwid_api::Product;
///
/// let mut filter = Filter::new();
/// filter.insert("limit".to_string(), "100".to_string());
///
/// pagination::trampoline::<Product, _, _, ResourceError>(&client, &filter, |index, product| {
///     println!("{index}: {:?}", product.name);
///     async { Ok(()) }
/// })
/// .await?;
/// ```
pub async fn trampoline<R, F, Fut, E>(
    client: &RestClient,
    filter: &Filter,
    mut visit: F,
) -> Result<(), E>
where
    R: RestResource,
    F: FnMut(usize, R) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: From<ResourceError>,
{
    let mut filter = filter.clone();
    let mut index = 0_usize;

    loop {
        let page = search_page::<R>(client, &filter).await?;

        tracing::debug!(
            resource = R::NAME,
            offset = page.offset,
            count = page.count,
            total = page.total,
            "fetched search page"
        );

        let has_more = page.has_more();
        let next_offset = page.next_offset();
        let page_count = page.count;
        let total = page.total;

        for item in page {
            visit(index, item).await?;
            index += 1;
        }

        if !has_more {
            tracing::debug!(resource = R::NAME, visited = index, "pagination complete");
            return Ok(());
        }

        if page_count == 0 {
            tracing::warn!(
                resource = R::NAME,
                offset = next_offset,
                visited = index,
                total,
                "server returned an empty page before the reported total"
            );
            return Err(ResourceError::Truncated {
                resource: R::NAME,
                visited: index,
                total,
            }
            .into());
        }

        filter.insert(OFFSET_PARAM.to_string(), next_offset.to_string());
    }
}

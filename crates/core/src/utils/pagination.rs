//! Offset pagination over provider listings
//!
//! Provider listings are walked strictly in increasing offset order. The
//! offset advances by the requested page size, not by the number of items a
//! page actually returned, and the walk ends as soon as a page reports
//! `has_next == false`.

use std::future::Future;

use tracing::{debug, warn};
use workpulse_domain::{Paginated, Result};

/// Items gathered by [`collect_pages`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedPages<T> {
    pub items: Vec<T>,
    pub pages: usize,
}

/// Fetch every page of a listing.
///
/// `fetch` receives `(limit, offset)` for each request. The first error
/// aborts the walk and is returned unchanged.
///
/// A page that claims `has_next` while returning no items also ends the walk,
/// since following it could never terminate against a misbehaving upstream.
pub async fn collect_pages<T, F, Fut>(page_size: u32, mut fetch: F) -> Result<CollectedPages<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Paginated<T>>>,
{
    let mut items = Vec::new();
    let mut pages = 0usize;
    let mut offset = 0u32;

    loop {
        let page = fetch(page_size, offset).await?;
        pages += 1;

        let received = page.items.len();
        let has_next = page.has_next;
        debug!(offset, received, has_next, "fetched provider page");
        items.extend(page.items);

        if !has_next {
            break;
        }
        if received == 0 {
            warn!(offset, "provider reported more pages after an empty page; stopping");
            break;
        }
        offset = offset.saturating_add(page_size);
    }

    Ok(CollectedPages { items, pages })
}

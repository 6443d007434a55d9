//! Debounced search input bound to URL query parameters
//!
//! - location: path + query parameters and the pure `next_location` step
//! - debounce: cancellable, last-write-wins timer
//! - control: the search field, talking to the router through `Navigator`

pub mod control;
pub mod debounce;
pub mod error;
pub mod location;

pub use control::{MemoryNavigator, Navigator, SearchControl, DEFAULT_DEBOUNCE};
pub use debounce::Debouncer;
pub use error::{SearchError, SearchResult};
pub use location::{next_location, page_href, Location, QueryParams, PAGE_PARAM, QUERY_PARAM};

use dashkit_core::PaginationToken;

/// Pair each pagination item with its link; ellipses and the current page get none.
pub fn pagination_links(current: &Location, tokens: &[PaginationToken]) -> Vec<(PaginationToken, Option<String>)> {
    let active = current.page().unwrap_or(1);
    tokens
        .iter()
        .map(|token| {
            let href = token
                .page()
                .filter(|page| *page != active)
                .map(|page| page_href(current, page));
            (*token, href)
        })
        .collect()
}

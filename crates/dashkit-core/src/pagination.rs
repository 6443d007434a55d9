//! Pagination control generation
//!
//! Up to seven pages are listed in full. Longer ranges keep the first and
//! last pages visible and collapse the rest around the current page:
//!
//! - current page in the first three: `1 2 3 ... n-1 n`
//! - current page in the last three:  `1 2 ... n-2 n-1 n`
//! - anywhere else:                   `1 ... c-1 c c+1 ... n`

use crate::error::{CoreError, CoreResult};
use crate::types::PaginationToken;

/// Largest page count rendered without an ellipsis
pub const MAX_FULL_PAGES: usize = 7;

/// Produce the items of a pagination control for `current_page` of `total_pages`.
pub fn generate_pagination(current_page: usize, total_pages: usize) -> CoreResult<Vec<PaginationToken>> {
    if total_pages == 0 {
        return Err(CoreError::precondition("total pages must be at least 1"));
    }
    if current_page == 0 || current_page > total_pages {
        return Err(CoreError::precondition(format!(
            "current page {} is outside 1..={}",
            current_page, total_pages
        )));
    }

    use PaginationToken::Page;
    let ellipsis = PaginationToken::ELLIPSIS;

    let tokens = if total_pages <= MAX_FULL_PAGES {
        (1..=total_pages).map(Page).collect()
    } else if current_page <= 3 {
        vec![Page(1), Page(2), Page(3), ellipsis, Page(total_pages - 1), Page(total_pages)]
    } else if current_page >= total_pages - 2 {
        vec![
            Page(1),
            Page(2),
            ellipsis,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]
    } else {
        vec![
            Page(1),
            ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            ellipsis,
            Page(total_pages),
        ]
    };

    Ok(tokens)
}

/// Number of pages needed to show `total_items`, never less than one.
pub fn page_count(total_items: usize, page_size: usize) -> CoreResult<usize> {
    if page_size == 0 {
        return Err(CoreError::precondition("page size must be at least 1"));
    }
    Ok(total_items.div_ceil(page_size).max(1))
}

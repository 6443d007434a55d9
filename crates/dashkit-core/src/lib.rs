//! Core dashboard helpers
//!
//! - format: currency and locale-aware date display strings
//! - axis: y axis bound and tick labels for the revenue chart
//! - pagination: page markers for pagination controls
//!
//! Everything here is pure and synchronous; the same input always yields the
//! same output.

pub mod axis;
pub mod error;
pub mod format;
pub mod pagination;
pub mod types;

pub use axis::{generate_y_axis, AXIS_STEP, MAX_TICKS};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use format::{format_currency, format_date_to_local, format_usd, parse_iso_date, DateLocale};
pub use pagination::{generate_pagination, page_count, MAX_FULL_PAGES};
pub use types::{AxisResult, Ellipsis, PaginationToken, RevenuePoint};

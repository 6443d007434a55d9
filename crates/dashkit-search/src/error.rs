//! Error types for dashkit-search

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Invalid location '{input}': {reason}")]
    InvalidLocation { input: String, reason: String },

    #[error("Invalid percent-encoding in '{input}'")]
    InvalidEncoding { input: String },
}

/// Result type with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

//! Error types for dashkit-core
//!
//! Formatting and generation failures carry an error code, a severity and
//! suggestions so callers can render them without matching on variants.

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input is not a parsable date
    InvalidDateFormat,
    /// Locale tag is not supported
    UnsupportedLocale,
    /// Input outside the domain of the operation
    PreconditionViolation,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidDateFormat => write!(f, "INVALID_DATE_FORMAT"),
            ErrorCode::UnsupportedLocale => write!(f, "UNSUPPORTED_LOCALE"),
            ErrorCode::PreconditionViolation => write!(f, "PRECONDITION_VIOLATION"),
        }
    }
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - caller supplied bad input
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for dashkit-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid date format: '{input}'")]
    InvalidDateFormat { input: String },

    #[error("Unsupported locale: '{locale}'")]
    UnsupportedLocale { locale: String },

    #[error("Precondition violated: {message}")]
    PreconditionViolation { message: String },
}

impl CoreError {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        CoreError::PreconditionViolation { message: message.into() }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidDateFormat { .. } => ErrorCode::InvalidDateFormat,
            CoreError::UnsupportedLocale { .. } => ErrorCode::UnsupportedLocale,
            CoreError::PreconditionViolation { .. } => ErrorCode::PreconditionViolation,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InvalidDateFormat { .. } => ErrorSeverity::Warning,
            CoreError::UnsupportedLocale { .. } => ErrorSeverity::Warning,
            CoreError::PreconditionViolation { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::InvalidDateFormat { input } => {
                details = details.with_detail(serde_json::json!({ "input": input }));
                details = details.with_suggestion(
                    "Use an ISO-8601 date such as 2023-10-05 or 2023-10-05T14:30:00Z.".to_string()
                );
            }
            CoreError::UnsupportedLocale { .. } => {
                details = details.with_suggestion(format!(
                    "Supported locales: {}.",
                    crate::format::DateLocale::ALL
                        .iter()
                        .map(|l| l.tag())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
            CoreError::PreconditionViolation { message } => {
                details = details.with_detail(serde_json::json!({ "violation": message }));
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

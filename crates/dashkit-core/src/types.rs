//! Data types shared by the chart and pagination generators

use serde::{Deserialize, Serialize};

/// One bar of the revenue chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Bar label (e.g. month name)
    #[serde(alias = "month")]
    pub label: String,
    /// Amount in whole units
    #[serde(alias = "revenue")]
    pub value: i64,
}

impl RevenuePoint {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Y axis of the revenue chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisResult {
    /// Tick labels from the top of the axis down to zero
    pub tick_labels: Vec<String>,
    /// Largest value rounded up to the axis step
    pub top_bound: i64,
}

/// One item of a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaginationToken {
    /// Link to a page (1-based)
    Page(usize),
    /// Elided range of pages, serialized as `"..."`
    Ellipsis(Ellipsis),
}

/// Marker for an elided page range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ellipsis;

impl Ellipsis {
    pub const TEXT: &'static str = "...";
}

impl From<Ellipsis> for String {
    fn from(_: Ellipsis) -> Self {
        Ellipsis::TEXT.to_string()
    }
}

impl TryFrom<String> for Ellipsis {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == Ellipsis::TEXT {
            Ok(Ellipsis)
        } else {
            Err(format!("Invalid ellipsis marker: {}", value))
        }
    }
}

impl PaginationToken {
    pub const ELLIPSIS: PaginationToken = PaginationToken::Ellipsis(Ellipsis);

    /// Page number, or `None` for an ellipsis
    pub fn page(&self) -> Option<usize> {
        match self {
            PaginationToken::Page(n) => Some(*n),
            PaginationToken::Ellipsis(_) => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PaginationToken::Ellipsis(_))
    }
}

impl From<usize> for PaginationToken {
    fn from(page: usize) -> Self {
        PaginationToken::Page(page)
    }
}

impl std::fmt::Display for PaginationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaginationToken::Page(n) => write!(f, "{}", n),
            PaginationToken::Ellipsis(_) => write!(f, "{}", Ellipsis::TEXT),
        }
    }
}

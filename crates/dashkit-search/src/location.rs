//! Navigable location: a path plus ordered query parameters
//!
//! Query strings use form encoding (`+` for spaces), the same format browsers
//! produce for `URLSearchParams`.

use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};

/// Parameter holding the search term
pub const QUERY_PARAM: &str = "query";
/// Parameter holding the current page number
pub const PAGE_PARAM: &str = "page";

/// Ordered multi-map of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a=1&b=two+words`; a leading `?` is ignored.
    pub fn parse(query: &str) -> SearchResult<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut pairs = Vec::new();

        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            pairs.push((decode_component(name)?, decode_component(value)?));
        }

        Ok(Self { pairs })
    }

    /// First value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every value of `name` with a single `value`.
    ///
    /// The parameter keeps the position of its first occurrence; a new
    /// parameter is appended.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(n, _)| {
                    if n != name {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    /// Remove every value of `name`
    pub fn delete(&mut self, name: &str) {
        self.pairs.retain(|(n, _)| n != name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, "&")?;
            }
            write!(f, "{}={}", encode_component(name), encode_component(value))?;
        }
        Ok(())
    }
}

fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

fn decode_component(raw: &str) -> SearchResult<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|s| s.into_owned())
        .map_err(|_| SearchError::InvalidEncoding { input: raw.to_string() })
}

/// A path with its query parameters, e.g. `/dashboard/invoices?query=lee&page=2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    pub params: QueryParams,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            params: QueryParams::new(),
        }
    }

    /// Parse an absolute path with optional query string. Any `#fragment` is dropped.
    pub fn parse(input: &str) -> SearchResult<Self> {
        let without_fragment = input.split('#').next().unwrap_or("");
        let (pathname, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        if !pathname.starts_with('/') {
            return Err(SearchError::InvalidLocation {
                input: input.to_string(),
                reason: "path must start with '/'".to_string(),
            });
        }

        Ok(Self {
            pathname: pathname.to_string(),
            params: QueryParams::parse(query)?,
        })
    }

    /// Current search term, or the empty string when none is set
    pub fn search_term(&self) -> &str {
        self.params.get(QUERY_PARAM).unwrap_or("")
    }

    /// Current page, if present and numeric
    pub fn page(&self) -> Option<usize> {
        self.params.get(PAGE_PARAM).and_then(|p| p.parse().ok())
    }

    /// Copy of this location pointing at `page`, other parameters preserved
    pub fn with_page(&self, page: usize) -> Self {
        let mut next = self.clone();
        next.params.set(PAGE_PARAM, page.to_string());
        next
    }
}

/// `path?query`, or just `path` when there are no parameters
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.pathname)
        } else {
            write!(f, "{}?{}", self.pathname, self.params)
        }
    }
}

impl std::str::FromStr for Location {
    type Err = SearchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::parse(s)
    }
}

/// Location the browser should move to after the search field changes to `term`.
///
/// The page is reset to 1; an empty term removes the query parameter.
pub fn next_location(current: &Location, term: &str) -> Location {
    let mut next = current.clone();
    next.params.set(PAGE_PARAM, "1");
    if term.is_empty() {
        next.params.delete(QUERY_PARAM);
    } else {
        next.params.set(QUERY_PARAM, term);
    }
    next
}

/// Link target for a page of a pagination control
pub fn page_href(current: &Location, page: usize) -> String {
    current.with_page(page).to_string()
}

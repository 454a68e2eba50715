//! Search endpoint request parameters.

use pixel_commerce::SortOption;
use serde::{Deserialize, Serialize};

/// Page size requested from the endpoint for the client-side pipeline.
///
/// The endpoint caps responses at 1000 items; requesting the cap gives the
/// facet extractor the full candidate set for a query.
pub const FETCH_PAGE_SIZE: i64 = 1000;

/// Parameters for one call to the remote search endpoint.
///
/// The endpoint also accepts `category`/`subcategory`/`label` constraints, but
/// the storefront never sends them — facet narrowing is client-side so facet
/// counts stay stable over the whole query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search term; empty browses the whole catalog.
    pub term: String,
    /// Sort order applied by the endpoint.
    pub sort: SortOption,
    /// Requested page, 1-indexed.
    pub page: i64,
    /// Requested page size.
    pub page_size: i64,
}

impl SearchRequest {
    /// The request the storefront pipeline always makes: the unfiltered
    /// superset for a (term, sort) pair.
    pub fn superset(term: impl Into<String>, sort: SortOption) -> Self {
        Self {
            term: term.into(),
            sort,
            page: 1,
            page_size: FETCH_PAGE_SIZE,
        }
    }

    /// Encode as the endpoint's query string.
    pub fn query_string(&self) -> String {
        let mut pairs = vec![
            format!("term={}", urlencoding::encode(&self.term)),
            format!("sortBy={}", self.sort.as_str()),
            format!("page={}", self.page),
            format!("pageSize={}", self.page_size),
        ];
        // Facet constraints are deliberately absent; see type docs.
        pairs.retain(|p| !p.ends_with('='));
        pairs.join("&")
    }
}

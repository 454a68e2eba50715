//! Sort options for search results.

use serde::{Deserialize, Serialize};

/// Sort order applied by the remote search endpoint.
///
/// Sorting is the endpoint's job — the client never re-sorts the fetched
/// snapshot, it only filters and slices it. The wire string is part of both the
/// request and the response-cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by relevance (default for text search).
    #[default]
    Relevance,
    /// Sort by discounted price, low to high.
    PriceAsc,
    /// Sort by discounted price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by newest listing first.
    Newest,
}

impl SortOption {
    /// Wire string used in URLs and endpoint requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
            SortOption::Newest => "newest",
        }
    }

    /// Parse a wire string, falling back to relevance for anything unknown.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price_asc" => SortOption::PriceAsc,
            "price_desc" => SortOption::PriceDesc,
            "name_asc" => SortOption::NameAsc,
            "name_desc" => SortOption::NameDesc,
            "newest" => SortOption::Newest,
            _ => SortOption::Relevance,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::Newest => "Newest",
        }
    }
}

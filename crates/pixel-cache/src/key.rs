//! Cache key composition.

use serde::{Deserialize, Serialize};

/// A cache key identifying one fetched result set.
///
/// Built from the search term and the sort wire string — the only two inputs
/// that change what the endpoint returns, since the storefront always requests
/// the unfiltered superset. The term is normalized (trimmed, lowercased,
/// whitespace collapsed) so cosmetic retypes of the same query hit the same
/// entry. A different term therefore always maps to a different key, which is
/// what guarantees facet data derived from an old term is never served for a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    key: String,
}

impl QueryKey {
    /// Compose a key from a raw search term and a sort wire string.
    pub fn new(term: &str, sort: &str) -> Self {
        let normalized = term
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");

        Self {
            key: format!("search:{}:{}", normalized, sort),
        }
    }

    /// Get the key string.
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(
            QueryKey::new("  Gaming   PC ", "relevance"),
            QueryKey::new("gaming pc", "relevance")
        );
        assert_eq!(QueryKey::new("ps5", "newest").as_str(), "search:ps5:newest");
    }

    #[test]
    fn test_distinct_terms_distinct_keys() {
        assert_ne!(
            QueryKey::new("ps5", "relevance"),
            QueryKey::new("ps4", "relevance")
        );
    }

    #[test]
    fn test_sort_is_part_of_the_key() {
        assert_ne!(
            QueryKey::new("ps5", "relevance"),
            QueryKey::new("ps5", "price_asc")
        );
    }

    #[test]
    fn test_empty_term() {
        assert_eq!(QueryKey::new("", "relevance").as_str(), "search::relevance");
    }
}

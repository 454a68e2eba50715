//! Search endpoint response types.

use pixel_commerce::SearchItem;
use serde::{Deserialize, Serialize};

/// Response body of the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResponse {
    /// Result items, at most the requested page size.
    #[serde(default)]
    pub results: Vec<SearchItem>,
    /// Spelling suggestions for low-quality matches.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Single best alternative spelling, when the endpoint has one.
    #[serde(default, rename = "didYouMean")]
    pub did_you_mean: Option<String>,
}

impl SearchResponse {
    /// Check if the result set is empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

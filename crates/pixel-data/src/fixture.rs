//! An in-memory backend for tests and offline demos.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{FetchError, SearchBackend, SearchRequest, SearchResponse};

/// A [`SearchBackend`] serving canned responses.
///
/// Serves a default response for any term, with optional per-term overrides.
/// Used by the controller tests and the CLI's `--fixture` mode.
#[derive(Debug, Clone, Default)]
pub struct FixtureBackend {
    default: SearchResponse,
    by_term: HashMap<String, SearchResponse>,
}

impl FixtureBackend {
    /// Create a backend answering every request with `response`.
    pub fn new(response: SearchResponse) -> Self {
        Self {
            default: response,
            by_term: HashMap::new(),
        }
    }

    /// Serve a specific response for one term.
    pub fn with_term(mut self, term: impl Into<String>, response: SearchResponse) -> Self {
        self.by_term.insert(term.into(), response);
        self
    }
}

#[async_trait]
impl SearchBackend for FixtureBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        Ok(self
            .by_term
            .get(&request.term)
            .unwrap_or(&self.default)
            .clone())
    }
}

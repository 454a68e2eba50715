//! The search page controller.
//!
//! Single owner of the page's mutable state. UI interactions arrive as
//! [`UiEvent`] messages; each one produces a new [`FilterState`], a
//! recomputed view, and a [`UrlUpdate`] telling the shell how to write the
//! state back into the address bar. The fetched snapshot is immutable; every
//! recompute is a pure function over it.

use std::sync::Arc;

use pixel_cache::{QueryKey, ResponseCache};
use pixel_commerce::{
    decode_query, encode_query, extract_facets, filter_and_paginate, FacetDimension, FacetGroups,
    FilterState, Pagination, SearchItem, SearchPage, SortOption,
};
use pixel_data::{SearchBackend, SearchRequest, SearchResponse};
use tracing::{debug, info, warn};

/// A user interaction on the search page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// New search term submitted.
    SetTerm(String),
    /// Sort order changed.
    SetSort(SortOption),
    /// One facet checkbox toggled.
    ToggleFacet {
        dimension: FacetDimension,
        value: String,
    },
    /// Price filter switched on or off.
    SetPriceFilterEnabled(bool),
    /// Debounced price range commit (from the range editor).
    CommitPriceRange { min: f64, max: f64 },
    /// Pagination control clicked.
    SetPage(i64),
    /// "Clear all" in the facet sidebar.
    ClearFilters,
    /// Manual retry after a fetch error.
    Retry,
}

/// How the shell should write the new state into the address bar.
///
/// Discrete interactions push a history entry so back/forward steps through
/// them; a debounced price-range commit replaces the current entry so a slider
/// drag doesn't flood history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlUpdate {
    Push(String),
    Replace(String),
    None,
}

/// What the results area should render.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    /// Normal results grid.
    Results,
    /// The query (or filter combination) matched nothing.
    NoResults {
        suggestions: Vec<String>,
        did_you_mean: Option<String>,
    },
    /// The fetch failed; show the message and a retry control.
    Error { message: String },
}

/// An immutable snapshot of everything the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub state: FilterState,
    pub facets: FacetGroups,
    pub page: SearchPage,
    pub phase: ViewPhase,
}

/// Owns the filter state, the fetched snapshot and the derived facets.
///
/// Term and sort changes go through the response cache keyed on
/// `(term, sort)`; everything else is a synchronous recompute. Facets are
/// recomputed only when the snapshot changes, so counts stay "items in this
/// query" while the user narrows (see `pixel-commerce::search::facets`).
pub struct SearchController {
    backend: Arc<dyn SearchBackend>,
    cache: ResponseCache<SearchResponse>,
    state: FilterState,
    snapshot: Arc<Vec<SearchItem>>,
    facets: FacetGroups,
    suggestions: Vec<String>,
    did_you_mean: Option<String>,
    error: Option<String>,
}

impl SearchController {
    /// Create a controller over a backend and a pre-sized cache window.
    pub fn new(backend: Arc<dyn SearchBackend>, cache_ttl: std::time::Duration) -> Self {
        Self {
            backend,
            cache: ResponseCache::new(cache_ttl),
            state: FilterState::default(),
            snapshot: Arc::new(Vec::new()),
            facets: FacetGroups::default(),
            suggestions: Vec::new(),
            did_you_mean: None,
            error: None,
        }
    }

    /// Re-derive the whole page from a URL query string (mount, back/forward,
    /// shared link) and fetch the snapshot for its term and sort.
    ///
    /// A decoded page that overshoots the filtered set is clamped to the last
    /// page, since the link may predate a catalog change.
    pub async fn restore(&mut self, url_query: &str) {
        self.state = decode_query(url_query);
        self.refresh().await;
        let total_pages = self.pagination().total_pages;
        if self.state.page > total_pages {
            self.state.page = total_pages;
        }
    }

    /// Apply one UI event and say how to write the result into the URL.
    ///
    /// Every filter-changing event resets to page 1; only an explicit
    /// [`UiEvent::SetPage`] keeps its own page (clamped to the last page).
    pub async fn apply(&mut self, event: UiEvent) -> UrlUpdate {
        debug!(?event, "applying ui event");
        match event {
            UiEvent::SetTerm(term) => {
                if term == self.state.term {
                    return UrlUpdate::None;
                }
                self.state.term = term;
                self.state.reset_page();
                self.refresh().await;
                UrlUpdate::Push(self.url())
            }
            UiEvent::SetSort(sort) => {
                if sort == self.state.sort {
                    return UrlUpdate::None;
                }
                self.state.sort = sort;
                self.state.reset_page();
                // The endpoint is the sorting authority, so this is a fetch.
                self.refresh().await;
                UrlUpdate::Push(self.url())
            }
            UiEvent::ToggleFacet { dimension, value } => {
                self.state.toggle(dimension, value);
                self.state.reset_page();
                UrlUpdate::Push(self.url())
            }
            UiEvent::SetPriceFilterEnabled(enabled) => {
                self.state.price_filter_enabled = enabled;
                if enabled && self.state.price_range == (0.0, 0.0) {
                    let bounds = self.facets.price_bounds;
                    self.state.price_range = (bounds.min, bounds.max);
                }
                self.state.reset_page();
                UrlUpdate::Push(self.url())
            }
            UiEvent::CommitPriceRange { min, max } => {
                self.state.price_filter_enabled = true;
                self.state.price_range = (min, max);
                self.state.reset_page();
                UrlUpdate::Replace(self.url())
            }
            UiEvent::SetPage(page) => {
                let total_pages = self.pagination().total_pages;
                self.state.page = page.clamp(1, total_pages);
                UrlUpdate::Push(self.url())
            }
            UiEvent::ClearFilters => {
                for dimension in FacetDimension::ALL {
                    self.state.selection_mut(dimension).clear();
                }
                self.state.price_filter_enabled = false;
                self.state.price_range = (0.0, 0.0);
                self.state.reset_page();
                UrlUpdate::Push(self.url())
            }
            UiEvent::Retry => {
                self.refresh().await;
                UrlUpdate::None
            }
        }
    }

    /// Current state encoded for the address bar.
    pub fn url(&self) -> String {
        encode_query(&self.state)
    }

    /// Borrow the current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Borrow the facet menus derived from the current snapshot.
    pub fn facets(&self) -> &FacetGroups {
        &self.facets
    }

    /// Pagination over the currently filtered set.
    pub fn pagination(&self) -> Pagination {
        filter_and_paginate(&self.snapshot, &self.state).pagination
    }

    /// Build the immutable view snapshot for rendering.
    pub fn view(&self) -> SearchView {
        let page = filter_and_paginate(&self.snapshot, &self.state);
        let phase = if let Some(message) = &self.error {
            ViewPhase::Error {
                message: message.clone(),
            }
        } else if page.pagination.total == 0 {
            ViewPhase::NoResults {
                suggestions: self.suggestions.clone(),
                did_you_mean: self.did_you_mean.clone(),
            }
        } else {
            ViewPhase::Results
        };

        SearchView {
            state: self.state.clone(),
            facets: self.facets.clone(),
            page,
            phase,
        }
    }

    /// Fetch the snapshot for the current (term, sort), through the cache,
    /// and re-derive the facet menus from it.
    async fn refresh(&mut self) {
        let key = QueryKey::new(&self.state.term, self.state.sort.as_str());

        let cached = match self.cache.get(&key) {
            Ok(hit) => hit,
            Err(e) => {
                // A poisoned cache only costs us the hit; fetch anyway.
                warn!(error = %e, "cache read failed");
                None
            }
        };

        let response = match cached {
            Some(response) => {
                debug!(key = %key, "cache hit");
                response
            }
            None => {
                let request = SearchRequest::superset(&self.state.term, self.state.sort);
                match self.backend.search(&request).await {
                    Ok(response) => {
                        info!(key = %key, results = response.len(), "fetched search results");
                        if let Err(e) = self.cache.insert(key.clone(), response.clone()) {
                            warn!(error = %e, "cache write failed");
                        }
                        response
                    }
                    Err(e) => {
                        // Surface the message; the user re-triggers manually.
                        warn!(error = %e, "search fetch failed");
                        self.error = Some(e.to_string());
                        self.snapshot = Arc::new(Vec::new());
                        self.facets = FacetGroups::default();
                        self.suggestions.clear();
                        self.did_you_mean = None;
                        return;
                    }
                }
            }
        };

        self.error = None;
        self.suggestions = response.suggestions;
        self.did_you_mean = response.did_you_mean;
        self.snapshot = Arc::new(response.results);
        self.facets = extract_facets(&self.snapshot);
    }
}

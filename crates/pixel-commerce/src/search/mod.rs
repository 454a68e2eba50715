//! Faceted search: filter state, facet extraction, pagination, URL codec.
//!
//! Control flow on the search page: URL parameters → fetch (one request per
//! distinct term/sort pair, capped at 1000 items) → [`extract_facets`] derives
//! the facet menu and price bounds → [`filter_and_paginate`] applies the active
//! selections over the same in-memory snapshot → render. Facet counts are
//! deliberately computed over the *unfiltered* snapshot so the sidebar keeps
//! showing how many items exist in dimensions the user has not yet narrowed.

mod facets;
mod filter;
mod params;
mod query;
mod results;

pub use facets::{extract_facets, FacetGroups, FacetValue, PriceBounds};
pub use filter::{FacetDimension, FilterState};
pub use params::{decode_query, encode_query};
pub use query::SortOption;
pub use results::{filter_and_paginate, Pagination, SearchPage};

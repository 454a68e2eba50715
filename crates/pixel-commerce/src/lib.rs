//! Storefront domain types and faceted search pipeline for PixelMart.
//!
//! PixelMart is a gaming-hardware marketplace (consoles, computers, parts and
//! repair services). This crate holds the pure, I/O-free half of its search
//! page:
//!
//! - **Catalog**: the `SearchItem` record returned by the remote search call
//! - **Facets**: frequency-counted facet menus and price bounds over a fetched
//!   result set
//! - **Filtering**: set-membership facet filters, an inclusive price range, and
//!   pagination over the in-memory snapshot
//! - **Params**: the URL query-string codec that makes the browser URL the
//!   single source of truth for filter state
//!
//! The fetched snapshot is the complete (≤1000 item) result set for one
//! (term, sort) pair; everything here is a pure function over that snapshot.
//!
//! # Example
//!
//! ```rust
//! use pixel_commerce::prelude::*;
//!
//! let items = vec![
//!     SearchItem::new("c-1", "PS5 Slim").with_category("Consoles").with_prices(499.0, 449.0),
//!     SearchItem::new("c-2", "Gaming PC").with_category("Computers").with_prices(1299.0, 1199.0),
//! ];
//!
//! let facets = extract_facets(&items);
//! assert_eq!(facets.categories.len(), 2);
//!
//! let state = FilterState::default().with_category("Consoles");
//! let page = filter_and_paginate(&items, &state);
//! assert_eq!(page.pagination.total, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod search;

pub use catalog::SearchItem;
pub use error::RangeError;
pub use search::{
    decode_query, encode_query, extract_facets, filter_and_paginate, FacetDimension, FacetGroups,
    FacetValue, FilterState, Pagination, PriceBounds, SearchPage, SortOption,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::SearchItem;
    pub use crate::error::RangeError;
    pub use crate::search::{
        decode_query, encode_query, extract_facets, filter_and_paginate, FacetDimension,
        FacetGroups, FacetValue, FilterState, Pagination, PriceBounds, SearchPage, SortOption,
    };
}

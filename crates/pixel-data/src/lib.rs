//! HTTP client for the PixelMart search endpoint.
//!
//! The storefront always asks the endpoint for the *unfiltered* superset of a
//! query — no facet constraints, page 1, page size 1000 — so the client-side
//! facet extractor sees the complete universe of facet values for that term.
//! Facet narrowing, the price filter and pagination all happen locally over
//! the fetched snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use pixel_data::{HttpSearchClient, SearchBackend, SearchRequest};
//! use pixel_commerce::SortOption;
//!
//! let client = HttpSearchClient::new("https://api.pixelmart.example")
//!     .with_api_key("secret");
//!
//! let request = SearchRequest::superset("gaming pc", SortOption::PriceAsc);
//! let response = client.search(&request).await?;
//! println!("{} results", response.results.len());
//! ```

mod client;
mod error;
mod fixture;
mod request;
mod response;

pub use client::{HttpSearchClient, SearchBackend};
pub use error::FetchError;
pub use fixture::FixtureBackend;
pub use request::{SearchRequest, FETCH_PAGE_SIZE};
pub use response::SearchResponse;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FetchError, FixtureBackend, HttpSearchClient, SearchBackend, SearchRequest, SearchResponse,
    };
}

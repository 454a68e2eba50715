//! Keyed search-response cache for PixelMart.
//!
//! The storefront issues one network request per distinct (term, sort) pair
//! and keeps the response around so re-renders, pagination and filter toggles
//! never refetch. Entries go stale after a configurable window and are simply
//! overwritten on the next fetch; with at most ~1000 items per entry there is
//! no eviction pressure, so the map is unbounded with an optional
//! [`ResponseCache::purge_expired`] sweep.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use pixel_cache::{QueryKey, ResponseCache};
//!
//! let cache: ResponseCache<Vec<String>> = ResponseCache::new(Duration::from_secs(60));
//! let key = QueryKey::new("PS5 Pro", "relevance");
//!
//! cache.insert(key.clone(), vec!["listing".to_string()]).unwrap();
//! assert!(cache.get(&key).unwrap().is_some());
//! ```

mod error;
mod key;
mod store;

pub use error::CacheError;
pub use key::QueryKey;
pub use store::ResponseCache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, QueryKey, ResponseCache};
}

//! PixelMart storefront search page.
//!
//! The view-layer boundary of the search pipeline. The URL query string is the
//! single source of truth: [`SearchController::restore`] derives the page from
//! it, UI events flow through [`SearchController::apply`] which answers with a
//! [`UrlUpdate`], and the debounced [`PriceRangeEditor`] is how raw slider and
//! keystroke events become committed range changes.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod view;

pub use config::StorefrontConfig;
pub use controller::{SearchController, SearchView, UiEvent, UrlUpdate, ViewPhase};
pub use debounce::{Debouncer, PriceRangeEditor};

//! Active filter state and the item predicate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::SearchItem;
use crate::error::RangeError;
use crate::search::facets::PriceBounds;
use crate::search::query::SortOption;

/// Default items per rendered page.
pub const DEFAULT_PER_PAGE: i64 = 24;

/// The four facet dimensions of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetDimension {
    Category,
    Subcategory,
    Label,
    Condition,
}

impl FacetDimension {
    /// All dimensions, in sidebar order.
    pub const ALL: [FacetDimension; 4] = [
        FacetDimension::Category,
        FacetDimension::Subcategory,
        FacetDimension::Label,
        FacetDimension::Condition,
    ];

    /// Read this dimension's value off an item, if present and non-empty.
    pub fn value_of<'a>(&self, item: &'a SearchItem) -> Option<&'a str> {
        let value = match self {
            FacetDimension::Category => item.category.as_deref(),
            FacetDimension::Subcategory => item.subcategory.as_deref(),
            FacetDimension::Label => item.label.as_deref(),
            FacetDimension::Condition => item.condition.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// URL parameter name for this dimension.
    pub fn param_name(&self) -> &'static str {
        match self {
            FacetDimension::Category => "category",
            FacetDimension::Subcategory => "subcategory",
            FacetDimension::Label => "label",
            FacetDimension::Condition => "condition",
        }
    }
}

/// The complete, immutable view state of the search page.
///
/// The URL query string is the source of truth; this value is decoded from it
/// on every navigation and encoded back after every interaction. Selections are
/// `BTreeSet`s so encoding is deterministic. Filter semantics: OR within a
/// dimension, AND across dimensions, and the price range (when enabled) is
/// inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Search term sent to the remote endpoint.
    pub term: String,
    /// Sort order, applied remotely.
    pub sort: SortOption,
    /// Selected categories.
    pub categories: BTreeSet<String>,
    /// Selected subcategories.
    pub subcategories: BTreeSet<String>,
    /// Selected labels.
    pub labels: BTreeSet<String>,
    /// Selected conditions.
    pub conditions: BTreeSet<String>,
    /// Whether the price range below is applied at all.
    pub price_filter_enabled: bool,
    /// Committed price range (min, max) over `discount_price`.
    pub price_range: (f64, f64),
    /// Current page, 1-indexed.
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            term: String::new(),
            sort: SortOption::Relevance,
            categories: BTreeSet::new(),
            subcategories: BTreeSet::new(),
            labels: BTreeSet::new(),
            conditions: BTreeSet::new(),
            price_filter_enabled: false,
            price_range: (0.0, 0.0),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl FilterState {
    /// Create a state for a search term.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Borrow the selection set for a dimension.
    pub fn selection(&self, dimension: FacetDimension) -> &BTreeSet<String> {
        match dimension {
            FacetDimension::Category => &self.categories,
            FacetDimension::Subcategory => &self.subcategories,
            FacetDimension::Label => &self.labels,
            FacetDimension::Condition => &self.conditions,
        }
    }

    /// Mutably borrow the selection set for a dimension.
    pub fn selection_mut(&mut self, dimension: FacetDimension) -> &mut BTreeSet<String> {
        match dimension {
            FacetDimension::Category => &mut self.categories,
            FacetDimension::Subcategory => &mut self.subcategories,
            FacetDimension::Label => &mut self.labels,
            FacetDimension::Condition => &mut self.conditions,
        }
    }

    /// Toggle one facet value on or off. Returns whether it is now selected.
    pub fn toggle(&mut self, dimension: FacetDimension, value: impl Into<String>) -> bool {
        let value = value.into();
        let set = self.selection_mut(dimension);
        if set.remove(&value) {
            false
        } else {
            set.insert(value);
            true
        }
    }

    /// Add a category selection.
    pub fn with_category(mut self, value: impl Into<String>) -> Self {
        self.categories.insert(value.into());
        self
    }

    /// Add a subcategory selection.
    pub fn with_subcategory(mut self, value: impl Into<String>) -> Self {
        self.subcategories.insert(value.into());
        self
    }

    /// Add a label selection.
    pub fn with_label(mut self, value: impl Into<String>) -> Self {
        self.labels.insert(value.into());
        self
    }

    /// Add a condition selection.
    pub fn with_condition(mut self, value: impl Into<String>) -> Self {
        self.conditions.insert(value.into());
        self
    }

    /// Set sort order.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 1000);
        self
    }

    /// Enable the price filter with a committed range.
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_filter_enabled = true;
        self.price_range = (min, max);
        self
    }

    /// Whether any facet or price filter is active.
    pub fn is_filtering(&self) -> bool {
        self.price_filter_enabled
            || FacetDimension::ALL
                .iter()
                .any(|d| !self.selection(*d).is_empty())
    }

    /// The item predicate: AND across dimensions, OR within a dimension.
    ///
    /// An item with an absent field never matches a non-empty selection on
    /// that dimension.
    pub fn matches(&self, item: &SearchItem) -> bool {
        for dimension in FacetDimension::ALL {
            let selected = self.selection(dimension);
            if selected.is_empty() {
                continue;
            }
            match dimension.value_of(item) {
                Some(value) if selected.contains(value) => {}
                _ => return false,
            }
        }

        if self.price_filter_enabled {
            let (min, max) = self.price_range;
            if item.discount_price < min || item.discount_price > max {
                return false;
            }
        }

        true
    }

    /// Commit a new range minimum, validated against the facet-extracted
    /// bounds and the current maximum. A rejected edit leaves the committed
    /// range unchanged.
    pub fn try_set_min(&mut self, value: f64, bounds: &PriceBounds) -> Result<(), RangeError> {
        if value < bounds.min {
            return Err(RangeError::MinBelowBound {
                value,
                bound: bounds.min,
            });
        }
        if value > self.price_range.1 {
            return Err(RangeError::MinAboveMax {
                value,
                max: self.price_range.1,
            });
        }
        self.price_range.0 = value;
        Ok(())
    }

    /// Commit a new range maximum; symmetric to [`try_set_min`].
    ///
    /// [`try_set_min`]: FilterState::try_set_min
    pub fn try_set_max(&mut self, value: f64, bounds: &PriceBounds) -> Result<(), RangeError> {
        if value > bounds.max {
            return Err(RangeError::MaxAboveBound {
                value,
                bound: bounds.max,
            });
        }
        if value < self.price_range.0 {
            return Err(RangeError::MaxBelowMin {
                value,
                min: self.price_range.0,
            });
        }
        self.price_range.1 = value;
        Ok(())
    }

    /// Reset to the first page. Called after any filter-changing interaction
    /// that does not explicitly set a page.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }
}

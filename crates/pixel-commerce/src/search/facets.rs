//! Facet extraction over a fetched result set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::SearchItem;
use crate::search::filter::FacetDimension;

/// A single facet menu entry: a value and how many items in the fetched set
/// carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The facet value (e.g., "Consoles").
    pub value: String,
    /// Number of items in the fetched set with this value.
    pub count: i64,
}

/// Inclusive price bounds over `discount_price`, floored/ceiled to whole
/// currency units so slider endpoints land on round numbers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

/// The derived facet menus for the sidebar.
///
/// Fully derived from the fetched snapshot and recomputed only when that
/// snapshot changes — never on a filter toggle. Counts are therefore "items in
/// this query" rather than "items remaining after filtering", so a user can
/// see how many exist in values they have not selected yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FacetGroups {
    pub categories: Vec<FacetValue>,
    pub subcategories: Vec<FacetValue>,
    pub labels: Vec<FacetValue>,
    pub conditions: Vec<FacetValue>,
    pub price_bounds: PriceBounds,
}

impl FacetGroups {
    /// Borrow the facet list for a dimension.
    pub fn group(&self, dimension: FacetDimension) -> &[FacetValue] {
        match dimension {
            FacetDimension::Category => &self.categories,
            FacetDimension::Subcategory => &self.subcategories,
            FacetDimension::Label => &self.labels,
            FacetDimension::Condition => &self.conditions,
        }
    }

    /// Whether there is nothing to show in any group.
    pub fn is_empty(&self) -> bool {
        FacetDimension::ALL.iter().all(|d| self.group(*d).is_empty())
    }
}

/// Derive the facet menus and price bounds from a fetched result set.
///
/// Single pass: each item contributes one count per dimension whose field is
/// present and non-empty. Lists come out sorted by count descending, ties by
/// value ascending. Bounds default to `[0, 0]` for an empty set.
pub fn extract_facets(items: &[SearchItem]) -> FacetGroups {
    let mut counts: [HashMap<&str, i64>; 4] = Default::default();
    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;

    for item in items {
        for (slot, dimension) in counts.iter_mut().zip(FacetDimension::ALL) {
            if let Some(value) = dimension.value_of(item) {
                *slot.entry(value).or_insert(0) += 1;
            }
        }
        min_price = min_price.min(item.discount_price);
        max_price = max_price.max(item.discount_price);
    }

    let price_bounds = if items.is_empty() {
        PriceBounds::default()
    } else {
        PriceBounds {
            min: min_price.floor(),
            max: max_price.ceil(),
        }
    };

    let [categories, subcategories, labels, conditions] = counts.map(into_sorted_values);

    FacetGroups {
        categories,
        subcategories,
        labels,
        conditions,
        price_bounds,
    }
}

fn into_sorted_values(counts: HashMap<&str, i64>) -> Vec<FacetValue> {
    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(value, count)| FacetValue {
            value: value.to_string(),
            count,
        })
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, discount_price: f64) -> SearchItem {
        SearchItem::new("id", "name")
            .with_category(category)
            .with_prices(discount_price, discount_price)
    }

    #[test]
    fn test_counts_and_bounds() {
        // Three items, two categories, bounds from discount prices.
        let items = vec![
            item("Consoles", 100.0),
            item("Computers", 500.0),
            item("Consoles", 900.0),
        ];

        let facets = extract_facets(&items);
        assert_eq!(
            facets.categories,
            vec![
                FacetValue {
                    value: "Consoles".to_string(),
                    count: 2
                },
                FacetValue {
                    value: "Computers".to_string(),
                    count: 1
                },
            ]
        );
        assert_eq!(facets.price_bounds.min, 100.0);
        assert_eq!(facets.price_bounds.max, 900.0);
    }

    #[test]
    fn test_counts_sum_to_items_with_value() {
        let mut items = vec![
            item("Consoles", 10.0),
            item("Consoles", 20.0),
            item("Computers", 30.0),
        ];
        // Two items without any category.
        items.push(SearchItem::new("a", "a").with_prices(5.0, 5.0));
        items.push(SearchItem::new("b", "b").with_prices(6.0, 6.0));
        // Empty-string category counts as absent.
        items.push(SearchItem::new("c", "c").with_category("").with_prices(7.0, 7.0));

        let facets = extract_facets(&items);
        let total: i64 = facets.categories.iter().map(|f| f.count).sum();
        assert_eq!(total, 3);
        assert!(facets.subcategories.is_empty());
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let items = vec![
            item("Zebra", 1.0),
            item("Alpha", 1.0),
            item("Mid", 1.0),
            item("Mid", 1.0),
        ];

        let facets = extract_facets(&items);
        let names: Vec<&str> = facets.categories.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(names, vec!["Mid", "Alpha", "Zebra"]);
    }

    #[test]
    fn test_bounds_floor_and_ceil() {
        let items = vec![item("Consoles", 99.25), item("Consoles", 450.75)];
        let facets = extract_facets(&items);
        assert_eq!(facets.price_bounds.min, 99.0);
        assert_eq!(facets.price_bounds.max, 451.0);
    }

    #[test]
    fn test_empty_set_defaults() {
        let facets = extract_facets(&[]);
        assert!(facets.is_empty());
        assert_eq!(facets.price_bounds, PriceBounds { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_item_contributes_to_all_present_dimensions() {
        let items = vec![SearchItem::new("id", "name")
            .with_category("Consoles")
            .with_subcategory("Handhelds")
            .with_label("Bundle")
            .with_condition("New")
            .with_prices(100.0, 90.0)];

        let facets = extract_facets(&items);
        for dimension in FacetDimension::ALL {
            assert_eq!(facets.group(dimension).len(), 1);
            assert_eq!(facets.group(dimension)[0].count, 1);
        }
    }
}

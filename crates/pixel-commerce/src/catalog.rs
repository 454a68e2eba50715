//! Catalog record types.

use serde::{Deserialize, Serialize};

/// One product record as returned by the remote search endpoint.
///
/// Records are immutable once fetched; the filtering pipeline only ever reads
/// them. The four facet fields are optional because listings migrated from the
/// legacy catalog frequently miss one or more of them — an item with an absent
/// field simply never matches a selection on that dimension and contributes to
/// no facet count for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchItem {
    /// Unique listing identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Top-level category (e.g., "Consoles", "Computers").
    #[serde(default)]
    pub category: Option<String>,
    /// Subcategory within the category (e.g., "Handhelds").
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Merchandising label (e.g., "Refurbished", "Bundle").
    #[serde(default)]
    pub label: Option<String>,
    /// Physical condition (e.g., "New", "Used - Good").
    #[serde(default)]
    pub condition: Option<String>,
    /// List price. Non-negative.
    pub price: f64,
    /// Effective price after discount. By convention `discount_price <= price`,
    /// but the backend does not enforce it and neither do we.
    pub discount_price: f64,
}

impl SearchItem {
    /// Create a minimal item. Mostly useful in tests and examples.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            subcategory: None,
            label: None,
            condition: None,
            price: 0.0,
            discount_price: 0.0,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the subcategory.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the condition.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Set list and discounted price.
    pub fn with_prices(mut self, price: f64, discount_price: f64) -> Self {
        self.price = price;
        self.discount_price = discount_price;
        self
    }

    /// Check whether the item is discounted below list price.
    pub fn is_on_sale(&self) -> bool {
        self.discount_price < self.price
    }

    /// Discount percentage when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        if self.price > 0.0 && self.discount_price < self.price {
            Some((self.price - self.discount_price) / self.price * 100.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let item = SearchItem::new("x-1", "Xbox Series X")
            .with_category("Consoles")
            .with_condition("New")
            .with_prices(499.0, 449.0);

        assert_eq!(item.category.as_deref(), Some("Consoles"));
        assert_eq!(item.subcategory, None);
        assert!(item.is_on_sale());
    }

    #[test]
    fn test_discount_percentage() {
        let item = SearchItem::new("x", "x").with_prices(100.0, 75.0);
        assert_eq!(item.discount_percentage(), Some(25.0));

        let full_price = SearchItem::new("y", "y").with_prices(100.0, 100.0);
        assert_eq!(full_price.discount_percentage(), None);
    }

    #[test]
    fn test_deserialize_missing_facets() {
        let json = r#"{"id":"a","name":"RTX 4070","price":600.0,"discount_price":550.0}"#;
        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, None);
        assert_eq!(item.label, None);
        assert_eq!(item.discount_price, 550.0);
    }
}

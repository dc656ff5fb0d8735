//! Search filter types.

use crate::catalog::{Category, Product};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Only products in this category.
    Category(Category),
    /// Price range, both ends inclusive.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only in-stock products.
    InStock,
    /// Case-insensitive substring over name, description and category.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: Category) -> Self {
        Filter::Category(category)
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => product.category == *category,
            Filter::PriceRange { min, max } => {
                let cents = product.price.amount_cents;
                min.map_or(true, |m| cents >= m.amount_cents)
                    && max.map_or(true, |m| cents <= m.amount_cents)
            }
            Filter::InStock => product.in_stock,
            Filter::Text(query) => {
                let needle = query.trim().to_lowercase();
                needle.is_empty() || product.matches_lowercase(&needle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> Product {
        let mut p = Product::new("minimalist-notebook-1", "Minimalist Notebook", Money::usd(20), Category::Notebooks);
        p.description = "Premium hardcover notebook with dotted pages.".to_string();
        p
    }

    #[test]
    fn test_price_range() {
        let p = notebook();
        assert!(Filter::price_range(Some(Money::usd(20)), Some(Money::usd(20))).matches(&p));
        assert!(Filter::price_range(None, Some(Money::usd(25))).matches(&p));
        assert!(!Filter::price_range(Some(Money::usd(21)), None).matches(&p));
        assert!(Filter::price_range(None, None).matches(&p));
    }

    #[test]
    fn test_text_filter() {
        let p = notebook();
        assert!(Filter::text("DOTTED").matches(&p));
        assert!(Filter::text("notebooks").matches(&p));
        assert!(Filter::text("").matches(&p));
        assert!(!Filter::text("mug").matches(&p));
    }

    #[test]
    fn test_in_stock_and_category() {
        let mut p = notebook();
        assert!(Filter::in_stock().matches(&p));
        assert!(Filter::category(Category::Notebooks).matches(&p));
        assert!(!Filter::category(Category::Mugs).matches(&p));

        p.in_stock = false;
        assert!(!Filter::in_stock().matches(&p));
    }
}

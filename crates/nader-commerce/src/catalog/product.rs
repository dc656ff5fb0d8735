//! Product type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Catalog records are immutable once built; the cart only ever holds copies.
/// Field names serialize in camelCase to match persisted cart snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Category.
    pub category: Category,
    /// Full description.
    pub description: String,
    /// Primary image URL.
    pub image: String,
    /// Gallery image URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
    /// Units on hand, when tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<u32>,
    /// Bullet-point features.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Product {
    /// Create an in-stock product with no gallery or features.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            description: String::new(),
            image: String::new(),
            images: Vec::new(),
            in_stock: true,
            stock_quantity: None,
            features: Vec::new(),
        }
    }

    /// Check whether a free-text query matches name, description or category.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("black-mug-1", "Black Mug", Money::usd(15), Category::Mugs);
        assert_eq!(product.id.as_str(), "black-mug-1");
        assert!(product.in_stock);
    }

    #[test]
    fn test_product_json_shape() {
        let mut product = Product::new("black-mug-1", "Black Mug", Money::usd(15), Category::Mugs);
        product.stock_quantity = Some(100);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["price"], 15);
        assert_eq!(json["inStock"], true);
        assert_eq!(json["stockQuantity"], 100);
        assert_eq!(json["category"], "Mugs");
        assert!(json.get("images").is_none());
    }

    #[test]
    fn test_matches_lowercase() {
        let mut product = Product::new("phone-cover-1", "Phone Cover", Money::usd(18), Category::PhoneCovers);
        product.description = "Minimalist phone case".to_string();

        assert!(product.matches_lowercase("cover"));
        assert!(product.matches_lowercase("minimalist"));
        assert!(product.matches_lowercase("phone covers"));
        assert!(!product.matches_lowercase("mug"));
    }
}

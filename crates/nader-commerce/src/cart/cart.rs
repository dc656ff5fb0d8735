//! Cart and cart item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{self, Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A product and how many of it are in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Quantity, always positive inside a [`Cart`].
    pub quantity: i64,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}

/// A shopping cart.
///
/// `total` and `item_count` are derived from `items` and can't be set on
/// their own: every constructor folds over the full item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "CartSnapshot", from = "CartSnapshot")]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
    item_count: i64,
}

impl Cart {
    /// The empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(Currency::default()),
            item_count: 0,
        }
    }

    /// Build a cart from items, recomputing the aggregates.
    ///
    /// Callers guarantee ids are unique and quantities positive.
    pub(crate) fn from_items(items: Vec<CartItem>) -> Self {
        let total = Money::sum(items.iter().map(CartItem::line_total), Currency::default());
        let item_count = items
            .iter()
            .fold(0_i64, |count, item| count.saturating_add(item.quantity));
        Self {
            items,
            total,
            item_count,
        }
    }

    /// Items, in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of line totals.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Quantity of a product, zero if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> i64 {
        self.get(product_id).map(|i| i.quantity).unwrap_or(0)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted form of a [`Cart`].
///
/// `{"items":[{"product":{..},"quantity":n}],"total":x,"itemCount":n}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    #[serde(with = "money::decimal", default)]
    pub total: Money,
    #[serde(default)]
    pub item_count: i64,
}

impl From<Cart> for CartSnapshot {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items,
            total: cart.total,
            item_count: cart.item_count,
        }
    }
}

impl From<CartSnapshot> for Cart {
    /// Normalizes the stored items and recomputes the aggregates.
    ///
    /// Duplicate product ids are merged, non-positive quantities and negative
    /// prices dropped, oversize quantities capped. Stored aggregates are only compared, never
    /// trusted.
    fn from(snapshot: CartSnapshot) -> Self {
        let mut items: Vec<CartItem> = Vec::with_capacity(snapshot.items.len());
        for item in snapshot.items {
            if item.quantity <= 0 {
                tracing::warn!(
                    product_id = %item.product.id,
                    quantity = item.quantity,
                    "dropping snapshot item with non-positive quantity"
                );
                continue;
            }
            if item.product.price.is_negative() {
                tracing::warn!(
                    product_id = %item.product.id,
                    price = %item.product.price,
                    "dropping snapshot item with negative price"
                );
                continue;
            }
            match items.iter_mut().find(|i| i.product.id == item.product.id) {
                Some(existing) => {
                    tracing::warn!(product_id = %item.product.id, "merging duplicate snapshot item");
                    existing.quantity = cap_quantity(existing.quantity.saturating_add(item.quantity));
                }
                None => items.push(CartItem {
                    quantity: cap_quantity(item.quantity),
                    ..item
                }),
            }
        }

        let cart = Cart::from_items(items);
        if cart.total != snapshot.total || cart.item_count != snapshot.item_count {
            tracing::warn!(
                stored_total = %snapshot.total,
                stored_item_count = snapshot.item_count,
                total = %cart.total,
                item_count = cart.item_count,
                "snapshot aggregates disagree with items; recomputed"
            );
        }
        cart
    }
}

/// Clamp a quantity to [`MAX_QUANTITY_PER_ITEM`].
pub(crate) fn cap_quantity(quantity: i64) -> i64 {
    if quantity > MAX_QUANTITY_PER_ITEM {
        tracing::debug!(quantity, max = MAX_QUANTITY_PER_ITEM, "quantity capped");
        MAX_QUANTITY_PER_ITEM
    } else {
        quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn mug() -> Product {
        Product::new("black-mug-1", "Black Mug", Money::usd(15), Category::Mugs)
    }

    fn bottle() -> Product {
        Product::new("insulated-bottle-1", "Insulated Bottle", Money::usd(25), Category::Bottles)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::usd(0));
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart, Cart::default());
    }

    #[test]
    fn test_from_items_aggregates() {
        let cart = Cart::from_items(vec![
            CartItem { product: mug(), quantity: 2 },
            CartItem { product: bottle(), quantity: 1 },
        ]);
        assert_eq!(cart.total(), Money::usd(55));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.quantity_of(&ProductId::new("black-mug-1")), 2);
        assert_eq!(cart.quantity_of(&ProductId::new("missing")), 0);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let cart = Cart::from_items(vec![CartItem { product: mug(), quantity: 3 }]);
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(json["total"], 45);
        assert_eq!(json["itemCount"], 3);
        assert_eq!(json["items"][0]["quantity"], 3);
        assert_eq!(json["items"][0]["product"]["id"], "black-mug-1");
        assert_eq!(json["items"][0]["product"]["price"], 15);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let cart = Cart::from_items(vec![
            CartItem { product: mug(), quantity: 2 },
            CartItem { product: bottle(), quantity: 4 },
        ]);
        let text = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_snapshot_recomputes_bad_aggregates() {
        let text = r#"{
            "items": [{"product": {"id": "black-mug-1", "name": "Black Mug", "price": 15,
                       "category": "Mugs", "description": "", "image": "", "inStock": true},
                       "quantity": 2}],
            "total": 9999,
            "itemCount": 42
        }"#;
        let cart: Cart = serde_json::from_str(text).unwrap();
        assert_eq!(cart.total(), Money::usd(30));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_snapshot_normalizes_items() {
        let snapshot = CartSnapshot {
            items: vec![
                CartItem { product: mug(), quantity: 2 },
                CartItem { product: bottle(), quantity: 0 },
                CartItem { product: mug(), quantity: 3 },
            ],
            total: Money::default(),
            item_count: 0,
        };
        let cart = Cart::from(snapshot);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("black-mug-1")), 5);
        assert_eq!(cart.total(), Money::usd(75));
    }

    #[test]
    fn test_snapshot_drops_negative_prices() {
        let text = r#"{
            "items": [
                {"product": {"id": "black-mug-1", "name": "Black Mug", "price": 15,
                             "category": "Mugs", "description": "", "image": "", "inStock": true},
                 "quantity": 1},
                {"product": {"id": "refund-1", "name": "Refund", "price": -40,
                             "category": "Mugs", "description": "", "image": "", "inStock": true},
                 "quantity": 1}
            ],
            "total": -25,
            "itemCount": 2
        }"#;
        let cart: Cart = serde_json::from_str(text).unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total(), Money::usd(15));
    }

    #[test]
    fn test_snapshot_missing_aggregates() {
        let text = r#"{"items": []}"#;
        let cart: Cart = serde_json::from_str(text).unwrap();
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_cap_quantity() {
        assert_eq!(cap_quantity(5), 5);
        assert_eq!(cap_quantity(MAX_QUANTITY_PER_ITEM + 1), MAX_QUANTITY_PER_ITEM);
    }
}

//! Cart actions and the pure reducer over them.

use crate::cart::cart::cap_quantity;
use crate::cart::{Cart, CartItem};
use crate::catalog::Product;
use crate::ids::ProductId;

/// A change to the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add `quantity` of a product, merging with an existing item.
    Add { product: Product, quantity: i64 },
    /// Drop a product's item.
    Remove { product_id: ProductId },
    /// Set a product's quantity; `<= 0` removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
    /// Replace the cart with a previously persisted one.
    LoadSnapshot(Cart),
}

/// Apply an action, producing a new cart.
///
/// Unknown product ids and non-positive add quantities leave the cart as is.
pub fn reduce(cart: &Cart, action: CartAction) -> Cart {
    match action {
        CartAction::Add { product, quantity } => {
            if quantity <= 0 {
                tracing::warn!(product_id = %product.id, quantity, "ignoring non-positive add");
                return cart.clone();
            }

            let mut items = cart.items().to_vec();
            match items.iter_mut().find(|i| i.product.id == product.id) {
                Some(existing) => {
                    existing.quantity = cap_quantity(existing.quantity.saturating_add(quantity));
                }
                None => items.push(CartItem {
                    product,
                    quantity: cap_quantity(quantity),
                }),
            }
            Cart::from_items(items)
        }

        CartAction::Remove { product_id } => Cart::from_items(
            cart.items()
                .iter()
                .filter(|i| i.product.id != product_id)
                .cloned()
                .collect(),
        ),

        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if quantity <= 0 {
                return reduce(cart, CartAction::Remove { product_id });
            }

            let items = cart
                .items()
                .iter()
                .cloned()
                .map(|mut item| {
                    if item.product.id == product_id {
                        item.quantity = cap_quantity(quantity);
                    }
                    item
                })
                .collect();
            Cart::from_items(items)
        }

        CartAction::Clear => Cart::new(),

        CartAction::LoadSnapshot(snapshot) => snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MAX_QUANTITY_PER_ITEM;
    use crate::catalog::Category;
    use crate::money::Money;

    fn mug() -> Product {
        Product::new("black-mug-1", "Black Mug", Money::usd(15), Category::Mugs)
    }

    fn hoodie() -> Product {
        Product::new("luxury-hoodie-1", "Premium Hoodie", Money::usd(65), Category::Clothes)
    }

    fn add(cart: &Cart, product: Product, quantity: i64) -> Cart {
        reduce(cart, CartAction::Add { product, quantity })
    }

    fn mug_id() -> ProductId {
        ProductId::new("black-mug-1")
    }

    #[test]
    fn test_add_appends_in_order() {
        let cart = add(&Cart::new(), mug(), 1);
        let cart = add(&cart, hoodie(), 1);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["black-mug-1", "luxury-hoodie-1"]);
        assert_eq!(cart.total(), Money::usd(80));
    }

    #[test]
    fn test_add_same_product_merges() {
        let cart = add(&Cart::new(), mug(), 2);
        let cart = add(&cart, mug(), 3);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&mug_id()), 5);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Money::usd(75));
    }

    #[test]
    fn test_add_non_positive_is_noop() {
        let cart = add(&Cart::new(), mug(), 1);
        assert_eq!(add(&cart, hoodie(), 0), cart);
        assert_eq!(add(&cart, mug(), -4), cart);
    }

    #[test]
    fn test_add_caps_quantity() {
        let cart = add(&Cart::new(), mug(), MAX_QUANTITY_PER_ITEM);
        let cart = add(&cart, mug(), 10);
        assert_eq!(cart.quantity_of(&mug_id()), MAX_QUANTITY_PER_ITEM);

        let cart = add(&Cart::new(), mug(), i64::MAX);
        assert_eq!(cart.quantity_of(&mug_id()), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let cart = add(&add(&Cart::new(), mug(), 2), hoodie(), 1);
        let once = reduce(&cart, CartAction::Remove { product_id: mug_id() });
        let twice = reduce(&once, CartAction::Remove { product_id: mug_id() });

        assert_eq!(once, twice);
        assert_eq!(once.item_count(), 1);
        assert_eq!(once.total(), Money::usd(65));
    }

    #[test]
    fn test_update_non_positive_equals_remove() {
        let cart = add(&add(&Cart::new(), mug(), 2), hoodie(), 1);
        let removed = reduce(&cart, CartAction::Remove { product_id: mug_id() });

        for quantity in [0, -5] {
            let updated = reduce(
                &cart,
                CartAction::UpdateQuantity {
                    product_id: mug_id(),
                    quantity,
                },
            );
            assert_eq!(updated, removed);
        }
    }

    #[test]
    fn test_update_sets_quantity() {
        let cart = add(&Cart::new(), mug(), 3);
        let cart = reduce(
            &cart,
            CartAction::UpdateQuantity {
                product_id: mug_id(),
                quantity: 7,
            },
        );
        assert_eq!(cart.quantity_of(&mug_id()), 7);
        assert_eq!(cart.total(), Money::usd(105));
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let cart = add(&Cart::new(), mug(), 3);
        let updated = reduce(
            &cart,
            CartAction::UpdateQuantity {
                product_id: ProductId::new("nope"),
                quantity: 9,
            },
        );
        assert_eq!(updated, cart);
    }

    #[test]
    fn test_clear() {
        let cart = add(&add(&Cart::new(), mug(), 2), hoodie(), 1);
        let cleared = reduce(&cart, CartAction::Clear);
        assert_eq!(cleared, Cart::new());
        assert_eq!(cleared.total(), Money::usd(0));
        assert_eq!(cleared.item_count(), 0);
    }

    #[test]
    fn test_load_snapshot_replaces() {
        let current = add(&Cart::new(), hoodie(), 1);
        let stored = add(&Cart::new(), mug(), 4);
        assert_eq!(reduce(&current, CartAction::LoadSnapshot(stored.clone())), stored);
    }
}

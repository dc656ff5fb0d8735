//! The cart store: owner of the live cart and its persisted snapshot.

use crate::cart::{reduce, Cart, CartAction};
use crate::catalog::Product;
use crate::ids::ProductId;
use nader_cache::{Cache, CacheError, KeyValueStore};

/// Storage key of the persisted cart snapshot.
pub const CART_STORAGE_KEY: &str = "nader-cart";

/// Lifecycle phase of a [`CartStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorePhase {
    /// The startup load hasn't completed; mutations aren't persisted.
    Loading,
    /// Every mutation is persisted.
    Ready,
}

/// Owns the authoritative [`Cart`] and keeps durable storage in step with it.
///
/// Constructed once at startup and handed to consumers by reference. Starts
/// in [`StorePhase::Loading`] with an empty cart; [`CartStore::load`] (or the
/// split [`read_snapshot`](CartStore::read_snapshot) /
/// [`finish_load`](CartStore::finish_load) pair) moves it to
/// [`StorePhase::Ready`] exactly once.
///
/// If the cart was mutated while loading, the in-memory cart wins over the
/// stored snapshot and is written out as soon as the store becomes ready.
///
/// ```rust
/// use nader_cache::MemoryStore;
/// use nader_commerce::cart::CartStore;
/// use nader_commerce::catalog::Catalog;
/// use nader_commerce::ids::ProductId;
///
/// let catalog = Catalog::builtin();
/// let mug = catalog.get(&ProductId::new("black-mug-1")).unwrap();
///
/// let mut store = CartStore::new(MemoryStore::new());
/// store.load();
/// store.add_to_cart(mug, 2);
/// assert_eq!(store.cart().item_count(), 2);
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    cache: Cache<S>,
    key: String,
    cart: Cart,
    phase: StorePhase,
    mutated_while_loading: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store persisting under [`CART_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Create a store persisting under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
            cart: Cart::new(),
            phase: StorePhase::Loading,
            mutated_while_loading: false,
        }
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current phase.
    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    /// True until the startup load has completed.
    pub fn is_loading(&self) -> bool {
        self.phase == StorePhase::Loading
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage backend.
    pub fn backend(&self) -> &S {
        self.cache.store()
    }

    /// Read and complete the startup load in one step.
    pub fn load(&mut self) -> &Cart {
        let snapshot = self.read_snapshot();
        self.finish_load(snapshot)
    }

    /// Fetch the persisted snapshot without touching store state.
    pub fn read_snapshot(&self) -> Result<Option<Cart>, CacheError> {
        self.cache.get::<Cart>(&self.key)
    }

    /// Apply the result of [`read_snapshot`](Self::read_snapshot) and become ready.
    ///
    /// Read and parse failures fall back to the in-memory cart and are only
    /// logged. Calling this again once ready does nothing.
    pub fn finish_load(&mut self, snapshot: Result<Option<Cart>, CacheError>) -> &Cart {
        if self.phase == StorePhase::Ready {
            tracing::warn!(key = %self.key, "cart load already completed; ignoring");
            return &self.cart;
        }

        match snapshot {
            Ok(Some(stored)) if self.mutated_while_loading => {
                tracing::warn!(
                    key = %self.key,
                    discarded_items = stored.unique_item_count(),
                    "cart changed while loading; keeping in-memory cart"
                );
            }
            Ok(Some(stored)) => {
                tracing::debug!(
                    key = %self.key,
                    item_count = stored.item_count(),
                    "restored persisted cart"
                );
                self.cart = reduce(&self.cart, CartAction::LoadSnapshot(stored));
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no persisted cart");
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to load persisted cart");
            }
        }

        self.phase = StorePhase::Ready;
        if self.mutated_while_loading {
            self.persist();
        }
        &self.cart
    }

    /// Add `quantity` of a product. Non-positive quantities are ignored.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> &Cart {
        self.dispatch(CartAction::Add {
            product: product.clone(),
            quantity,
        })
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Product) -> &Cart {
        self.add_to_cart(product, 1)
    }

    /// Remove a product. Absent products are a no-op.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> &Cart {
        self.dispatch(CartAction::Remove {
            product_id: product_id.clone(),
        })
    }

    /// Set a product's quantity; `<= 0` removes it.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> &Cart {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.clone(),
            quantity,
        })
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> &Cart {
        self.dispatch(CartAction::Clear)
    }

    fn dispatch(&mut self, action: CartAction) -> &Cart {
        self.cart = reduce(&self.cart, action);
        match self.phase {
            StorePhase::Loading => self.mutated_while_loading = true,
            StorePhase::Ready => self.persist(),
        }
        &self.cart
    }

    fn persist(&self) {
        match self.cache.set(&self.key, &self.cart) {
            Ok(()) => tracing::debug!(
                key = %self.key,
                item_count = self.cart.item_count(),
                "persisted cart"
            ),
            Err(e) => tracing::error!(key = %self.key, error = %e, "failed to persist cart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Money;
    use nader_cache::MemoryStore;

    fn mug() -> Product {
        Product::new("black-mug-1", "Black Mug", Money::usd(15), Category::Mugs)
    }

    #[test]
    fn test_starts_loading_and_empty() {
        let store = CartStore::new(MemoryStore::new());
        assert!(store.is_loading());
        assert_eq!(store.phase(), StorePhase::Loading);
        assert!(store.cart().is_empty());
        assert_eq!(store.key(), CART_STORAGE_KEY);
    }

    #[test]
    fn test_load_missing_becomes_ready() {
        let mut store = CartStore::new(MemoryStore::new());
        store.load();
        assert!(!store.is_loading());
        assert!(store.cart().is_empty());
        // nothing written just by loading
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_no_writes_while_loading() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_to_cart(&mug(), 2);
        assert_eq!(store.cart().item_count(), 2);
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_ready_mutation_persists() {
        let mut store = CartStore::new(MemoryStore::new());
        store.load();
        store.add_one(&mug());

        let stored: Cart = serde_json::from_str(
            &store.backend().get(CART_STORAGE_KEY).unwrap().unwrap(),
        )
        .unwrap();
        assert_eq!(&stored, store.cart());
    }

    #[test]
    fn test_finish_load_twice_is_ignored() {
        let mut store = CartStore::new(MemoryStore::new());
        store.load();
        store.add_one(&mug());

        let other: Cart = Cart::new();
        store.finish_load(Ok(Some(other)));
        assert_eq!(store.cart().item_count(), 1);
    }

    #[test]
    fn test_custom_key() {
        let mut store = CartStore::with_key(MemoryStore::new(), "cart:test");
        store.load();
        store.add_one(&mug());
        assert!(store.backend().exists("cart:test").unwrap());
        assert!(!store.backend().exists(CART_STORAGE_KEY).unwrap());
    }
}

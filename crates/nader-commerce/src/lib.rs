//! Storefront domain types and logic for NADER.
//!
//! - **Catalog**: Products, categories and the built-in product list
//! - **Cart**: The cart value, its reducer, and the persisted [`CartStore`](cart::CartStore)
//! - **Checkout**: Pricing, mock payments, orders
//! - **Search**: Filters, sorting, pagination over the catalog
//!
//! # Example
//!
//! ```rust
//! use nader_cache::MemoryStore;
//! use nader_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let mug = catalog.require(&ProductId::new("black-mug-1")).unwrap();
//!
//! let mut store = CartStore::new(MemoryStore::new());
//! store.load();
//! store.add_to_cart(mug, 3);
//!
//! assert_eq!(store.cart().item_count(), 3);
//! println!("Total: {}", store.cart().total().display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategorySummary, Product};

    // Cart
    pub use crate::cart::{reduce, Cart, CartAction, CartItem, CartStore, StorePhase};

    // Checkout
    pub use crate::checkout::{
        checkout, CheckoutPricing, CheckoutSettings, CustomerInfo, MockPaymentGateway, Order,
        OrderStatus, PaymentGateway, PaymentReceipt, PaymentStatus,
    };

    // Search
    pub use crate::search::{Filter, Pagination, SearchQuery, SearchResults, SortOption};
}

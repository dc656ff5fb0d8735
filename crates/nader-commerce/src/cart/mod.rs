//! Shopping cart module.
//!
//! Contains the cart value, the reducer that transforms it, and the store
//! that owns and persists it.

mod action;
mod cart;
mod store;

pub use action::{reduce, CartAction};
pub use cart::{Cart, CartItem, CartSnapshot, MAX_QUANTITY_PER_ITEM};
pub use store::{CartStore, StorePhase, CART_STORAGE_KEY};

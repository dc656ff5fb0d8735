//! Durable key-value storage for the NADER storefront.
//!
//! Provides a raw string [`KeyValueStore`] (the storefront's local durable
//! storage) and a typed [`Cache`] with automatic JSON serialization on top.
//!
//! # Example
//!
//! ```rust
//! use nader_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<String>,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("nader-cart", &Cart { items: vec![] }).unwrap();
//!
//! // Retrieve a value
//! let cart: Option<Cart> = cache.get("nader-cart").unwrap();
//! assert!(cart.is_some());
//!
//! // Delete a value
//! cache.delete("nader-cart").unwrap();
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}

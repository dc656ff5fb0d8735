//! Product catalog module.
//!
//! Contains the product type, categories, and the static catalog.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::{Category, CategorySummary};
pub use product::Product;

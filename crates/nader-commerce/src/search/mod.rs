//! Search module.
//!
//! Filters, sorting and pagination over the in-memory catalog.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{SearchQuery, SortOption};
pub use results::{Pagination, SearchResults};

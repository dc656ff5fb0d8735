//! Search query builder.

use crate::catalog::{Catalog, Category, Product};
use crate::search::{Filter, Pagination, SearchResults};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }

    /// Stable in-place sort; ties keep catalog order.
    fn apply(&self, products: &mut [&Product]) {
        match self {
            SortOption::Featured => {}
            SortOption::PriceAsc => products.sort_by_key(|p| p.price.amount_cents),
            SortOption::PriceDesc => {
                products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
            }
            SortOption::NameAsc => products.sort_by_key(|p| p.name.to_lowercase()),
            SortOption::NameDesc => {
                products.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
            }
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "featured" => Ok(SortOption::Featured),
            "price-asc" => Ok(SortOption::PriceAsc),
            "price-desc" => Ok(SortOption::PriceDesc),
            "name-asc" => Ok(SortOption::NameAsc),
            "name-desc" => Ok(SortOption::NameDesc),
            other => Err(format!("unknown sort option: {}", other)),
        }
    }
}

/// A catalog search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text query, kept for display.
    pub query: Option<String>,
    /// Filters to apply (all must match).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::Featured,
            page: 1,
            per_page: 24,
        }
    }

    /// Set the text query. Blank queries are ignored.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Restrict to a category.
    pub fn with_category(self, category: Category) -> Self {
        self.with_filter(Filter::Category(category))
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Calculate the offset of the first item on the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Run against a catalog.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> SearchResults<&'a Product> {
        let mut matched: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .collect();
        self.sort.apply(&mut matched);

        let total = matched.len() as i64;
        let items = matched
            .into_iter()
            .skip(usize::try_from(self.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(self.per_page).unwrap_or(0))
            .collect();

        SearchResults::new(items, Pagination::new(self.page, self.per_page, total))
    }
}

//! Product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The storefront's product categories.
///
/// Serialized as the display name. Names outside the storefront set load as
/// [`Category::Other`], so a stored product never fails on its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Clothes,
    Mugs,
    Bottles,
    Notebooks,
    PhoneCovers,
    Other(String),
}

impl Category {
    /// Every category, in storefront order.
    pub const ALL: [Category; 5] = [
        Category::Clothes,
        Category::Mugs,
        Category::Bottles,
        Category::Notebooks,
        Category::PhoneCovers,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Clothes => "Clothes",
            Category::Mugs => "Mugs",
            Category::Bottles => "Bottles",
            Category::Notebooks => "Notebooks",
            Category::PhoneCovers => "Phone Covers",
            Category::Other(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or(Category::Other(name))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    /// Case-insensitive; accepts `phone-covers` and `phone_covers` too.
    /// Only the storefront categories parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == normalized)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

/// A category with the number of products in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
}

//! Browse query vocabulary: filters and orderings a visitor can apply.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, DomainResult};

use crate::product::Product;

/// Upper price bound applied when the visitor has not narrowed the range.
pub const DEFAULT_PRICE_CEILING: f64 = 5000.0;

/// Facet selection: everything, or exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a product's facet value satisfies this selection.
    ///
    /// `All` admits everything, including products that carry no value at all;
    /// `Only` requires an exact match.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::All
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::validation("price bounds must be finite"));
        }
        if min < 0.0 {
            return Err(DomainError::validation("price minimum cannot be negative"));
        }
        if min > max {
            return Err(DomainError::validation(format!(
                "price minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Both bounds are inclusive, so a product priced exactly at either edge
    /// stays in.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order, exactly as fetched.
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Default
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            other => Err(DomainError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

/// Everything a visitor can narrow and order the listing by.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrowseQuery {
    /// Case-insensitive substring matched against titles. Empty matches all.
    pub search: String,
    pub category: Selection,
    pub brand: Selection,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl BrowseQuery {
    /// Whether a product survives the filter half of the query (sort aside).
    /// All four conditions must hold.
    pub fn matches(&self, product: &Product) -> bool {
        product
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.category.admits(Some(&product.category))
            && self.brand.admits(product.brand.as_deref())
            && self.price.contains(product.price)
    }
}

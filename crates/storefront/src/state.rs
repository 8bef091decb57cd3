//! Screen state shared by storefront views.

use chrono::{DateTime, Utc};

use vitrine_catalog::Product;

/// What a screen knows about the data it fetches.
///
/// Exactly one variant holds at a time; there is no stale-data-plus-error
/// combination. `Failed` keeps only the message the visitor sees, because the
/// typed error was already logged where the fetch happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// A fetch is in flight. Also the state before the first fetch lands.
    Loading,
    /// The last fetch failed; the payload is the visitor-facing message.
    Failed(String),
    /// The last fetch landed.
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A successfully fetched catalog plus when it landed.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn now(products: Vec<Product>) -> Self {
        Self {
            products,
            fetched_at: Utc::now(),
        }
    }
}

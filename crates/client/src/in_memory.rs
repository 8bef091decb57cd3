//! In-memory catalog provider for demos and tests.

use vitrine_catalog::{unique_categories, Product};

use crate::error::FetchError;
use crate::provider::ProductProvider;

/// Provider backed by a fixed product list, with an optional scripted failure.
///
/// Category fetches filter the fixed list by exact category name, matching
/// what the real API does server-side.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    failure: Option<FetchError>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            failure: None,
        }
    }

    /// Provider whose every fetch fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            products: Vec::new(),
            failure: Some(error),
        }
    }

    fn check(&self) -> Result<(), FetchError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ProductProvider for InMemoryCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        self.check()?;
        Ok(self.products.clone())
    }

    async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.check()?;
        Ok(unique_categories(&self.products))
    }
}

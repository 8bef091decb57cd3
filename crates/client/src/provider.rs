use std::sync::Arc;

use vitrine_catalog::Product;

use crate::error::FetchError;

/// Read-only access to the published product catalog.
///
/// Implementations decide where products come from; callers only see the
/// three fetches the storefront needs. No implementation applies timeouts or
/// retries on its own, so a call reflects exactly one attempt.
#[async_trait::async_trait]
pub trait ProductProvider: Send + Sync {
    /// Fetch the whole catalog.
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the products of one category, matched exactly by name.
    async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, FetchError>;

    /// Fetch the list of category names the catalog is organized into.
    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError>;
}

#[async_trait::async_trait]
impl<P> ProductProvider for Arc<P>
where
    P: ProductProvider + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_all().await
    }

    async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_category(category).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        (**self).fetch_categories().await
    }
}

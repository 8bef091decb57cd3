//! The single-category screen: fetch one category server-side, order locally.

use vitrine_catalog::{browse, Product, SortKey};
use vitrine_client::ProductProvider;

use crate::memo::Memo;
use crate::state::ViewState;

/// Shown when the category cannot be fetched and the server offered no better
/// explanation.
pub const FETCH_FAILED_FALLBACK: &str = "Failed to fetch products. Please try again.";

/// Shown when the category exists but holds nothing.
pub const NO_PRODUCTS_IN_CATEGORY: &str = "No products found in this category.";

/// State of the category screen.
///
/// Narrower than the products screen: the category is fixed per fetch, there
/// is no pagination, and the only local input is the ordering.
#[derive(Debug)]
pub struct CategoryView<P> {
    provider: P,
    category: String,
    sort: SortKey,
    state: ViewState<Vec<Product>>,
    /// Bumped on each successful fetch so the derivation key changes even
    /// when the ordering does not.
    generation: u64,
    derived: Memo<(SortKey, u64), Vec<Product>>,
}

impl<P: ProductProvider> CategoryView<P> {
    pub fn new(provider: P, category: impl Into<String>) -> Self {
        Self {
            provider,
            category: category.into(),
            sort: SortKey::Default,
            state: ViewState::Loading,
            generation: 0,
            derived: Memo::new(),
        }
    }

    /// Fetch the category's products, replacing whatever state the screen was
    /// in.
    pub async fn load(&mut self) {
        self.state = ViewState::Loading;
        match self.provider.fetch_category(&self.category).await {
            Ok(products) => {
                tracing::info!(category = %self.category, count = products.len(), "category loaded");
                self.generation += 1;
                self.state = ViewState::Ready(products);
            }
            Err(err) => {
                tracing::warn!(category = %self.category, error = %err, "category fetch failed");
                let message = err
                    .server_message()
                    .unwrap_or(FETCH_FAILED_FALLBACK)
                    .to_string();
                self.state = ViewState::Failed(message);
            }
        }
    }

    /// Run the fetch again, exactly like the first attempt.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Point the screen at another category and fetch it. The ordering
    /// carries over.
    pub async fn show_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.load().await;
    }

    /// Change the ordering. Purely local, no refetch.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// The ordered product list, or `None` while loading or failed.
    pub fn products(&mut self) -> Option<&[Product]> {
        let fetched = self.state.ready()?;
        let sort = self.sort;
        self.derived.ensure((sort, self.generation), || {
            let mut listing = fetched.clone();
            browse::sort(&mut listing, sort);
            listing
        });
        self.derived.value().map(Vec::as_slice)
    }
}

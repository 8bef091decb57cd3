//! The all-products screen: fetch once, then narrow, order, and paginate.

use vitrine_catalog::{
    derive, paginate, unique_brands, unique_categories, BrowseQuery, Page, PriceRange, Product,
    Selection, SortKey, DEFAULT_PAGE_SIZE,
};
use vitrine_client::ProductProvider;
use vitrine_core::{DomainError, DomainResult};

use crate::memo::Memo;
use crate::state::{CatalogSnapshot, ViewState};

/// Shown when the catalog cannot be fetched and the server offered no better
/// explanation.
pub const LOAD_FAILED_FALLBACK: &str = "Failed to load products. Please try again.";

/// Shown when the visitor's query matches nothing.
pub const NO_MATCHES: &str = "No products found matching your criteria";

/// State of the all-products screen.
///
/// The fetched catalog is authoritative; the visible listing is derived from
/// it on demand and never stored on its own. Query edits are instant and
/// local, only `load`/`retry` touch the provider.
#[derive(Debug)]
pub struct ProductsView<P> {
    provider: P,
    state: ViewState<CatalogSnapshot>,
    query: BrowseQuery,
    /// 1-based page the visitor is on. Deliberately not re-clamped when a
    /// query edit shrinks the listing, so a stale page renders empty rather
    /// than jumping elsewhere.
    page: usize,
    /// Bumped on each successful fetch so the derivation key changes even
    /// when the query does not.
    generation: u64,
    derived: Memo<(BrowseQuery, u64), Vec<Product>>,
}

impl<P: ProductProvider> ProductsView<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: ViewState::Loading,
            query: BrowseQuery::default(),
            page: 1,
            generation: 0,
            derived: Memo::new(),
        }
    }

    /// Fetch the whole catalog, replacing whatever state the screen was in.
    pub async fn load(&mut self) {
        self.state = ViewState::Loading;
        match self.provider.fetch_all().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.generation += 1;
                self.state = ViewState::Ready(CatalogSnapshot::now(products));
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed");
                let message = err
                    .server_message()
                    .unwrap_or(LOAD_FAILED_FALLBACK)
                    .to_string();
                self.state = ViewState::Failed(message);
            }
        }
    }

    /// Run the fetch again, exactly like the first attempt.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Update the title search. Keeps the current page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Select a category. Resets to the first page.
    pub fn set_category(&mut self, category: Selection) {
        self.query.category = category;
        self.page = 1;
    }

    /// Select a brand. Resets to the first page.
    pub fn set_brand(&mut self, brand: Selection) {
        self.query.brand = brand;
        self.page = 1;
    }

    /// Update the price bounds. Keeps the current page.
    pub fn set_price_range(&mut self, price: PriceRange) {
        self.query.price = price;
    }

    /// Change the ordering. Keeps the current page.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Jump to a 1-based page. Pages past the end are accepted and render
    /// empty; zero is not a page.
    pub fn set_page(&mut self, page: usize) -> DomainResult<()> {
        if page == 0 {
            return Err(DomainError::validation("pages are numbered from 1"));
        }
        self.page = page;
        Ok(())
    }

    pub fn query(&self) -> &BrowseQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        self.state.ready()
    }

    /// Category picker values, from the unfiltered catalog in first-appearance
    /// order.
    pub fn categories(&self) -> Vec<String> {
        self.state
            .ready()
            .map(|s| unique_categories(&s.products))
            .unwrap_or_default()
    }

    /// Brand picker values, from the unfiltered catalog.
    pub fn brands(&self) -> Vec<String> {
        self.state
            .ready()
            .map(|s| unique_brands(&s.products))
            .unwrap_or_default()
    }

    /// The page of products the visitor currently sees.
    ///
    /// `None` while loading or failed. `total` on the returned page is the
    /// match count before pagination, so an out-of-range page comes back with
    /// empty `items` but a non-zero `total`.
    pub fn visible(&mut self) -> Option<Page<'_, Product>> {
        let snapshot = self.state.ready()?;
        let key = (self.query.clone(), self.generation);
        let products = &snapshot.products;
        let query = &self.query;
        self.derived.ensure(key, || derive(products, query));
        let listing = self.derived.value()?;
        Some(paginate(listing, self.page, DEFAULT_PAGE_SIZE))
    }
}

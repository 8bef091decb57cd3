//! `vitrine-storefront` — screen state for browsing the catalog.
//!
//! Views own a provider plus the visitor's inputs and derive everything else.
//! No rendering happens here; the binary (or any other shell) decides how to
//! paint a page of products.

pub mod category;
pub mod memo;
pub mod products;
pub mod state;

pub use category::{CategoryView, FETCH_FAILED_FALLBACK, NO_PRODUCTS_IN_CATEGORY};
pub use memo::Memo;
pub use products::{ProductsView, LOAD_FAILED_FALLBACK, NO_MATCHES};
pub use state::{CatalogSnapshot, ViewState};

//! `vitrine-client` — access to the published product catalog.
//!
//! The [`ProductProvider`] trait is the seam between screens and transport:
//! [`FakeStore`] talks to the real API over HTTP, [`InMemoryCatalog`] serves a
//! fixed list for demos and tests.

pub mod error;
pub mod fake_store;
pub mod in_memory;
pub mod provider;

pub use error::FetchError;
pub use fake_store::{DEFAULT_BASE_URL, FakeStore};
pub use in_memory::InMemoryCatalog;
pub use provider::ProductProvider;

//! `vitrine-catalog` — catalog domain model and pure browse derivation.
//!
//! Everything in this crate is deterministic and IO-free: products arrive as
//! plain data, queries narrow and order them, pages slice the result. Fetching
//! lives in `vitrine-client`; screen state lives in `vitrine-storefront`.

pub mod browse;
pub mod page;
pub mod product;
pub mod query;

pub use browse::{derive, unique_brands, unique_categories};
pub use page::{DEFAULT_PAGE_SIZE, Page, page_count, page_slice, paginate};
pub use product::{Product, Rating};
pub use query::{BrowseQuery, PriceRange, Selection, SortKey, DEFAULT_PRICE_CEILING};

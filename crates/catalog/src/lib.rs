//! Catalog domain: the immutable product store and the pure view filter.
//!
//! `store` loads the static data source once and is read-only afterwards;
//! `view` computes the visible product list for the current category, search
//! query and sort key. Neither performs any rendering.

pub mod product;
pub mod store;
pub mod view;

pub use product::{CategoryMeta, MediaRef, Product, DEFAULT_ACCENT};
pub use store::CatalogStore;
pub use view::{visible, SortKey};

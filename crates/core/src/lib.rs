//! `partshelf-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering
//! concerns): the shared error model and the strongly-typed keys that
//! identify categories and products.

pub mod error;
pub mod key;

pub use error::{CatalogError, CatalogResult};
pub use key::{CategoryKey, ProductKey};

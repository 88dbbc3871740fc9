//! Comparison domain: the category-locked selection and the side-by-side
//! table built from it.
//!
//! Business rules live here as deterministic domain logic (no IO, no
//! rendering): at most four products, all from one category, no duplicates.

pub mod selector;
pub mod table;

pub use selector::{AddOutcome, ComparisonSelector, SelectionEntry};
pub use table::{AttributeRow, ComparisonTable};

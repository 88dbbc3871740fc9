//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// `Load` is fatal for a browsing session; the selector rejections are
/// recoverable and leave selection state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The data source was unreachable or unparseable.
    #[error("failed to load catalog: {0}")]
    Load(String),

    /// A product from a different category than the current comparison
    /// selection was offered for comparison.
    #[error("comparison is locked to category '{locked}', cannot add '{attempted}'")]
    CrossCategory { locked: String, attempted: String },

    /// The comparison selection already holds the maximum number of entries.
    #[error("comparison holds the maximum of {limit} products")]
    LimitExceeded { limit: usize },
}

impl CatalogError {
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub fn cross_category(locked: impl Into<String>, attempted: impl Into<String>) -> Self {
        Self::CrossCategory {
            locked: locked.into(),
            attempted: attempted.into(),
        }
    }

    pub fn limit_exceeded(limit: usize) -> Self {
        Self::LimitExceeded { limit }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use partshelf_catalog::{MediaRef, Product};
use partshelf_core::{CatalogError, CatalogResult, CategoryKey, ProductKey};

/// Snapshot of a product's comparison-relevant fields.
///
/// Captured at the moment of selection. Not a live reference into the
/// catalog: a later catalog reload cannot change an in-progress comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    key: ProductKey,
    price: f64,
    description: String,
    details: String,
    media: Option<MediaRef>,
    selected_at: DateTime<Utc>,
}

impl SelectionEntry {
    fn snapshot(product: &Product) -> Self {
        Self {
            key: product.key(),
            price: product.price,
            description: product.description.clone(),
            details: product.details.clone(),
            media: product.media.clone(),
            selected_at: Utc::now(),
        }
    }

    pub fn key(&self) -> &ProductKey {
        &self.key
    }

    pub fn category(&self) -> &CategoryKey {
        self.key.category()
    }

    pub fn brand(&self) -> &str {
        self.key.brand()
    }

    pub fn name(&self) -> &str {
        self.key.name()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    pub fn selected_at(&self) -> DateTime<Utc> {
        self.selected_at
    }
}

/// Outcome of a successful [`ComparisonSelector::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was inserted.
    Added,
    /// The product was already selected; nothing changed.
    AlreadySelected,
}

/// The comparison selection: insertion-ordered, category-locked, capped.
///
/// Two implicit states: **empty** (any product may be added) and **non-empty**
/// (locked to the first entry's category). The lock is explicit state, set on
/// the first insert and cleared when the selection empties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSelector {
    entries: Vec<SelectionEntry>,
    locked_category: Option<CategoryKey>,
}

impl ComparisonSelector {
    /// Maximum number of products compared at once.
    pub const MAX_ENTRIES: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Try to add a product to the selection.
    ///
    /// Rejections leave the selection untouched:
    /// - a product from another category than the lock → `CrossCategory`;
    /// - a fifth distinct product → `LimitExceeded`.
    ///
    /// Re-adding an already selected product is a no-op success.
    pub fn add(&mut self, product: &Product) -> CatalogResult<AddOutcome> {
        if let Some(locked) = &self.locked_category {
            if locked != &product.category {
                return Err(CatalogError::cross_category(
                    locked.as_str(),
                    product.category.as_str(),
                ));
            }
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            return Err(CatalogError::limit_exceeded(Self::MAX_ENTRIES));
        }

        let key = product.key();
        if self.contains(&key) {
            return Ok(AddOutcome::AlreadySelected);
        }

        if self.locked_category.is_none() {
            self.locked_category = Some(product.category.clone());
            tracing::debug!(category = %product.category, "comparison locked to category");
        }
        self.entries.push(SelectionEntry::snapshot(product));
        tracing::debug!(product = %key, selected = self.entries.len(), "added to comparison");
        Ok(AddOutcome::Added)
    }

    /// Remove the entry with the given key. Returns whether one was removed;
    /// removing an absent key is a no-op. The category unlocks when the last
    /// entry goes.
    pub fn remove(&mut self, key: &ProductKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key() != key);
        let removed = self.entries.len() < before;
        if self.entries.is_empty() {
            self.locked_category = None;
        }
        removed
    }

    /// Empty the selection unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.locked_category = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The category the selection is locked to, if non-empty.
    pub fn locked_category(&self) -> Option<&CategoryKey> {
        self.locked_category.as_ref()
    }

    pub fn contains(&self, key: &ProductKey) -> bool {
        self.entries.iter().any(|entry| entry.key() == key)
    }

    /// Read-only view of the entries, in insertion order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Comparison requires at least two items.
    pub fn can_open_comparison(&self) -> bool {
        self.entries.len() >= 2
    }
}

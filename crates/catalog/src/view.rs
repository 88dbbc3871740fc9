//! Pure view filter: (products, active category, query, sort) → visible list.
//!
//! Safe to call on every keystroke; no side effects, no allocation beyond the
//! result vector.

use serde::{Deserialize, Serialize};

use partshelf_core::CategoryKey;

use crate::product::Product;

/// Ordering applied to the visible product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Placeholder ordering: preserves filter-input order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    BrandAsc,
    NameAsc,
}

impl SortKey {
    /// Map a UI sort key (`"price-asc"`, `"brand-asc"`, ...) to a `SortKey`.
    /// Unknown keys fall back to `Relevance`, like the original select handler.
    pub fn from_ui_key(key: &str) -> Self {
        match key {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "brand-asc" => Self::BrandAsc,
            "name-asc" => Self::NameAsc,
            _ => Self::Relevance,
        }
    }
}

/// Compute the ordered visible product list.
///
/// Filters to the active category, then (for a non-empty trimmed query) keeps
/// products whose combined text fields contain the query case-insensitively,
/// then applies a stable sort by the sort key.
pub fn visible<'a>(
    products: &'a [Product],
    active: &CategoryKey,
    query: &str,
    sort: SortKey,
) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();

    let mut list: Vec<&Product> = products
        .iter()
        .filter(|p| &p.category == active)
        .collect();

    if !query.is_empty() {
        list.retain(|p| searchable_text(p).contains(&query));
    }

    match sort {
        SortKey::Relevance => {}
        SortKey::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::BrandAsc => list.sort_by(|a, b| a.brand.cmp(&b.brand)),
        SortKey::NameAsc => list.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    list
}

/// Haystack for the substring search: name, brand, description and details
/// joined with single spaces, lowercased.
fn searchable_text(product: &Product) -> String {
    format!(
        "{} {} {} {}",
        product.name, product.brand, product.description, product.details
    )
    .to_lowercase()
}

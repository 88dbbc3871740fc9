//! Catalog store: one-time load of the static data source.
//!
//! The source document carries two top-level fields, `categories` and
//! `products`. Loading is lenient per record: a malformed product is skipped
//! with a diagnostic instead of failing the whole load. Only an unreadable or
//! unparseable document is fatal.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use partshelf_core::{CatalogError, CatalogResult, CategoryKey, ProductKey};

use crate::product::{CategoryMeta, MediaRef, Product};

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    categories: BTreeMap<String, RawCategoryMeta>,
    #[serde(default)]
    products: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCategoryMeta {
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    category: String,
    name: String,
    brand: String,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    details: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    media: Option<String>,
}

/// Immutable product catalog plus category display metadata.
///
/// Populated once at startup; read-only for the remainder of the process
/// lifetime. Categories iterate in sorted key order, so `first_category` is
/// deterministic regardless of document layout.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: BTreeMap<CategoryKey, CategoryMeta>,
}

impl CatalogStore {
    /// Load the catalog from a file on disk.
    pub fn load_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::load(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Load the catalog from an in-memory JSON document.
    pub fn from_json_str(text: &str) -> CatalogResult<Self> {
        let raw: RawDocument = serde_json::from_str(text)
            .map_err(|e| CatalogError::load(format!("malformed catalog document: {e}")))?;

        let mut products = Vec::with_capacity(raw.products.len());
        for (index, value) in raw.products.into_iter().enumerate() {
            match parse_record(value) {
                Ok(product) => products.push(product),
                Err(reason) => {
                    tracing::warn!(index, %reason, "skipping malformed product record");
                }
            }
        }

        let mut categories: BTreeMap<CategoryKey, CategoryMeta> = raw
            .categories
            .into_iter()
            .map(|(key, meta)| {
                let key = CategoryKey::new(key);
                let derived = CategoryMeta::derived(&key);
                let meta = CategoryMeta {
                    color: meta.color.filter(|c| !c.trim().is_empty()).unwrap_or(derived.color),
                    icon: meta.icon.filter(|i| !i.trim().is_empty()).unwrap_or(derived.icon),
                };
                (key, meta)
            })
            .collect();

        // Every category referenced by a product gets metadata, derived if
        // the document never declared it.
        for product in &products {
            if !categories.contains_key(&product.category) {
                tracing::debug!(category = %product.category, "deriving metadata for undeclared category");
                categories.insert(product.category.clone(), CategoryMeta::derived(&product.category));
            }
        }

        tracing::info!(
            categories = categories.len(),
            products = products.len(),
            "catalog loaded"
        );

        Ok(Self { products, categories })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &BTreeMap<CategoryKey, CategoryMeta> {
        &self.categories
    }

    pub fn category_meta(&self, key: &CategoryKey) -> Option<&CategoryMeta> {
        self.categories.get(key)
    }

    /// Category keys in sorted order.
    pub fn category_keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.categories.keys()
    }

    /// Default active category for a fresh session: first key in sorted order.
    pub fn first_category(&self) -> Option<&CategoryKey> {
        self.categories.keys().next()
    }

    /// Number of products per category (for chip badges).
    pub fn category_counts(&self) -> BTreeMap<&CategoryKey, usize> {
        let mut counts: BTreeMap<&CategoryKey, usize> =
            self.categories.keys().map(|k| (k, 0)).collect();
        for product in &self.products {
            *counts.entry(&product.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn find(&self, key: &ProductKey) -> Option<&Product> {
        self.products.iter().find(|p| &p.key() == key)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn parse_record(value: Value) -> Result<Product, String> {
    let raw: RawProduct =
        serde_json::from_value(value).map_err(|e| format!("invalid record: {e}"))?;

    if raw.category.trim().is_empty() {
        return Err("category cannot be empty".to_string());
    }
    if raw.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if raw.brand.trim().is_empty() {
        return Err("brand cannot be empty".to_string());
    }
    if !raw.price.is_finite() || raw.price < 0.0 {
        return Err(format!("price must be a non-negative number, got {}", raw.price));
    }

    Ok(Product {
        category: CategoryKey::new(raw.category),
        name: raw.name,
        brand: raw.brand,
        price: raw.price,
        description: raw.description,
        details: raw.details,
        media: media_ref(raw.image, raw.media),
    })
}

/// `image` takes precedence over inline `media`; inline markup must actually
/// look like SVG or it is dropped.
fn media_ref(image: Option<String>, media: Option<String>) -> Option<MediaRef> {
    if let Some(image) = image.filter(|i| !i.trim().is_empty()) {
        return Some(MediaRef::Image(image));
    }
    if let Some(media) = media {
        if media.trim().starts_with("<svg") {
            return Some(MediaRef::InlineSvg(media));
        }
        tracing::debug!("ignoring inline media that is not svg markup");
    }
    None
}

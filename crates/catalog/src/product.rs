use serde::{Deserialize, Serialize};

use partshelf_core::{CategoryKey, ProductKey};

/// Accent color used when neither the data source nor the category supplies one.
pub const DEFAULT_ACCENT: &str = "#6ee7ff";

/// Media attached to a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaRef {
    /// Locator for a raster image (local path, URL or data URI).
    Image(String),
    /// Inline vector markup shipped in the data source.
    InlineSvg(String),
}

/// A single catalog product.
///
/// Products are value data: loaded once, never mutated. Identity within the
/// catalog is the composite (category, brand, name) key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub category: CategoryKey,
    pub name: String,
    pub brand: String,
    /// Non-negative, finite. The loader rejects records violating this.
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub media: Option<MediaRef>,
}

impl Product {
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.category.clone(), self.brand.clone(), self.name.clone())
    }
}

/// Display attributes of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    /// CSS-color-like string for chips and placeholders.
    pub color: String,
    /// Short label shown where no product media exists.
    pub icon: String,
}

impl CategoryMeta {
    /// Fallback metadata for a category the data source left unspecified:
    /// the first three characters of the key (uppercased) as icon, the
    /// default accent as color.
    pub fn derived(key: &CategoryKey) -> Self {
        Self {
            color: DEFAULT_ACCENT.to_string(),
            icon: key.as_str().chars().take(3).collect::<String>().to_uppercase(),
        }
    }
}

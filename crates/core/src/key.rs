//! Strongly-typed keys used across the catalog domain.

use serde::{Deserialize, Serialize};

/// Key of a product category (e.g. "CPU", "GPU").
///
/// Categories scope both browsing and comparison: the visible product list is
/// always filtered to one category, and a comparison selection locks to the
/// category of its first entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CategoryKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Composite product identity: (category, brand, name).
///
/// Equality and hashing use the three fields directly. The colon-joined
/// `category:brand:name` form exists only in `Display`, for logs and UI —
/// it is ambiguous when a field itself contains a colon, so it must never be
/// parsed back into a key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductKey {
    category: CategoryKey,
    brand: String,
    name: String,
}

impl ProductKey {
    pub fn new(
        category: impl Into<CategoryKey>,
        brand: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            brand: brand.into(),
            name: name.into(),
        }
    }

    pub fn category(&self) -> &CategoryKey {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}:{}", self.category, self.brand, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_key_equality_is_field_wise() {
        let a = ProductKey::new("CPU", "AMD", "Ryzen 5");
        let b = ProductKey::new("CPU", "AMD", "Ryzen 5");
        let c = ProductKey::new("CPU", "Intel", "Ryzen 5");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_is_colon_joined() {
        let key = ProductKey::new("GPU", "NVIDIA", "RTX");
        assert_eq!(key.to_string(), "GPU:NVIDIA:RTX");
    }

    #[test]
    fn embedded_colons_do_not_collide() {
        // Same Display rendering, distinct keys.
        let a = ProductKey::new("CPU", "A:B", "C");
        let b = ProductKey::new("CPU", "A", "B:C");
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);
    }
}

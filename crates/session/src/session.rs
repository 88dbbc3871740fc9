use partshelf_catalog::{visible, CatalogStore, Product, SortKey};
use partshelf_compare::{AddOutcome, ComparisonSelector, ComparisonTable};
use partshelf_core::{CatalogResult, CategoryKey, ProductKey};

/// What a compare-checkbox toggle ended up doing.
///
/// The renderer re-syncs the checkbox from `selection()` afterwards, so a
/// rejected or redundant toggle shows up as `Unchanged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Unchanged,
}

/// One user's browsing state over a loaded catalog.
///
/// Constructed only from a successfully loaded store: a failed load is
/// terminal for the session, and no partial state exists to render.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    store: CatalogStore,
    active_category: Option<CategoryKey>,
    query: String,
    sort: SortKey,
    selector: ComparisonSelector,
}

impl BrowseSession {
    /// Start a session over a loaded catalog. The active category defaults
    /// to the store's first category (sorted order); sort to relevance.
    pub fn new(store: CatalogStore) -> Self {
        let active_category = store.first_category().cloned();
        Self {
            store,
            active_category,
            query: String::new(),
            sort: SortKey::default(),
            selector: ComparisonSelector::new(),
        }
    }

    // --- event surface driven by the renderer ---

    pub fn on_search_changed(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn on_sort_changed(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Switch the active category. Selections are category-scoped, so any
    /// in-progress comparison is dropped. Unknown keys are ignored.
    pub fn on_category_changed(&mut self, key: &CategoryKey) {
        if self.store.category_meta(key).is_none() {
            tracing::debug!(category = %key, "ignoring switch to unknown category");
            return;
        }
        if !self.selector.is_empty() {
            tracing::debug!(
                dropped = self.selector.len(),
                category = %key,
                "category switch cleared the comparison selection"
            );
        }
        self.active_category = Some(key.clone());
        self.selector.clear();
    }

    /// Route a compare-checkbox toggle to the selector.
    ///
    /// A key that no longer resolves to a product is a no-op success, like
    /// the original's lookup miss. Selector rejections pass through for the
    /// renderer to surface as a notice.
    pub fn on_compare_toggle(
        &mut self,
        key: &ProductKey,
        want_add: bool,
    ) -> CatalogResult<ToggleOutcome> {
        if !want_add {
            let removed = self.selector.remove(key);
            return Ok(if removed {
                ToggleOutcome::Removed
            } else {
                ToggleOutcome::Unchanged
            });
        }

        let Some(product) = self.store.find(key) else {
            tracing::debug!(product = %key, "compare toggle for unknown product");
            return Ok(ToggleOutcome::Unchanged);
        };
        let product = product.clone();

        match self.selector.add(&product)? {
            AddOutcome::Added => Ok(ToggleOutcome::Added),
            AddOutcome::AlreadySelected => Ok(ToggleOutcome::Unchanged),
        }
    }

    pub fn on_compare_clear(&mut self) {
        self.selector.clear();
    }

    /// Build the comparison table, or `None` while fewer than two products
    /// are selected (the open button stays disabled).
    pub fn open_comparison(&self) -> Option<ComparisonTable> {
        if !self.selector.can_open_comparison() {
            return None;
        }
        ComparisonTable::from_entries(self.selector.entries())
    }

    // --- queries for the renderer ---

    /// The ordered visible product list for the current category, query and
    /// sort. Empty when the catalog has no categories at all.
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.active_category {
            Some(active) => visible(self.store.products(), active, &self.query, self.sort),
            None => Vec::new(),
        }
    }

    pub fn active_category(&self) -> Option<&CategoryKey> {
        self.active_category.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn selection(&self) -> &ComparisonSelector {
        &self.selector
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r##"{
        "categories": {
            "CPU": { "color": "#f59e0b", "icon": "CPU" },
            "GPU": { "color": "#22d3ee", "icon": "GPU" }
        },
        "products": [
            { "category": "CPU", "name": "Ryzen 5", "brand": "AMD", "price": 200 },
            { "category": "CPU", "name": "i5", "brand": "Intel", "price": 180 },
            { "category": "CPU", "name": "i7", "brand": "Intel", "price": 300 },
            { "category": "GPU", "name": "RTX", "brand": "NVIDIA", "price": 500 }
        ]
    }"##;

    fn session() -> BrowseSession {
        BrowseSession::new(CatalogStore::from_json_str(DOC).unwrap())
    }

    #[test]
    fn fresh_session_defaults() {
        let session = session();
        assert_eq!(session.active_category().unwrap().as_str(), "CPU");
        assert_eq!(session.sort(), SortKey::Relevance);
        assert_eq!(session.query(), "");
        assert!(session.selection().is_empty());
    }

    #[test]
    fn search_and_sort_shape_the_visible_list() {
        let mut session = session();
        session.on_sort_changed(SortKey::PriceAsc);
        let names: Vec<&str> = session.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["i5", "Ryzen 5", "i7"]);

        session.on_search_changed("intel");
        let names: Vec<&str> = session.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["i5", "i7"]);
    }

    #[test]
    fn category_switch_always_clears_the_selection() {
        let mut session = session();
        session
            .on_compare_toggle(&ProductKey::new("CPU", "AMD", "Ryzen 5"), true)
            .unwrap();
        session
            .on_compare_toggle(&ProductKey::new("CPU", "Intel", "i5"), true)
            .unwrap();
        assert_eq!(session.selection().len(), 2);

        session.on_category_changed(&"GPU".into());
        assert_eq!(session.selection().len(), 0);
        assert_eq!(session.active_category().unwrap().as_str(), "GPU");
    }

    #[test]
    fn switching_to_unknown_category_is_ignored() {
        let mut session = session();
        session
            .on_compare_toggle(&ProductKey::new("CPU", "AMD", "Ryzen 5"), true)
            .unwrap();

        session.on_category_changed(&"Keyboards".into());
        assert_eq!(session.active_category().unwrap().as_str(), "CPU");
        assert_eq!(session.selection().len(), 1);
    }

    #[test]
    fn toggle_routes_add_and_remove() {
        let mut session = session();
        let key = ProductKey::new("CPU", "AMD", "Ryzen 5");

        assert_eq!(session.on_compare_toggle(&key, true).unwrap(), ToggleOutcome::Added);
        assert_eq!(session.on_compare_toggle(&key, true).unwrap(), ToggleOutcome::Unchanged);
        assert_eq!(session.on_compare_toggle(&key, false).unwrap(), ToggleOutcome::Removed);
        assert_eq!(session.on_compare_toggle(&key, false).unwrap(), ToggleOutcome::Unchanged);
    }

    #[test]
    fn toggle_for_unknown_product_is_a_no_op() {
        let mut session = session();
        let outcome = session
            .on_compare_toggle(&ProductKey::new("CPU", "Cyrix", "6x86"), true)
            .unwrap();
        assert_eq!(outcome, ToggleOutcome::Unchanged);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn open_comparison_requires_two_selected() {
        let mut session = session();
        assert!(session.open_comparison().is_none());

        session
            .on_compare_toggle(&ProductKey::new("CPU", "AMD", "Ryzen 5"), true)
            .unwrap();
        assert!(session.open_comparison().is_none());

        session
            .on_compare_toggle(&ProductKey::new("CPU", "Intel", "i5"), true)
            .unwrap();
        let table = session.open_comparison().unwrap();
        assert_eq!(table.columns, ["Ryzen 5", "i5"]);
    }

    #[test]
    fn empty_catalog_session_has_no_visible_products() {
        let store = CatalogStore::from_json_str(r#"{ "products": [] }"#).unwrap();
        let session = BrowseSession::new(store);
        assert_eq!(session.active_category(), None);
        assert!(session.visible_products().is_empty());
    }
}

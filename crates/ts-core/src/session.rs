//! View session: the explicit store object tying the engine together.
//!
//! A session owns the mutable view state (filters, active category, search
//! string, accordion) over a borrowed catalog snapshot. It is reconstructed
//! from the URL fragment on every page load and encodes itself back into a
//! fragment after every mutation, so the fragment stays the single source
//! of persisted state.

use crate::accordion::AccordionController;
use crate::catalog::{AssetType, Catalog, Category};
use crate::filter::FilterStateStore;
use crate::fragment;
use crate::startup::LoadedCatalog;
use crate::taxonomy::TierTaxonomy;
use crate::view::{CatalogView, ItemSummary, ViewEngine};

/// Mutable view state over an immutable catalog snapshot.
#[derive(Debug)]
pub struct ViewSession<'a> {
    catalog: &'a Catalog,
    taxonomy: &'a TierTaxonomy,
    filters: FilterStateStore,
    category: Category,
    search: String,
    accordion: AccordionController,
}

impl<'a> ViewSession<'a> {
    /// A fresh session showing the default view: Azure, unfiltered.
    pub fn new(catalog: &'a Catalog, taxonomy: &'a TierTaxonomy) -> Self {
        Self {
            catalog,
            taxonomy,
            filters: FilterStateStore::new(),
            category: Category::Azure,
            search: String::new(),
            accordion: AccordionController::new(),
        }
    }

    /// Convenience constructor over a startup snapshot.
    pub fn from_snapshot(snapshot: &'a LoadedCatalog) -> Self {
        Self::new(&snapshot.catalog, &snapshot.taxonomy)
    }

    /// Applies a URL fragment. Returns false (state untouched) when the
    /// fragment's category is unrecognized; anything else is applied with
    /// token-level tolerance.
    pub fn apply_fragment(&mut self, raw: &str) -> bool {
        let Some(selection) = fragment::decode(raw) else {
            return false;
        };
        self.set_category(selection.category);
        // State changes only through toggles; reconstruct accordingly.
        self.filters.reset(selection.category);
        for tier in &selection.tiers {
            self.filters.toggle_tier(selection.category, *tier);
        }
        for asset_type in &selection.asset_types {
            self.filters.toggle_asset_type(selection.category, *asset_type);
        }
        true
    }

    /// The canonical fragment for the current state.
    pub fn fragment(&self) -> String {
        fragment::encode(
            self.category,
            self.filters.selected_tiers(self.category),
            self.filters.selected_asset_types(self.category),
        )
    }

    /// The fragment this state would have after toggling one tier; used
    /// to build toggle-link targets without mutating the session.
    pub fn fragment_with_tier_toggled(&mut self, tier: u8) -> String {
        self.filters.toggle_tier(self.category, tier);
        let encoded = self.fragment();
        self.filters.toggle_tier(self.category, tier);
        encoded
    }

    /// As above, for an asset-type toggle.
    pub fn fragment_with_type_toggled(&mut self, asset_type: AssetType) -> String {
        self.filters.toggle_asset_type(self.category, asset_type);
        let encoded = self.fragment();
        self.filters.toggle_asset_type(self.category, asset_type);
        encoded
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Switches category; any open detail block collapses.
    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            self.category = category;
            self.accordion.collapse_all();
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Updates the live search string. Each keystroke re-renders the item
    /// list, which implicitly collapses any open detail block.
    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
        self.accordion.collapse_all();
    }

    /// Toggles a tier filter. Filter changes trigger a full re-render, so
    /// the expansion state collapses too.
    pub fn toggle_tier(&mut self, tier: u8) {
        self.filters.toggle_tier(self.category, tier);
        self.accordion.collapse_all();
    }

    /// Toggles an asset-type filter; same collapse rule as tiers.
    pub fn toggle_asset_type(&mut self, asset_type: AssetType) {
        self.filters.toggle_asset_type(self.category, asset_type);
        self.accordion.collapse_all();
    }

    /// Toggles one item's detail block; returns true when it is now open.
    pub fn toggle_item(&mut self, key: &str) -> bool {
        self.accordion.toggle(key)
    }

    /// Restores the expansion state carried by an incremental-render
    /// request.
    pub fn set_expanded(&mut self, key: Option<String>) {
        self.accordion = AccordionController::with_expanded(key);
    }

    pub fn expanded(&self) -> Option<&str> {
        self.accordion.expanded()
    }

    pub fn filters(&self) -> &FilterStateStore {
        &self.filters
    }

    /// Full render model for the current state.
    pub fn full_view(&self) -> CatalogView {
        ViewEngine::new(self.catalog, self.taxonomy, &self.filters).full_view(
            self.category,
            &self.search,
            &self.accordion,
        )
    }

    /// Incremental render model: the item list only.
    pub fn visible_items(&self) -> Vec<ItemSummary> {
        ViewEngine::new(self.catalog, self.taxonomy, &self.filters).visible_items(
            self.category,
            &self.search,
            &self.accordion,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryData, Item};

    fn snapshot() -> (Catalog, TierTaxonomy) {
        let mut catalog = Catalog::new();
        let items: Vec<Item> = serde_json::from_str(
            r#"[
                {"id": "abc-1", "name": "Owner", "tier": 0, "assetType": "built-in"},
                {"id": "xyz-2", "name": "Reader", "tier": 3, "assetType": "custom"}
            ]"#,
        )
        .unwrap();
        catalog.set(
            Category::Azure,
            CategoryData {
                items,
                untiered_count: 1,
            },
        );
        let entra: Vec<Item> =
            serde_json::from_str(r#"[{"name": "Global Administrator", "tier": 0}]"#).unwrap();
        catalog.set(
            Category::Entra,
            CategoryData {
                items: entra,
                untiered_count: 0,
            },
        );
        (catalog, TierTaxonomy::default())
    }

    #[test]
    fn fragment_round_trips_through_a_session() {
        let (catalog, taxonomy) = snapshot();
        let mut session = ViewSession::new(&catalog, &taxonomy);
        session.set_category(Category::Entra);
        session.toggle_tier(0);
        session.toggle_tier(2);
        session.toggle_asset_type(AssetType::Custom);
        let encoded = session.fragment();
        assert_eq!(encoded, "entra-tier-0-2-type-custom");

        let mut restored = ViewSession::new(&catalog, &taxonomy);
        assert!(restored.apply_fragment(&encoded));
        assert_eq!(restored.category(), Category::Entra);
        assert_eq!(restored.fragment(), encoded);
    }

    #[test]
    fn bad_fragment_retains_prior_state() {
        let (catalog, taxonomy) = snapshot();
        let mut session = ViewSession::new(&catalog, &taxonomy);
        session.toggle_tier(1);
        let before = session.fragment();
        assert!(!session.apply_fragment("aws-tier-1"));
        assert_eq!(session.fragment(), before);
        assert_eq!(session.category(), Category::Azure);
    }

    #[test]
    fn filter_toggle_collapses_expansion() {
        let (catalog, taxonomy) = snapshot();
        let mut session = ViewSession::new(&catalog, &taxonomy);
        assert!(session.toggle_item("abc-1"));
        session.toggle_tier(0);
        assert_eq!(session.expanded(), None);
    }

    #[test]
    fn category_switch_collapses_expansion() {
        let (catalog, taxonomy) = snapshot();
        let mut session = ViewSession::new(&catalog, &taxonomy);
        session.toggle_item("abc-1");
        session.set_category(Category::Entra);
        assert_eq!(session.expanded(), None);
        // Re-selecting the current category is not a switch.
        session.toggle_item("e-9");
        session.set_category(Category::Entra);
        assert_eq!(session.expanded(), Some("e-9"));
    }

    #[test]
    fn search_keystroke_collapses_expansion_and_filters_items() {
        let (catalog, taxonomy) = snapshot();
        let mut session = ViewSession::new(&catalog, &taxonomy);
        session.toggle_item("abc-1");
        session.set_search("read");
        assert_eq!(session.expanded(), None);
        let items = session.visible_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Reader");
    }

    #[test]
    fn toggle_link_fragments_do_not_mutate_state() {
        let (catalog, taxonomy) = snapshot();
        let mut session = ViewSession::new(&catalog, &taxonomy);
        session.toggle_tier(1);
        let before = session.fragment();
        assert_eq!(session.fragment_with_tier_toggled(2), "azure-tier-1-2");
        assert_eq!(session.fragment_with_tier_toggled(1), "azure");
        assert_eq!(
            session.fragment_with_type_toggled(AssetType::Custom),
            "azure-tier-1-type-custom"
        );
        assert_eq!(session.fragment(), before);
    }

    #[test]
    fn accordion_exclusivity_across_renders() {
        let (catalog, taxonomy) = snapshot();
        let mut session = ViewSession::new(&catalog, &taxonomy);
        assert!(session.toggle_item("abc-1"));
        assert!(session.toggle_item("xyz-2"));
        let items = session.visible_items();
        let expanded: Vec<_> = items.iter().filter(|i| i.expanded).collect();
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].key, "xyz-2");
    }
}

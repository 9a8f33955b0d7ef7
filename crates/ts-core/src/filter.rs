//! Per-category filter state.
//!
//! Each category carries two independent selections: tiers and asset
//! types. An empty selection means "unfiltered on this axis", so the
//! effective accessors resolve it to the full domain. State changes only
//! through toggles; nothing here fails. Tiers outside the category's range
//! are accepted into the selection and simply never match an item.

use std::collections::BTreeSet;

use crate::catalog::{AssetType, Category};

#[derive(Debug, Clone, Default)]
struct FilterState {
    tiers: BTreeSet<u8>,
    asset_types: BTreeSet<AssetType>,
}

/// Selected-tier and selected-asset-type sets for all three categories.
#[derive(Debug, Clone, Default)]
pub struct FilterStateStore {
    states: [FilterState; 3],
}

impl FilterStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric-differences the tier into the category's selection.
    pub fn toggle_tier(&mut self, category: Category, tier: u8) {
        let tiers = &mut self.states[category.index()].tiers;
        if !tiers.remove(&tier) {
            tiers.insert(tier);
        }
    }

    /// Symmetric-differences the asset type into the category's selection.
    pub fn toggle_asset_type(&mut self, category: Category, asset_type: AssetType) {
        let types = &mut self.states[category.index()].asset_types;
        if !types.remove(&asset_type) {
            types.insert(asset_type);
        }
    }

    /// The explicit tier selection, possibly empty.
    pub fn selected_tiers(&self, category: Category) -> &BTreeSet<u8> {
        &self.states[category.index()].tiers
    }

    /// The explicit asset-type selection, possibly empty.
    pub fn selected_asset_types(&self, category: Category) -> &BTreeSet<AssetType> {
        &self.states[category.index()].asset_types
    }

    /// The tier set used for matching: the explicit selection when
    /// non-empty, otherwise the category's full range.
    pub fn effective_tiers(&self, category: Category) -> BTreeSet<u8> {
        let selected = self.selected_tiers(category);
        if selected.is_empty() {
            category.tier_range().iter().copied().collect()
        } else {
            selected.clone()
        }
    }

    /// The asset-type set used for matching: the explicit selection when
    /// non-empty, otherwise both types.
    pub fn effective_asset_types(&self, category: Category) -> BTreeSet<AssetType> {
        let selected = self.selected_asset_types(category);
        if selected.is_empty() {
            AssetType::ALL.iter().copied().collect()
        } else {
            selected.clone()
        }
    }

    /// True when the tier is explicitly selected.
    pub fn is_tier_selected(&self, category: Category, tier: u8) -> bool {
        self.selected_tiers(category).contains(&tier)
    }

    /// True when the asset type is explicitly selected.
    pub fn is_asset_type_selected(&self, category: Category, asset_type: AssetType) -> bool {
        self.selected_asset_types(category).contains(&asset_type)
    }

    /// Clears both selections for one category.
    pub fn reset(&mut self, category: Category) {
        self.states[category.index()] = FilterState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_effective_sets_cover_full_domain() {
        let store = FilterStateStore::new();
        for category in Category::ALL {
            let tiers = store.effective_tiers(category);
            assert_eq!(
                tiers,
                category.tier_range().iter().copied().collect::<BTreeSet<_>>()
            );
            let types = store.effective_asset_types(category);
            assert_eq!(types.len(), 2);
        }
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut store = FilterStateStore::new();
        store.toggle_tier(Category::Azure, 1);
        let before = store.selected_tiers(Category::Azure).clone();
        store.toggle_tier(Category::Azure, 2);
        store.toggle_tier(Category::Azure, 2);
        assert_eq!(*store.selected_tiers(Category::Azure), before);

        store.toggle_asset_type(Category::Azure, AssetType::Custom);
        store.toggle_asset_type(Category::Azure, AssetType::Custom);
        assert!(store.selected_asset_types(Category::Azure).is_empty());
    }

    #[test]
    fn explicit_selection_narrows_effective_set() {
        let mut store = FilterStateStore::new();
        store.toggle_tier(Category::Entra, 0);
        store.toggle_tier(Category::Entra, 2);
        assert_eq!(
            store.effective_tiers(Category::Entra),
            BTreeSet::from([0, 2])
        );
        // Other categories are untouched.
        assert_eq!(store.effective_tiers(Category::Azure).len(), 4);
    }

    #[test]
    fn out_of_range_tier_is_accepted_fail_open() {
        let mut store = FilterStateStore::new();
        store.toggle_tier(Category::Entra, 9);
        assert!(store.is_tier_selected(Category::Entra, 9));
        assert_eq!(store.effective_tiers(Category::Entra), BTreeSet::from([9]));
    }

    #[test]
    fn reset_clears_one_category_only() {
        let mut store = FilterStateStore::new();
        store.toggle_tier(Category::Azure, 1);
        store.toggle_asset_type(Category::Azure, AssetType::BuiltIn);
        store.toggle_tier(Category::Entra, 0);
        store.reset(Category::Azure);
        assert!(store.selected_tiers(Category::Azure).is_empty());
        assert!(store.selected_asset_types(Category::Azure).is_empty());
        assert!(store.is_tier_selected(Category::Entra, 0));
    }
}

//! View engine: computes what the renderer shows.
//!
//! Two entry points mirror the two render modes. `full_view` produces the
//! whole page model (untiered summary, filter controls, tier-definition
//! strip, search value, item list); `visible_items` recomputes only the
//! item list, which is what every search keystroke and accordion click
//! refreshes. Neither touches markup; templates consume these models and
//! escape on output.

use crate::accordion::AccordionController;
use crate::catalog::{AssetType, Catalog, Category, Item};
use crate::filter::FilterStateStore;
use crate::taxonomy::TierTaxonomy;

/// The "n of m still untiered" summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UntieredSummary {
    pub untiered: u64,
    pub total: u64,
}

/// One tier toggle button in the filter strip.
#[derive(Debug, Clone)]
pub struct TierButton {
    pub tier: u8,
    pub label: String,
    pub class: &'static str,
    pub selected: bool,
}

/// One asset-type toggle button in the filter strip.
#[derive(Debug, Clone)]
pub struct TypeButton {
    pub asset_type: AssetType,
    pub selected: bool,
}

/// One entry of the tier-definition strip.
#[derive(Debug, Clone)]
pub struct TierDefinition {
    pub tier: u8,
    pub label: String,
    pub class: &'static str,
    pub name: String,
    pub definition: String,
}

/// Detail-block body; which variant applies depends on category and tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    /// Azure tiers 2 and 3: only the worst-case scenario, when present.
    WorstCase { scenario: Option<String> },
    /// Entra tier 1: what the role grants full access to.
    FullAccess { target: Option<String> },
    /// Everything else: the path triple, each field independently optional.
    Paths {
        path_type: Option<String>,
        shortest_path: Option<String>,
        example: Option<String>,
    },
}

/// Lazily rendered detail block for one item.
#[derive(Debug, Clone)]
pub struct ItemDetail {
    pub asset_type: Option<AssetType>,
    /// Tier name line; always present, possibly empty.
    pub tier_name: String,
    /// Tier definition line; always present, possibly empty.
    pub tier_definition: String,
    /// Visual marker for a direct escalation path.
    pub direct_path: bool,
    pub body: DetailBody,
}

/// One visible item row.
#[derive(Debug, Clone)]
pub struct ItemSummary {
    /// Stable expansion key (id, or name when the id is absent).
    pub key: String,
    pub name: String,
    pub id: Option<String>,
    pub badge_label: String,
    pub badge_class: &'static str,
    pub documentation: Option<String>,
    pub expanded: bool,
    pub glyph: &'static str,
    pub detail: ItemDetail,
}

/// Full render model, emitted in fixed order by the page template.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub category: Category,
    pub untiered: UntieredSummary,
    pub tier_buttons: Vec<TierButton>,
    pub type_buttons: Vec<TypeButton>,
    /// Only populated when at least one tier is explicitly selected; the
    /// "all tiers" default shows no definition strip.
    pub definitions: Vec<TierDefinition>,
    pub search: String,
    pub items: Vec<ItemSummary>,
}

/// Computes view models from the catalog, taxonomy, and filter state.
pub struct ViewEngine<'a> {
    catalog: &'a Catalog,
    taxonomy: &'a TierTaxonomy,
    filters: &'a FilterStateStore,
}

impl<'a> ViewEngine<'a> {
    pub fn new(
        catalog: &'a Catalog,
        taxonomy: &'a TierTaxonomy,
        filters: &'a FilterStateStore,
    ) -> Self {
        Self {
            catalog,
            taxonomy,
            filters,
        }
    }

    /// Full render: everything the page shows for one category.
    pub fn full_view(
        &self,
        category: Category,
        search: &str,
        accordion: &AccordionController,
    ) -> CatalogView {
        let tier_buttons = category
            .tier_range()
            .iter()
            .map(|&tier| TierButton {
                tier,
                label: self.taxonomy.label_for(category, Some(tier)),
                class: self.taxonomy.class_for(category, Some(tier)),
                selected: self.filters.is_tier_selected(category, tier),
            })
            .collect();

        let type_buttons = AssetType::ALL
            .iter()
            .map(|&asset_type| TypeButton {
                asset_type,
                selected: self.filters.is_asset_type_selected(category, asset_type),
            })
            .collect();

        // Ascending tier order, explicitly selected tiers only.
        let definitions = self
            .filters
            .selected_tiers(category)
            .iter()
            .map(|&tier| TierDefinition {
                tier,
                label: self.taxonomy.label_for(category, Some(tier)),
                class: self.taxonomy.class_for(category, Some(tier)),
                name: self.taxonomy.name_for(category, Some(tier)),
                definition: self.taxonomy.definition_for(category, Some(tier)),
            })
            .collect();

        CatalogView {
            category,
            untiered: UntieredSummary {
                untiered: self.catalog.untiered_count(category),
                total: self.catalog.total_count(category),
            },
            tier_buttons,
            type_buttons,
            definitions,
            search: search.to_string(),
            items: self.visible_items(category, search, accordion),
        }
    }

    /// Incremental render: just the filtered item list, in original fetch
    /// order.
    pub fn visible_items(
        &self,
        category: Category,
        search: &str,
        accordion: &AccordionController,
    ) -> Vec<ItemSummary> {
        let effective_tiers = self.filters.effective_tiers(category);
        let type_selection = self.filters.selected_asset_types(category);
        let needle = search.trim().to_lowercase();

        self.catalog
            .items(category)
            .iter()
            .filter(|item| {
                // Untiered items never appear in the tiered list; they are
                // accounted for only through the untiered count.
                item.tier.is_some_and(|t| effective_tiers.contains(&t))
            })
            .filter(|item| match item.asset_type {
                Some(t) => type_selection.is_empty() || type_selection.contains(&t),
                // Items without a recognized asset type are excluded from
                // type-filtered views but visible when the axis is "all".
                None => type_selection.is_empty(),
            })
            .filter(|item| {
                if needle.is_empty() {
                    return true;
                }
                let haystack = format!(
                    "{}{}",
                    item.name,
                    item.id.as_deref().unwrap_or_default()
                )
                .to_lowercase();
                haystack.contains(&needle)
            })
            .map(|item| self.summarize(category, item, accordion))
            .collect()
    }

    fn summarize(
        &self,
        category: Category,
        item: &Item,
        accordion: &AccordionController,
    ) -> ItemSummary {
        let expanded = accordion.is_expanded(item.key());
        ItemSummary {
            key: item.key().to_string(),
            name: item.name.clone(),
            id: item.id.clone(),
            badge_label: self.taxonomy.label_for(category, item.tier),
            badge_class: self.taxonomy.class_for(category, item.tier),
            documentation: item.documentation.clone(),
            expanded,
            glyph: AccordionController::glyph(expanded),
            detail: ItemDetail {
                asset_type: item.asset_type,
                tier_name: self.taxonomy.name_for(category, item.tier),
                tier_definition: self.taxonomy.definition_for(category, item.tier),
                direct_path: item.has_direct_path(),
                body: detail_body(category, item),
            },
        }
    }
}

/// Selects which detail fields a category/tier combination exposes.
fn detail_body(category: Category, item: &Item) -> DetailBody {
    let paths = || DetailBody::Paths {
        path_type: item.path_type.clone(),
        shortest_path: item.shortest_path.clone(),
        example: item.example.clone(),
    };
    match (category, item.tier) {
        (Category::Azure, Some(2 | 3)) => DetailBody::WorstCase {
            scenario: item.worst_case_scenario.clone(),
        },
        (Category::Entra, Some(1)) => DetailBody::FullAccess {
            target: item.provides_full_access_to.clone(),
        },
        _ => paths(),
    }
}

//! Askama template definitions for the catalog pages.

use askama::Template;
use ts_core::{DetailBody, ItemSummary};

/// One category tab in the header.
pub struct CategoryTab {
    pub name: &'static str,
    pub fragment: String,
    pub active: bool,
}

/// One tier toggle button, with its toggle-link fragment precomputed.
pub struct TierButtonView {
    pub label: String,
    pub class: &'static str,
    pub selected: bool,
    pub fragment: String,
}

/// One asset-type toggle button.
pub struct TypeButtonView {
    pub label: &'static str,
    pub selected: bool,
    pub fragment: String,
}

/// One entry of the tier-definition strip.
pub struct TierDefinitionView {
    pub label: String,
    pub class: &'static str,
    pub name: String,
    pub definition: String,
}

/// Path detail fields; each independently optional.
pub struct PathsView {
    pub path_type: Option<String>,
    pub shortest_path: Option<String>,
    pub example: Option<String>,
}

/// One rendered item row, flattened for the template.
pub struct ItemRow {
    pub key: String,
    pub name: String,
    pub id: Option<String>,
    pub badge_label: String,
    pub badge_class: &'static str,
    pub glyph: &'static str,
    pub documentation: Option<String>,
    pub expanded: bool,
    pub asset_type: Option<&'static str>,
    pub tier_name: String,
    pub tier_definition: String,
    pub direct_path: bool,
    pub worst_case: Option<String>,
    pub full_access: Option<String>,
    pub paths: Option<PathsView>,
}

impl From<ItemSummary> for ItemRow {
    fn from(summary: ItemSummary) -> Self {
        let detail = summary.detail;
        let (worst_case, full_access, paths) = match detail.body {
            DetailBody::WorstCase { scenario } => (scenario, None, None),
            DetailBody::FullAccess { target } => (None, target, None),
            DetailBody::Paths {
                path_type,
                shortest_path,
                example,
            } => (
                None,
                None,
                Some(PathsView {
                    path_type,
                    shortest_path,
                    example,
                }),
            ),
        };
        Self {
            key: summary.key,
            name: summary.name,
            id: summary.id,
            badge_label: summary.badge_label,
            badge_class: summary.badge_class,
            glyph: summary.glyph,
            documentation: summary.documentation,
            expanded: summary.expanded,
            asset_type: detail.asset_type.map(|t| t.as_str()),
            tier_name: detail.tier_name,
            tier_definition: detail.tier_definition,
            direct_path: detail.direct_path,
            worst_case,
            full_access,
            paths,
        }
    }
}

/// Full catalog page.
#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub category_name: &'static str,
    pub fragment: String,
    pub q: String,
    pub untiered: u64,
    pub total: u64,
    pub tabs: Vec<CategoryTab>,
    pub tier_buttons: Vec<TierButtonView>,
    pub type_buttons: Vec<TypeButtonView>,
    pub definitions: Vec<TierDefinitionView>,
    pub items: Vec<ItemRow>,
}

/// Item-list partial, swapped in by HTMX on search keystrokes and
/// accordion clicks.
#[derive(Template)]
#[template(path = "partials/item_list.html")]
pub struct ItemListTemplate {
    pub fragment: String,
    pub q: String,
    pub items: Vec<ItemRow>,
}

/// Explicit page for the terminal DataUnavailable stage.
#[derive(Template)]
#[template(path = "unavailable.html")]
pub struct UnavailableTemplate;

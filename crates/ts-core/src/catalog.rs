//! Catalog data model for TierScope.
//!
//! This module defines the three asset categories, the catalog items they
//! contain, and the immutable catalog snapshot the engine reads from.
//! Tier values arrive from upstream data as either numbers or strings;
//! they are canonicalized to `Option<u8>` here, at the ingestion boundary,
//! so no downstream code ever compares mixed representations.

use serde::{Deserialize, Deserializer, Serialize};

/// One of the three independent asset catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Azure RBAC roles.
    Azure,
    /// Entra ID directory roles.
    Entra,
    /// Microsoft Graph application permissions.
    MsGraph,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Azure, Category::Entra, Category::MsGraph];

    /// The closed tier range for this category.
    ///
    /// Azure roles are classified into four tiers; Entra roles and Graph
    /// application permissions into three. The range is a static property
    /// of the category and never changes at runtime.
    pub fn tier_range(&self) -> &'static [u8] {
        match self {
            Category::Azure => &[0, 1, 2, 3],
            Category::Entra | Category::MsGraph => &[0, 1, 2],
        }
    }

    /// Canonical identifier, as used in URL fragments and API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Azure => "azure",
            Category::Entra => "entra",
            Category::MsGraph => "msgraph",
        }
    }

    /// Human-readable catalog name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Azure => "Azure roles",
            Category::Entra => "Entra roles",
            Category::MsGraph => "MS Graph application permissions",
        }
    }

    /// Parses a category identifier, case-insensitively.
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "azure" => Some(Category::Azure),
            "entra" => Some(Category::Entra),
            "msgraph" => Some(Category::MsGraph),
            _ => None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Azure => 0,
            Category::Entra => 1,
            Category::MsGraph => 2,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an asset is a built-in or a custom definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    BuiltIn,
    Custom,
}

impl AssetType {
    /// Both asset types, in display order.
    pub const ALL: [AssetType; 2] = [AssetType::BuiltIn, AssetType::Custom];

    /// Canonical identifier, as used in URL fragments.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::BuiltIn => "built-in",
            AssetType::Custom => "custom",
        }
    }

    /// Parses an asset type, case-insensitively. Unknown values yield
    /// `None` rather than an error.
    pub fn parse(s: &str) -> Option<AssetType> {
        match s.trim().to_ascii_lowercase().as_str() {
            "built-in" | "builtin" => Some(AssetType::BuiltIn),
            "custom" => Some(AssetType::Custom),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AssetType::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown asset type: {s}")))
    }
}

/// One catalog entry. Items are immutable once fetched; the engine only
/// reads them, in their original fetch order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Upstream identifier. Some catalogs omit it.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name of the role or permission.
    #[serde(alias = "assetName")]
    pub name: String,
    /// Tier classification within the category's range. `None` means the
    /// item is still unclassified.
    #[serde(default, deserialize_with = "deserialize_tier")]
    pub tier: Option<u8>,
    /// Built-in or custom definition.
    #[serde(default, deserialize_with = "deserialize_asset_type")]
    pub asset_type: Option<AssetType>,
    /// Free-text path classification; the value "direct" is distinguished.
    #[serde(default)]
    pub path_type: Option<String>,
    /// Shortest known escalation path, when documented.
    #[serde(default)]
    pub shortest_path: Option<String>,
    /// Worked example of the path, when documented.
    #[serde(default)]
    pub example: Option<String>,
    /// Worst-case scenario text for high-tier Azure roles.
    #[serde(default)]
    pub worst_case_scenario: Option<String>,
    /// What an Entra tier-1 role grants full access to.
    #[serde(default)]
    pub provides_full_access_to: Option<String>,
    /// Upstream documentation link.
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Item {
    /// Stable key used for expansion tracking: the id when present,
    /// otherwise the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// True when the path type equals "direct", case-insensitively.
    pub fn has_direct_path(&self) -> bool {
        self.path_type
            .as_deref()
            .is_some_and(|p| p.eq_ignore_ascii_case("direct"))
    }
}

/// Accepts a tier as either a JSON number or a numeric string, so that
/// `0` and `"0"` classify identically. Anything that does not canonicalize
/// to an unsigned integer becomes `None`.
fn deserialize_tier<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTier {
        Number(i64),
        Text(String),
    }

    let raw: Option<RawTier> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|r| match r {
        RawTier::Number(n) => u8::try_from(n).ok(),
        RawTier::Text(s) => s.trim().parse::<u8>().ok(),
    }))
}

/// Accepts an asset type case-insensitively; unknown values degrade to
/// `None` instead of failing the whole item.
fn deserialize_asset_type<'de, D>(deserializer: D) -> Result<Option<AssetType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(AssetType::parse))
}

/// Per-category dataset: the tiered items plus the count of items that
/// have not been classified yet.
#[derive(Debug, Clone, Default)]
pub struct CategoryData {
    pub items: Vec<Item>,
    pub untiered_count: u64,
}

/// Immutable catalog snapshot covering all three categories.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    data: [CategoryData; 3],
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the dataset for one category.
    pub fn set(&mut self, category: Category, data: CategoryData) {
        self.data[category.index()] = data;
    }

    /// Items for a category, in original fetch order.
    pub fn items(&self, category: Category) -> &[Item] {
        &self.data[category.index()].items
    }

    /// Count of items in this category that lack a tier.
    pub fn untiered_count(&self, category: Category) -> u64 {
        self.data[category.index()].untiered_count
    }

    /// Total assets known for a category: tiered items plus untiered count.
    pub fn total_count(&self, category: Category) -> u64 {
        self.items(category).len() as u64 + self.untiered_count(category)
    }

    /// True when no category has any tiered items.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.items(*c).is_empty())
    }
}

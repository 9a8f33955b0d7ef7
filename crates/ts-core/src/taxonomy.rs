//! Tier taxonomy: display class, label, name, and definition lookups.
//!
//! The taxonomy is a pure lookup table. Display classes and labels are
//! intrinsic; names and definitions come from an externally supplied
//! taxonomy document and degrade to empty strings when absent.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Sentinel display class for out-of-range or absent tiers.
pub const CLASS_UNKNOWN: &str = "tier-unknown";
/// Sentinel label for out-of-range or absent tiers.
pub const LABEL_UNKNOWN: &str = "Unclassified";

/// Externally supplied taxonomy document: per-category tier names and
/// definitions, keyed by category name (case-insensitive) and `tier_<n>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyDoc {
    #[serde(default)]
    pub names: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    pub definitions: HashMap<String, HashMap<String, String>>,
}

impl TaxonomyDoc {
    fn lookup<'a>(
        table: &'a HashMap<String, HashMap<String, String>>,
        category: Category,
        tier: u8,
    ) -> Option<&'a str> {
        let per_tier = table
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(category.as_str()))
            .map(|(_, v)| v)?;
        let key = format!("tier_{tier}");
        per_tier
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
            .map(|(_, v)| v.as_str())
    }
}

/// Category x tier lookup driving both filtering UI and item display.
#[derive(Debug, Clone, Default)]
pub struct TierTaxonomy {
    doc: TaxonomyDoc,
}

impl TierTaxonomy {
    pub fn new(doc: TaxonomyDoc) -> Self {
        Self { doc }
    }

    /// CSS display class for a tier badge.
    ///
    /// Not a bijection with the tier number: Entra and Graph tier 2 reuse
    /// the class of Azure's tier 3, because tier 2 in those categories
    /// carries lower risk than tier 2 on the Azure side.
    pub fn class_for(&self, category: Category, tier: Option<u8>) -> &'static str {
        let Some(tier) = tier else {
            return CLASS_UNKNOWN;
        };
        if !category.tier_range().contains(&tier) {
            return CLASS_UNKNOWN;
        }
        match (category, tier) {
            (Category::Azure, 0) => "tier-0",
            (Category::Azure, 1) => "tier-1",
            (Category::Azure, 2) => "tier-2",
            (Category::Azure, 3) => "tier-3",
            (Category::Entra | Category::MsGraph, 0) => "tier-0",
            (Category::Entra | Category::MsGraph, 1) => "tier-1",
            (Category::Entra | Category::MsGraph, 2) => "tier-3",
            _ => CLASS_UNKNOWN,
        }
    }

    /// Short badge label, e.g. "Tier 0".
    pub fn label_for(&self, category: Category, tier: Option<u8>) -> String {
        match tier {
            Some(t) if category.tier_range().contains(&t) => format!("Tier {t}"),
            _ => LABEL_UNKNOWN.to_string(),
        }
    }

    /// Tier name from the taxonomy document; empty when unknown.
    pub fn name_for(&self, category: Category, tier: Option<u8>) -> String {
        tier.and_then(|t| TaxonomyDoc::lookup(&self.doc.names, category, t))
            .unwrap_or_default()
            .to_string()
    }

    /// Tier definition text from the taxonomy document; empty when unknown.
    pub fn definition_for(&self, category: Category, tier: Option<u8>) -> String {
        tier.and_then(|t| TaxonomyDoc::lookup(&self.doc.definitions, category, t))
            .unwrap_or_default()
            .to_string()
    }

    /// The underlying document, for the JSON API surface.
    pub fn doc(&self) -> &TaxonomyDoc {
        &self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> TaxonomyDoc {
        serde_json::from_str(
            r#"{
                "names": {
                    "Azure": {"tier_0": "Family of Global Admins"},
                    "entra": {"tier_1": "Family of Global Admins"}
                },
                "definitions": {
                    "azure": {"tier_0": "Roles with a direct path to Global Admin."}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn entra_tier_two_reuses_azure_lowest_class() {
        let tax = TierTaxonomy::default();
        assert_eq!(
            tax.class_for(Category::Entra, Some(2)),
            tax.class_for(Category::Azure, Some(3))
        );
        assert_eq!(
            tax.class_for(Category::MsGraph, Some(2)),
            tax.class_for(Category::Azure, Some(3))
        );
        // Tier 2 still differs across cat-A and cat-B.
        assert_ne!(
            tax.class_for(Category::Entra, Some(2)),
            tax.class_for(Category::Azure, Some(2))
        );
    }

    #[test]
    fn out_of_range_tier_yields_sentinel() {
        let tax = TierTaxonomy::default();
        assert_eq!(tax.class_for(Category::Entra, Some(3)), CLASS_UNKNOWN);
        assert_eq!(tax.class_for(Category::Azure, None), CLASS_UNKNOWN);
        assert_eq!(tax.label_for(Category::Entra, Some(7)), LABEL_UNKNOWN);
        assert_eq!(tax.label_for(Category::Azure, Some(2)), "Tier 2");
    }

    #[test]
    fn doc_lookup_is_case_insensitive() {
        let tax = TierTaxonomy::new(sample_doc());
        assert_eq!(
            tax.name_for(Category::Azure, Some(0)),
            "Family of Global Admins"
        );
        assert_eq!(
            tax.name_for(Category::Entra, Some(1)),
            "Family of Global Admins"
        );
        assert_eq!(
            tax.definition_for(Category::Azure, Some(0)),
            "Roles with a direct path to Global Admin."
        );
    }

    #[test]
    fn missing_doc_keys_yield_empty_strings() {
        let tax = TierTaxonomy::new(sample_doc());
        assert_eq!(tax.name_for(Category::MsGraph, Some(0)), "");
        assert_eq!(tax.definition_for(Category::Entra, Some(2)), "");
        assert_eq!(tax.definition_for(Category::Azure, None), "");
    }
}

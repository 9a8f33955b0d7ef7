//! URL-fragment codec for filter state.
//!
//! The fragment (without its leading `#`) is the only persisted view
//! state and is safe to share. Grammar:
//!
//! ```text
//! fragment  := category ("-tier-" tier ("-" tier)*)? ("-type-" type ("-" type)*)?
//! category  := "azure" | "entra" | "msgraph"
//! tier      := integer literal
//! type      := "built-in" | "custom"
//! ```
//!
//! Decoding is fail-soft: an unrecognized category rejects the whole
//! fragment (the caller keeps its prior state), while unexpected tokens
//! inside the tier or type segments are silently dropped. The `built-in`
//! literal spans two tokens after splitting on `-` and is rejoined here.

use std::collections::BTreeSet;

use crate::catalog::{AssetType, Category};

/// A decoded fragment: the active category plus its explicit selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelection {
    pub category: Category,
    pub tiers: BTreeSet<u8>,
    pub asset_types: BTreeSet<AssetType>,
}

impl ViewSelection {
    /// The default view for a category: no explicit filters.
    pub fn unfiltered(category: Category) -> Self {
        Self {
            category,
            tiers: BTreeSet::new(),
            asset_types: BTreeSet::new(),
        }
    }
}

/// Encodes a category and its explicit selections into a fragment.
///
/// The tier segment appears whenever the tier selection is non-empty,
/// ascending. The type segment is omitted when the selection is empty or
/// covers every asset type, keeping "all" in its canonical short form.
pub fn encode(
    category: Category,
    tiers: &BTreeSet<u8>,
    asset_types: &BTreeSet<AssetType>,
) -> String {
    let mut out = String::from(category.as_str());
    if !tiers.is_empty() {
        out.push_str("-tier");
        for tier in tiers {
            out.push('-');
            out.push_str(&tier.to_string());
        }
    }
    if !asset_types.is_empty() && asset_types.len() < AssetType::ALL.len() {
        out.push_str("-type");
        for asset_type in asset_types {
            out.push('-');
            out.push_str(asset_type.as_str());
        }
    }
    out
}

/// Decodes a fragment. Returns `None` when the leading token is not a
/// recognized category; every other irregularity degrades token by token.
pub fn decode(fragment: &str) -> Option<ViewSelection> {
    let fragment = fragment.trim().trim_start_matches('#');
    let tokens: Vec<&str> = fragment.split('-').collect();
    let category = Category::parse(tokens.first()?)?;

    let tier_idx = tokens.iter().position(|t| t.eq_ignore_ascii_case("tier"));
    let type_idx = tokens.iter().position(|t| t.eq_ignore_ascii_case("type"));

    let mut tiers = BTreeSet::new();
    if let Some(start) = tier_idx {
        let end = match type_idx {
            Some(end) if end > start => end,
            Some(_) => start + 1, // "type" precedes "tier": empty tier span
            None => tokens.len(),
        };
        for token in &tokens[start + 1..end.min(tokens.len())] {
            // Non-numeric noise inside the tier span is dropped, not failed.
            if let Ok(tier) = token.trim().parse::<u8>() {
                tiers.insert(tier);
            }
        }
    }

    let mut asset_types = BTreeSet::new();
    if let Some(start) = type_idx {
        let tail = &tokens[start + 1..];
        let mut i = 0;
        while i < tail.len() {
            let token = tail[i].to_ascii_lowercase();
            if token == "custom" {
                asset_types.insert(AssetType::Custom);
            } else if token == "built" && tail.get(i + 1).is_some_and(|t| t.eq_ignore_ascii_case("in"))
            {
                asset_types.insert(AssetType::BuiltIn);
                i += 1;
            }
            // Anything else is dropped.
            i += 1;
        }
    }

    Some(ViewSelection {
        category,
        tiers,
        asset_types,
    })
}

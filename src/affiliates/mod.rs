//! Affiliate catalog types, the default catalog, and presentation picks.
//!
//! Catalog entries are static data: the core only references and filters
//! them, never creates or destroys them at runtime.

use serde::{Deserialize, Serialize};

pub mod matcher;
pub mod partners;
pub mod url;

pub use self::matcher::{match_from_ingredients, merge_hints};
pub use self::partners::{PartnerId, PartnerTable};
pub use self::url::build_url;

use std::sync::OnceLock;

/// Whether a catalog entry is a pantry ingredient or a piece of kitchen gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Pantry,
    Gear,
}

/// An affiliate catalog entry: a purchasable item linked to retailer search
/// results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffItem {
    /// Unique key like "sesame-paste"
    pub key: String,
    /// Display name, e.g. "Sesame paste"
    pub label: String,
    /// Search queries to try in order; the first is primary
    pub queries: Vec<String>,
    /// Default partner fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerId>,
    /// Optional hard link (still decorated by the item's partner)
    #[serde(rename = "directUrl", skip_serializing_if = "Option::is_none")]
    pub direct_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
}

impl AffItem {
    fn pantry(key: &str, label: &str, queries: &[&str]) -> Self {
        Self::entry(key, label, queries, Some(ItemKind::Pantry))
    }

    fn gear(key: &str, label: &str, queries: &[&str]) -> Self {
        Self::entry(key, label, queries, Some(ItemKind::Gear))
    }

    fn entry(key: &str, label: &str, queries: &[&str], kind: Option<ItemKind>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            queries: queries.iter().map(|q| q.to_string()).collect(),
            partner: Some(PartnerId::Amazon),
            direct_url: None,
            kind,
        }
    }
}

/// Recipe-specific affiliate overrides, read-only input to the merge step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeHints {
    /// Catalog keys to force-include
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    /// Ad-hoc entries not in the catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<AffItem>,
}

/// Default catalog of useful pantry items and gear.
///
/// Keep labels and queries lowercase-friendly for matching. Catalog order
/// defines match output order, so append new entries rather than reordering.
pub fn default_catalog() -> &'static [AffItem] {
    static CATALOG: OnceLock<Vec<AffItem>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            AffItem::pantry("sesame-paste", "Sesame paste", &["sesame paste", "tahini"]),
            AffItem::pantry("soy-sauce", "Soy sauce", &["soy sauce"]),
            AffItem::pantry("rice-vinegar", "Rice vinegar", &["rice vinegar"]),
            AffItem::pantry("chili-oil", "Chili oil", &["chili oil"]),
            AffItem::gear("wok-spatula", "Wok spatula", &["wok spatula stainless steel"]),
            AffItem::gear("chef-knife", "Chef knife", &["8 inch chef knife"]),
            AffItem::gear("nonstick-pan", "Nonstick pan", &["nonstick frying pan 10 inch"]),
            AffItem::gear("sheet-pan", "Sheet pan", &["sheet pan aluminum"]),
            AffItem::pantry("miso", "White miso", &["white miso paste"]),
        ]
    })
}

/// Display cap for pantry picks, matching the recipe page layout.
pub const PANTRY_LIMIT: usize = 6;
/// Display cap for gear picks.
pub const GEAR_LIMIT: usize = 4;

/// First [`PANTRY_LIMIT`] merged items that are not gear. Untyped items count
/// as pantry.
pub fn pantry_picks(items: &[AffItem]) -> Vec<AffItem> {
    items
        .iter()
        .filter(|i| i.kind != Some(ItemKind::Gear))
        .take(PANTRY_LIMIT)
        .cloned()
        .collect()
}

/// First [`GEAR_LIMIT`] merged items marked as gear.
pub fn gear_picks(items: &[AffItem]) -> Vec<AffItem> {
    items
        .iter()
        .filter(|i| i.kind == Some(ItemKind::Gear))
        .take(GEAR_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_keys_are_unique() {
        let catalog = default_catalog();
        let mut keys: Vec<&str> = catalog.iter().map(|i| i.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn picks_split_by_kind_and_cap() {
        let merged = default_catalog().to_vec();
        let pantry = pantry_picks(&merged);
        let gear = gear_picks(&merged);
        assert!(pantry.len() <= PANTRY_LIMIT);
        assert!(gear.len() <= GEAR_LIMIT);
        assert!(pantry.iter().all(|i| i.kind != Some(ItemKind::Gear)));
        assert!(gear.iter().all(|i| i.kind == Some(ItemKind::Gear)));
        assert_eq!(gear[0].key, "wok-spatula");
    }
}

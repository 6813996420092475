//! Deterministic ingredient-to-catalog matching and hint merging.
//!
//! Matching is exact substring search over case-folded text, by contract.
//! Behavior must stay deterministic and reproducible; do not introduce
//! fuzzy matching or stemming here.

use log::debug;

use crate::affiliates::{AffItem, RecipeHints};

/// Scan ingredient lines and collect the catalog items they mention.
///
/// All lines are case-folded and joined into one search text; the catalog is
/// walked in catalog order and an item matches when any of its queries, or
/// its label, appears as a substring. Output preserves catalog order and
/// holds each key at most once. No match yields an empty vector.
pub fn match_from_ingredients(ingredients: &[String], catalog: &[AffItem]) -> Vec<AffItem> {
    let text = ingredients
        .iter()
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    let mut out: Vec<AffItem> = Vec::new();
    for item in catalog {
        if out.iter().any(|m| m.key == item.key) {
            continue;
        }
        let found = item
            .queries
            .iter()
            .any(|q| text.contains(&q.to_lowercase()))
            || text.contains(&item.label.to_lowercase());
        if found {
            out.push(item.clone());
        }
    }
    debug!("matched {} of {} catalog items", out.len(), catalog.len());
    out
}

/// Merge recipe-level hints into a base match list.
///
/// Hint keys are looked up in the catalog and appended when absent; entries
/// already in `base` keep their original position. Extra items replace an
/// existing entry with the same key in place, or append when the key is new.
/// The result never holds duplicate keys.
pub fn merge_hints(
    base: &[AffItem],
    hints: Option<&RecipeHints>,
    catalog: &[AffItem],
) -> Vec<AffItem> {
    let mut out: Vec<AffItem> = base.to_vec();
    let Some(hints) = hints else {
        return out;
    };

    for key in &hints.keys {
        if out.iter().any(|i| &i.key == key) {
            continue;
        }
        if let Some(item) = catalog.iter().find(|i| &i.key == key) {
            out.push(item.clone());
        }
    }

    for extra in &hints.extra {
        match out.iter_mut().find(|i| i.key == extra.key) {
            Some(slot) => *slot = extra.clone(),
            None => out.push(extra.clone()),
        }
    }

    out
}

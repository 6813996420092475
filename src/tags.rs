//! In-memory tag registry: tag name -> recipe count.
//!
//! The registry is an explicitly constructed value owned by the server
//! process and passed by reference to request handlers; tests get isolation
//! by building a fresh instance. State lives for the process lifetime only,
//! by design. Individual operations are single synchronous units of work; a
//! genuinely multi-threaded boundary must wrap the registry in a `Mutex`.

use std::collections::BTreeMap;

use log::debug;

use crate::error::TagError;
use crate::model::{Recipe, TagRow};

/// Trim and lowercase a raw tag name.
pub fn normalize(name_raw: &str) -> String {
    name_raw.trim().to_lowercase()
}

/// Authoritative mapping of tag name to usage count.
///
/// Keys are normalized names; `BTreeMap` keeps reads sorted ascending by
/// name, which is the listing order the display layer expects.
#[derive(Debug, Default)]
pub struct TagRegistry {
    counts: BTreeMap<String, u64>,
}

impl TagRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded from the recipe dataset's tag frequencies.
    ///
    /// Tags are normalized before counting; empty tags are excluded. Seed
    /// once at startup, before serving traffic.
    pub fn seeded(recipes: &[Recipe]) -> Self {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for recipe in recipes {
            let tag = normalize(&recipe.tag);
            if tag.is_empty() {
                continue;
            }
            *counts.entry(tag).or_insert(0) += 1;
        }
        debug!("seeded tag registry with {} tags", counts.len());
        Self { counts }
    }

    /// All entries, sorted ascending by name.
    pub fn list(&self) -> Vec<TagRow> {
        self.counts
            .iter()
            .map(|(name, count)| TagRow {
                name: name.clone(),
                count: *count,
            })
            .collect()
    }

    /// Insert a tag or update its count.
    ///
    /// The name is normalized first; an empty result fails with
    /// [`TagError::NameRequired`]. Negative or absent counts clamp to zero.
    /// For an existing tag a positive count overwrites, while zero keeps the
    /// stored count unchanged, so repeated zero-count submissions are
    /// idempotent and never clobber a real count.
    pub fn add_or_update(
        &mut self,
        name_raw: &str,
        count: Option<i64>,
    ) -> Result<TagRow, TagError> {
        let name = normalize(name_raw);
        if name.is_empty() {
            return Err(TagError::NameRequired);
        }

        let next = count.unwrap_or(0).max(0) as u64;
        let stored = match self.counts.get(&name) {
            Some(&existing) if next == 0 => existing,
            _ => next,
        };
        self.counts.insert(name.clone(), stored);
        Ok(TagRow {
            name,
            count: stored,
        })
    }

    /// Remove a tag by name.
    pub fn delete(&mut self, name_raw: &str) -> Result<(), TagError> {
        let name = normalize(name_raw);
        if name.is_empty() {
            return Err(TagError::NameRequired);
        }
        match self.counts.remove(&name) {
            Some(_) => Ok(()),
            None => Err(TagError::NotFound(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Weeknight "), "weeknight");
        assert_eq!(normalize("\t"), "");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut registry = TagRegistry::new();
        assert_eq!(registry.add_or_update("   ", None), Err(TagError::NameRequired));
        assert_eq!(registry.delete(""), Err(TagError::NameRequired));
    }

    #[test]
    fn negative_count_clamps_to_zero() {
        let mut registry = TagRegistry::new();
        let row = registry.add_or_update("salad", Some(-3)).unwrap();
        assert_eq!(row.count, 0);
    }

    #[test]
    fn zero_count_keeps_existing_value() {
        let mut registry = TagRegistry::new();
        registry.add_or_update("weeknight", Some(5)).unwrap();
        let row = registry.add_or_update("Weeknight", Some(0)).unwrap();
        assert_eq!(row.count, 5);
        let row = registry.add_or_update("weeknight", None).unwrap();
        assert_eq!(row.count, 5);
    }

    #[test]
    fn positive_count_overwrites() {
        let mut registry = TagRegistry::new();
        registry.add_or_update("salad", Some(2)).unwrap();
        let row = registry.add_or_update("salad", Some(7)).unwrap();
        assert_eq!(row.count, 7);
    }
}

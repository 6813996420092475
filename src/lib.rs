//! Core logic for a recipe content site: the in-memory tag registry and the
//! affiliate matching pipeline.
//!
//! The crate exposes plain functions and values; an external boundary adapts
//! them to HTTP, and a rendering layer consumes the results. See the module
//! docs for the contracts.

pub mod affiliates;
pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod tags;

pub use crate::affiliates::{
    build_url, default_catalog, gear_picks, match_from_ingredients, merge_hints, pantry_picks,
    AffItem, ItemKind, PartnerId, PartnerTable, RecipeHints,
};
pub use crate::config::SiteConfig;
pub use crate::error::TagError;
pub use crate::model::{Recipe, TagRow};
pub use crate::tags::TagRegistry;

/// The full shoppable item list for a recipe: automatic ingredient matches
/// merged with the recipe's hints (or its tool keys when it has no explicit
/// hints), deduplicated by key in stable order.
pub fn shoppable_for_recipe(recipe: &Recipe, catalog: &[AffItem]) -> Vec<AffItem> {
    let base = match_from_ingredients(&recipe.ingredients, catalog);
    merge_hints(&base, Some(&recipe.hints()), catalog)
}

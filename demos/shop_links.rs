//! Build shoppable links for every recipe in the dataset
//!
//! Shows the full matching pipeline: ingredient scan, hint merge, and
//! outbound URL construction. Set RECIPEBOOK__AFFILIATES__AMAZON_TAG to see
//! decorated Amazon links.

use recipebook::{
    build_url, dataset, default_catalog, gear_picks, pantry_picks, shoppable_for_recipe,
    PartnerTable, SiteConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SiteConfig::load().unwrap_or_default();
    let partners = PartnerTable::from_config(&config);

    for recipe in dataset::recipes() {
        println!("=== {} ({}) ===", recipe.title, recipe.tag);
        let merged = shoppable_for_recipe(recipe, default_catalog());

        println!("Pantry:");
        for item in pantry_picks(&merged) {
            println!("  {} -> {}", item.label, build_url(&item, None, &partners));
        }
        println!("Gear:");
        for item in gear_picks(&merged) {
            println!("  {} -> {}", item.label, build_url(&item, None, &partners));
        }
        println!();
    }

    Ok(())
}

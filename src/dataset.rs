//! The static recipe dataset: read-only input to the registry seed and the
//! affiliate pipeline.

use std::sync::OnceLock;

use crate::affiliates::RecipeHints;
use crate::model::{Faq, Nutrition, Recipe};

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn faqs(raw: &[(&str, &str)]) -> Vec<Faq> {
    raw.iter()
        .map(|(q, a)| Faq {
            q: q.to_string(),
            a: a.to_string(),
        })
        .collect()
}

fn keys_hint(keys: &[&str]) -> Option<RecipeHints> {
    Some(RecipeHints {
        keys: strings(keys),
        extra: Vec::new(),
    })
}

/// All recipes, in publication order.
pub fn recipes() -> &'static [Recipe] {
    static RECIPES: OnceLock<Vec<Recipe>> = OnceLock::new();
    RECIPES.get_or_init(build_dataset)
}

/// Look up a recipe by slug.
pub fn get_recipe(slug: &str) -> Option<&'static Recipe> {
    recipes().iter().find(|r| r.slug == slug)
}

fn build_dataset() -> Vec<Recipe> {
    vec![
        Recipe {
            slug: "cold-sesame-noodles".to_string(),
            title: "Cold Sesame Noodles".to_string(),
            tag: "noodles".to_string(),
            time: "20 min".to_string(),
            servings: Some("2 servings".to_string()),
            date: Some("2025-08-01".to_string()),
            author: Some("Recipe.System".to_string()),
            image: None,
            ingredients: strings(&[
                "200g wheat noodles",
                "2 tbsp sesame paste or tahini",
                "1 tbsp soy sauce",
                "1 tsp rice vinegar",
                "1 tsp chili oil",
                "1 tsp sugar",
                "1 clove garlic, grated",
                "1 scallion, sliced",
                "Sesame seeds",
            ]),
            steps: strings(&[
                "Boil noodles until tender, then rinse cold.",
                "Whisk dressing until smooth.",
                "Toss noodles with dressing and scallion.",
                "Finish with sesame seeds.",
            ]),
            notes: Some(
                "Good with shredded cucumber. Add a splash of noodle water to loosen the sauce if needed."
                    .to_string(),
            ),
            nutrition: Some(Nutrition {
                calories: Some("520 kcal (approx.)".to_string()),
            }),
            tools: strings(&["chef-knife"]),
            affiliates: keys_hint(&["sesame-paste", "soy-sauce", "rice-vinegar", "chili-oil"]),
            faqs: faqs(&[
                (
                    "Can I use peanut butter instead of sesame paste?",
                    "Yes. Thin with a little hot water and add a touch more vinegar to balance.",
                ),
                (
                    "Serve chilled or room temp?",
                    "Room temp is ideal. If fully chilled, loosen with a spoon of hot water and toss.",
                ),
            ]),
        },
        Recipe {
            slug: "sheet-pan-chicken".to_string(),
            title: "Sheet Pan Chicken".to_string(),
            tag: "weeknight".to_string(),
            time: "35 min".to_string(),
            servings: Some("2\u{2013}3 servings".to_string()),
            date: Some("2025-08-03".to_string()),
            author: Some("Recipe.System".to_string()),
            image: None,
            ingredients: strings(&[
                "4 chicken thighs",
                "300g small potatoes, halved",
                "1 red onion, wedges",
                "2 tbsp olive oil",
                "Salt and pepper",
                "Paprika",
            ]),
            steps: strings(&[
                "Heat oven to 220°C or 425°F.",
                "Toss everything with oil and seasoning.",
                "Roast until skin is crisp and potatoes are tender.",
            ]),
            notes: None,
            nutrition: Some(Nutrition {
                calories: Some("650 kcal (approx.)".to_string()),
            }),
            tools: strings(&["sheet-pan", "chef-knife"]),
            affiliates: keys_hint(&["sheet-pan", "chef-knife"]),
            faqs: faqs(&[(
                "Can I swap thighs for breasts?",
                "Yes, but reduce time a little and check doneness early to avoid drying out.",
            )]),
        },
        Recipe {
            slug: "miso-roasted-salmon".to_string(),
            title: "Miso Roasted Salmon".to_string(),
            tag: "seafood".to_string(),
            time: "25 min".to_string(),
            servings: Some("2 servings".to_string()),
            date: Some("2025-08-05".to_string()),
            author: Some("Recipe.System".to_string()),
            image: None,
            ingredients: strings(&[
                "2 salmon fillets",
                "1 tbsp white miso",
                "1 tsp honey",
                "1 tsp soy sauce",
                "1 tsp rice vinegar",
            ]),
            steps: strings(&[
                "Mix glaze until smooth.",
                "Brush salmon and rest 10 minutes.",
                "Roast at 200°C or 400°F until flaky.",
            ]),
            notes: None,
            nutrition: Some(Nutrition {
                calories: Some("430 kcal (approx.)".to_string()),
            }),
            tools: strings(&["sheet-pan"]),
            affiliates: keys_hint(&["miso", "soy-sauce", "rice-vinegar", "sheet-pan"]),
            faqs: faqs(&[(
                "Can I cook this in a skillet?",
                "Yes. Sear skin-side down, then finish in the oven for a minute or two.",
            )]),
        },
        Recipe {
            slug: "citrus-olive-salad".to_string(),
            title: "Citrus Olive Salad".to_string(),
            tag: "salad".to_string(),
            time: "10 min".to_string(),
            servings: Some("2 servings".to_string()),
            date: Some("2025-08-07".to_string()),
            author: Some("Recipe.System".to_string()),
            image: None,
            ingredients: strings(&[
                "2 oranges, segmented",
                "A handful of olives",
                "Thin red onion slices",
                "Olive oil",
                "Salt",
                "Black pepper",
            ]),
            steps: strings(&[
                "Layer citrus, olives, and onion.",
                "Dress with oil, salt, and pepper.",
            ]),
            notes: Some("Add shaved fennel for more crunch.".to_string()),
            nutrition: Some(Nutrition {
                calories: Some("260 kcal (approx.)".to_string()),
            }),
            tools: strings(&["chef-knife"]),
            affiliates: keys_hint(&["chef-knife"]),
            faqs: Vec::new(),
        },
    ]
}

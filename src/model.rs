use serde::{Deserialize, Serialize};

use crate::affiliates::RecipeHints;

/// A tag name paired with the number of recipes carrying it.
///
/// Names are always trimmed and lowercased before storage or comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRow {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
}

/// A recipe from the static dataset. Read-only input to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub slug: String,
    pub title: String,
    /// Single browse/filter category, e.g. "noodles"
    pub tag: String,
    /// Human-readable total time, e.g. "20 min"
    pub time: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    // Metadata used for structured data and UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "yield", skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,

    /// Catalog keys for kitchen tools; used as hint keys when `affiliates`
    /// is not set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    /// Explicit affiliate hints for this recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliates: Option<RecipeHints>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
}

impl Recipe {
    /// Hints to merge into this recipe's automatic matches: explicit hints
    /// when present, otherwise the tool keys.
    pub fn hints(&self) -> RecipeHints {
        match &self.affiliates {
            Some(hints) => hints.clone(),
            None => RecipeHints {
                keys: self.tools.clone(),
                extra: Vec::new(),
            },
        }
    }
}

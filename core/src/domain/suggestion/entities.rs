use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One catalog recipe. Immutable at runtime; `ingredients` holds distinct
/// names and is never empty for catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: String,
}

impl Recipe {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        ingredients: &[&str],
        steps: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            steps: steps.into(),
        }
    }
}

/// A ranked suggestion: the recipe plus how well the user's ingredients
/// cover it and what is still missing.
///
/// `coverage` is rounded to two decimals here, in the output representation;
/// ranking happens on the unrounded value before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    pub id: u32,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    /// Fraction of the recipe's ingredients present in the user's set.
    pub coverage: f64,
    /// Recipe ingredients absent from the user's set, in recipe order.
    pub missing: Vec<String>,
}

impl RecipeSuggestion {
    pub fn new(recipe: Recipe, coverage: f64, missing: Vec<String>) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            coverage: (coverage * 100.0).round() / 100.0,
            missing,
        }
    }
}

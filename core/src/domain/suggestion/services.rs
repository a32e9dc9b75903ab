use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::ports::ImageClassifier,
    suggestion::{
        entities::{Recipe, RecipeSuggestion},
        ports::{RecipeCatalog, RecipeSuggestionService},
        value_objects::SuggestRecipesInput,
    },
};

struct ScoredRecipe {
    recipe: Recipe,
    coverage: f64,
    missing: Vec<String>,
}

/// Coverage and missing set for one recipe, or `None` when nothing matches.
///
/// An empty recipe ingredient list counts as coverage 0 rather than dividing
/// by zero; catalog entries never hit that branch.
fn score_recipe(recipe: &Recipe, available: &HashSet<&str>) -> Option<(f64, Vec<String>)> {
    if recipe.ingredients.is_empty() {
        return None;
    }

    let matched = recipe
        .ingredients
        .iter()
        .filter(|i| available.contains(i.as_str()))
        .count();
    if matched == 0 {
        return None;
    }

    let coverage = matched as f64 / recipe.ingredients.len() as f64;
    let missing = recipe
        .ingredients
        .iter()
        .filter(|i| !available.contains(i.as_str()))
        .cloned()
        .collect();

    Some((coverage, missing))
}

impl<C, R> RecipeSuggestionService for Service<C, R>
where
    C: ImageClassifier,
    R: RecipeCatalog,
{
    async fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> Result<Vec<RecipeSuggestion>, CoreError> {
        let available: HashSet<&str> = input.ingredients.iter().map(String::as_str).collect();

        let mut scored: Vec<ScoredRecipe> = Vec::new();
        for recipe in self.recipe_catalog.list().await? {
            if let Some((coverage, missing)) = score_recipe(&recipe, &available) {
                scored.push(ScoredRecipe {
                    recipe,
                    coverage,
                    missing,
                });
            }
        }

        // Stable sort on the unrounded coverage: equal scores keep catalog
        // order, and rounding cannot reorder near ties.
        scored.sort_by(|a, b| b.coverage.partial_cmp(&a.coverage).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .map(|s| RecipeSuggestion::new(s.recipe, s.coverage, s.missing))
            .collect())
    }
}

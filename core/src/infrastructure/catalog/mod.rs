//! In-memory recipe catalog.
//!
//! The catalog is seed data compiled into the binary: loaded once, shared
//! read-only across requests. Swapping in a persistence-backed catalog means
//! implementing [`RecipeCatalog`] over that store instead.

use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    suggestion::{entities::Recipe, ports::RecipeCatalog},
};

/// The built-in four-recipe catalog.
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            1,
            "Tomato Omelette",
            &["egg", "tomato", "onion"],
            "Beat eggs, chop tomato & onion, cook on pan.",
        ),
        Recipe::new(
            2,
            "Garlic Fried Rice",
            &["rice", "garlic", "onion"],
            "Cook rice, fry with garlic & onion.",
        ),
        Recipe::new(
            3,
            "Chicken Curry",
            &["chicken", "tomato", "onion", "garlic"],
            "Fry chicken with spices, add tomato & onion, simmer.",
        ),
        Recipe::new(
            4,
            "Pancakes",
            &["milk", "egg", "flour"],
            "Mix ingredients, cook on griddle.",
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct InMemoryRecipeCatalog {
    recipes: Arc<Vec<Recipe>>,
}

impl InMemoryRecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::new(recipes),
        }
    }

    pub fn with_default_recipes() -> Self {
        Self::new(default_recipes())
    }
}

impl RecipeCatalog for InMemoryRecipeCatalog {
    async fn list(&self) -> Result<Vec<Recipe>, CoreError> {
        Ok(self.recipes.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_catalog_invariants_hold() {
        let recipes = default_recipes();
        assert_eq!(recipes.len(), 4);

        let ids: HashSet<u32> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), recipes.len());

        for recipe in &recipes {
            assert!(!recipe.ingredients.is_empty(), "{} is empty", recipe.title);
            let distinct: HashSet<&String> = recipe.ingredients.iter().collect();
            assert_eq!(distinct.len(), recipe.ingredients.len());
        }
    }

    #[tokio::test]
    async fn list_returns_the_seeded_recipes() {
        let catalog = InMemoryRecipeCatalog::with_default_recipes();
        let recipes = catalog.list().await.expect("in-memory list cannot fail");
        assert_eq!(recipes[0].title, "Tomato Omelette");
    }
}

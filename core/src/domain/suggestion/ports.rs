use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    suggestion::{
        entities::{Recipe, RecipeSuggestion},
        value_objects::SuggestRecipesInput,
    },
};

/// Catalog port: the read-only recipe collection to rank against.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeCatalog: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// Service trait for recipe suggestion business logic.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSuggestionService: Send + Sync {
    fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeSuggestion>, CoreError>> + Send;
}

use super::handlers::suggest_recipes::{__path_suggest_recipes, suggest_recipes};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use mealsnap_core::domain::suggestion::ports::RecipeSuggestionService;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_recipes))]
pub struct SuggestionApiDoc;

pub fn suggestion_routes<S>(state: AppState<S>) -> Router<AppState<S>>
where
    S: RecipeSuggestionService + Clone + Send + Sync + 'static,
{
    Router::new().route(
        &format!("{}/recipes/suggest/", state.args.server.root_path),
        post(suggest_recipes::<S>),
    )
}

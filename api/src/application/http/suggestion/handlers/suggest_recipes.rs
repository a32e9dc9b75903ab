use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
    suggestion::validators::SuggestRecipesRequest,
};
use mealsnap_core::domain::suggestion::{
    entities::RecipeSuggestion, ports::RecipeSuggestionService,
    value_objects::SuggestRecipesInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestRecipesResponse {
    /// Matching recipes, best coverage first.
    pub results: Vec<RecipeSuggestion>,
}

#[utoipa::path(
    post,
    path = "/suggest/",
    tag = "recipes",
    summary = "Suggest recipes for an ingredient set",
    description = "Ranks the catalog by how well each recipe is covered by the supplied ingredients",
    request_body = SuggestRecipesRequest,
    responses(
        (status = 200, body = SuggestRecipesResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn suggest_recipes<S>(
    State(state): State<AppState<S>>,
    Json(payload): Json<SuggestRecipesRequest>,
) -> Result<Response<SuggestRecipesResponse>, ApiError>
where
    S: RecipeSuggestionService,
{
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let results = state
        .service
        .suggest_recipes(SuggestRecipesInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestRecipesResponse { results }))
}

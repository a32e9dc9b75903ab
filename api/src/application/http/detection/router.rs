use super::handlers::detect_ingredients::{
    __path_detect_ingredients, MAX_IMAGE_SIZE, detect_ingredients,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use mealsnap_core::domain::detection::ports::IngredientDetectionService;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(detect_ingredients))]
pub struct DetectionApiDoc;

pub fn detection_routes<S>(state: AppState<S>) -> Router<AppState<S>>
where
    S: IngredientDetectionService + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            &format!("{}/ingredients/detect/", state.args.server.root_path),
            post(detect_ingredients::<S>),
        )
        // Axum caps bodies at 2MB by default; lift it to the upload cap.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024))
}

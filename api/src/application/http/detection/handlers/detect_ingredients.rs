use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};
use mealsnap_core::domain::detection::{
    ports::IngredientDetectionService, value_objects::DetectIngredientsInput,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetectIngredientsResponse {
    /// Deduplicated ingredients of the top-ranked dishes.
    pub ingredients: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/detect/",
    tag = "ingredients",
    summary = "Detect ingredients from a food photo",
    description = "Classifies the uploaded image into dishes and maps those to probable ingredients",
    responses(
        (status = 200, body = DetectIngredientsResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn detect_ingredients<S>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> Result<Response<DetectIngredientsResponse>, ApiError>
where
    S: IngredientDetectionService,
{
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let image_data = image_data.ok_or_else(|| ApiError::BadRequest("image is required".to_string()))?;

    let result = state
        .service
        .detect_ingredients(DetectIngredientsInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DetectIngredientsResponse {
        ingredients: result.ingredients,
    }))
}

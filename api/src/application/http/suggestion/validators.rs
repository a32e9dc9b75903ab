use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestRecipesRequest {
    /// Ingredients on hand. A missing field is treated as an empty pantry.
    #[serde(default)]
    #[validate(length(max = 100, message = "ingredients must contain at most 100 entries"))]
    pub ingredients: Vec<String>,
}

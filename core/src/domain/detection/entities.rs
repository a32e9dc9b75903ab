use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One ranked classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishPrediction {
    /// Class index in the model output vector.
    pub index: usize,
    /// Canonical dish label for the class.
    pub label: String,
    /// Class probability after softmax.
    pub score: f32,
}

/// Outcome of one detection request.
///
/// `ingredients` is deduplicated and lexicographically ordered so responses
/// are deterministic. `dishes` keeps the ranked predictions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionResult {
    pub dishes: Vec<DishPrediction>,
    pub ingredients: Vec<String>,
}

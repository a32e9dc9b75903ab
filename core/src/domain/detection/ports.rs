use std::future::Future;

use image::RgbImage;

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::{entities::DetectionResult, value_objects::DetectIngredientsInput},
};

/// Classifier port: wraps the pretrained image-classification model.
///
/// Returns the per-class probability vector, indexed by dish label. The
/// model handle is loaded once at startup; implementations must be safe to
/// share across concurrent requests.
#[cfg_attr(test, mockall::automock)]
pub trait ImageClassifier: Send + Sync {
    fn classify(
        &self,
        image: RgbImage,
    ) -> impl Future<Output = Result<Vec<f32>, CoreError>> + Send;
}

/// Service trait for ingredient detection business logic.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientDetectionService: Send + Sync {
    fn detect_ingredients(
        &self,
        input: DetectIngredientsInput,
    ) -> impl Future<Output = Result<DetectionResult, CoreError>> + Send;
}

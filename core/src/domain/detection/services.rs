use std::collections::BTreeSet;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::{
        entities::DetectionResult,
        helpers::top_predictions,
        ingredient_map::ingredients_for,
        ports::{ImageClassifier, IngredientDetectionService},
        value_objects::{DetectIngredientsInput, normalize_label},
    },
    suggestion::ports::RecipeCatalog,
};

/// How many ranked dishes feed the ingredient lookup.
const TOP_K: usize = 5;

impl<C, R> IngredientDetectionService for Service<C, R>
where
    C: ImageClassifier,
    R: RecipeCatalog,
{
    async fn detect_ingredients(
        &self,
        input: DetectIngredientsInput,
    ) -> Result<DetectionResult, CoreError> {
        let image = image::load_from_memory(&input.image_data)
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?
            .to_rgb8();

        let probabilities = self.classifier.classify(image).await?;
        let dishes = top_predictions(&probabilities, TOP_K);

        let mut ingredients = BTreeSet::new();
        for prediction in &dishes {
            let dish = normalize_label(&prediction.label);
            if let Some(found) = ingredients_for(&dish) {
                ingredients.extend(found.iter().map(|i| i.to_string()));
            }
        }

        tracing::debug!(
            dishes = ?dishes.iter().map(|d| d.label.as_str()).collect::<Vec<_>>(),
            "classified dishes"
        );

        Ok(DetectionResult {
            dishes,
            ingredients: ingredients.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        detection::ports::MockImageClassifier, suggestion::ports::MockRecipeCatalog,
    };

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([180, 120, 60]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut buf),
                image::ImageFormat::Png,
            )
            .expect("encode test png");
        buf
    }

    fn probabilities_with_peaks(peaks: &[(usize, f32)]) -> Vec<f32> {
        let mut probs = vec![0.0_f32; 107];
        for (index, score) in peaks {
            probs[*index] = *score;
        }
        probs
    }

    fn service_with_probabilities(probs: Vec<f32>) -> Service<MockImageClassifier, MockRecipeCatalog> {
        let mut classifier = MockImageClassifier::new();
        classifier
            .expect_classify()
            .returning(move |_| {
                let probs = probs.clone();
                Box::pin(async move { Ok(probs) })
            });
        Service::new(classifier, MockRecipeCatalog::new())
    }

    #[tokio::test]
    async fn unions_and_dedupes_ingredients_of_mapped_dishes() {
        // omelette (67) and fried_rice (44) share "onion".
        let service = service_with_probabilities(probabilities_with_peaks(&[
            (67, 0.5),
            (44, 0.3),
            (2, 0.1),
            (6, 0.05),
            (7, 0.02),
        ]));

        let result = service
            .detect_ingredients(DetectIngredientsInput {
                image_data: png_bytes(),
            })
            .await
            .expect("detection should succeed");

        assert_eq!(result.dishes[0].label, "omelette");
        assert_eq!(
            result.ingredients,
            vec!["egg", "garlic", "onion", "rice", "tomato"]
        );
    }

    #[tokio::test]
    async fn unmapped_top_dishes_yield_no_ingredients() {
        // baklava, beignets, bibimbap, cannoli, churros: none are mapped.
        let service = service_with_probabilities(probabilities_with_peaks(&[
            (2, 0.5),
            (6, 0.2),
            (7, 0.1),
            (12, 0.05),
            (23, 0.02),
        ]));

        let result = service
            .detect_ingredients(DetectIngredientsInput {
                image_data: png_bytes(),
            })
            .await
            .expect("detection should succeed");

        assert_eq!(result.dishes.len(), 5);
        assert!(result.ingredients.is_empty());
    }

    #[tokio::test]
    async fn undecodable_payload_is_an_invalid_image_error() {
        let service = service_with_probabilities(vec![0.0; 107]);

        let err = service
            .detect_ingredients(DetectIngredientsInput {
                image_data: b"definitely not an image".to_vec(),
            })
            .await
            .expect_err("decode must fail");

        assert!(matches!(err, CoreError::InvalidImage(_)));
    }

    #[tokio::test]
    async fn classifier_failure_propagates() {
        let mut classifier = MockImageClassifier::new();
        classifier.expect_classify().returning(|_| {
            Box::pin(async { Err(CoreError::InferenceFailed("model exploded".into())) })
        });
        let service = Service::new(classifier, MockRecipeCatalog::new());

        let err = service
            .detect_ingredients(DetectIngredientsInput {
                image_data: png_bytes(),
            })
            .await
            .expect_err("inference must fail");

        assert!(matches!(err, CoreError::InferenceFailed(_)));
    }
}

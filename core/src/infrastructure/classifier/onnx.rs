//! ONNX adapter for the pretrained food classifier.
//!
//! Wraps a Food-101 vision model exported to ONNX behind the
//! [`ImageClassifier`] port. The runnable plan is built once at startup and
//! shared via `Arc`; execution takes `&self`, so concurrent requests need no
//! locking. Inference runs on the blocking pool to keep async workers free.

use std::sync::Arc;

use anyhow::Context;
use image::{RgbImage, imageops::FilterType};
use tract_onnx::prelude::*;

use crate::domain::{
    common::{ClassifierConfig, entities::app_errors::CoreError},
    detection::ports::ImageClassifier,
};

/// Channel statistics the model was trained with (SigLIP-style processors
/// normalize to [-1, 1]).
const CHANNEL_MEAN: [f32; 3] = [0.5, 0.5, 0.5];
const CHANNEL_STD: [f32; 3] = [0.5, 0.5, 0.5];

#[derive(Clone)]
pub struct OnnxImageClassifier {
    plan: Arc<TypedSimplePlan<TypedModel>>,
    input_size: u32,
}

impl std::fmt::Debug for OnnxImageClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxImageClassifier")
            .field("input_size", &self.input_size)
            .finish_non_exhaustive()
    }
}

impl OnnxImageClassifier {
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, anyhow::Error> {
        let size = config.input_size as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(&config.model_path)
            .with_context(|| format!("load classifier model from {}", config.model_path))?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 3, size, size)),
            )?
            .into_optimized()?
            .into_runnable()?;

        tracing::info!(model_path = %config.model_path, input_size = config.input_size, "classifier model loaded");

        Ok(Self {
            plan: Arc::new(plan),
            input_size: config.input_size,
        })
    }

    /// Resize to the model input and normalize NCHW channels.
    fn preprocess(&self, image: &RgbImage) -> tract_ndarray::Array4<f32> {
        let size = self.input_size as usize;
        let resized = image::imageops::resize(
            image,
            self.input_size,
            self.input_size,
            FilterType::CatmullRom,
        );

        let mut input = tract_ndarray::Array4::<f32>::zeros((1, 3, size, size));
        for (x, y, pixel) in resized.enumerate_pixels() {
            for channel in 0..3 {
                let value = pixel[channel] as f32 / 255.0;
                input[[0, channel, y as usize, x as usize]] =
                    (value - CHANNEL_MEAN[channel]) / CHANNEL_STD[channel];
            }
        }
        input
    }
}

impl ImageClassifier for OnnxImageClassifier {
    async fn classify(&self, image: RgbImage) -> Result<Vec<f32>, CoreError> {
        let input = self.preprocess(&image);
        let plan = Arc::clone(&self.plan);

        let logits = tokio::task::spawn_blocking(move || -> Result<Vec<f32>, CoreError> {
            let outputs = plan
                .run(tvec!(input.into_tensor().into()))
                .map_err(|e| CoreError::InferenceFailed(e.to_string()))?;
            let view = outputs[0]
                .to_array_view::<f32>()
                .map_err(|e| CoreError::InferenceFailed(e.to_string()))?;
            Ok(view.iter().copied().collect())
        })
        .await
        .map_err(|e| CoreError::InferenceFailed(e.to_string()))??;

        Ok(softmax(&logits))
    }
}

/// Numerically stable softmax over the raw model logits.
fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 {
        return vec![0.0; logits.len()];
    }
    exps.iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one_and_preserves_order() {
        let probs = softmax(&[1.0, 3.0, 2.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probs[1] > probs[2] && probs[2] > probs[0]);
    }

    #[test]
    fn softmax_handles_large_logits() {
        let probs = softmax(&[1000.0, 1000.0]);
        assert!((probs[0] - 0.5).abs() < 1e-6);
        assert!((probs[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn softmax_of_empty_slice_is_empty() {
        assert!(softmax(&[]).is_empty());
    }
}

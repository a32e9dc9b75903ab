#![allow(dead_code)]

use std::future::Future;
use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use image::RgbImage;

use mealsnap_api::application::http::server::app_state::AppState;
use mealsnap_api::application::http::server::http_server;
use mealsnap_api::args::Args;
use mealsnap_core::domain::common::entities::app_errors::CoreError;
use mealsnap_core::domain::common::services::Service;
use mealsnap_core::domain::detection::ports::ImageClassifier;
use mealsnap_core::infrastructure::catalog::InMemoryRecipeCatalog;

/// Classifier stand-in: the real router and domain services run, only the
/// model inference is replaced by a canned outcome.
#[derive(Debug, Clone)]
pub struct FixtureClassifier {
    outcome: Result<Vec<f32>, CoreError>,
}

impl FixtureClassifier {
    pub fn with_probabilities(probabilities: Vec<f32>) -> Self {
        Self {
            outcome: Ok(probabilities),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(CoreError::InferenceFailed(message.to_string())),
        }
    }
}

impl ImageClassifier for FixtureClassifier {
    fn classify(
        &self,
        _image: RgbImage,
    ) -> impl Future<Output = Result<Vec<f32>, CoreError>> + Send {
        let outcome = self.outcome.clone();
        async move { outcome }
    }
}

/// Probability vector over the 107 classes with the given peaks set.
pub fn peaked_probabilities(peaks: &[(usize, f32)]) -> Vec<f32> {
    let mut probabilities = vec![0.0_f32; 107];
    for (index, score) in peaks {
        probabilities[*index] = *score;
    }
    probabilities
}

/// A small valid PNG payload.
pub fn png_bytes() -> Vec<u8> {
    let img = RgbImage::from_pixel(8, 8, image::Rgb([200, 140, 70]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut buf),
            image::ImageFormat::Png,
        )
        .expect("encode test png");
    buf
}

pub fn test_server(classifier: FixtureClassifier) -> TestServer {
    let args = Arc::new(Args::try_parse_from(["mealsnap-api"]).expect("default args parse"));
    let service = Service::new(classifier, InMemoryRecipeCatalog::with_default_recipes());
    let state = AppState::new(args, service);

    let router = http_server::router(state).expect("router builds");
    TestServer::new(router).expect("test server starts")
}

use crate::domain::common::{MealsnapConfig, services::Service};
use crate::infrastructure::{catalog::InMemoryRecipeCatalog, classifier::OnnxImageClassifier};

pub type MealsnapService = Service<OnnxImageClassifier, InMemoryRecipeCatalog>;

/// Build the long-lived service handle: load the classifier model and seed
/// the in-memory catalog. Called once at startup; the result is cloned into
/// request handlers.
pub async fn create_service(config: MealsnapConfig) -> Result<MealsnapService, anyhow::Error> {
    let classifier = OnnxImageClassifier::from_config(&config.classifier)?;
    let catalog = InMemoryRecipeCatalog::with_default_recipes();

    Ok(Service::new(classifier, catalog))
}

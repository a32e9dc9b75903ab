mod helpers;

use serde_json::{Value, json};

use helpers::{FixtureClassifier, test_server};

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server(FixtureClassifier::with_probabilities(vec![0.0; 107]));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({"status": "ok"}));
}

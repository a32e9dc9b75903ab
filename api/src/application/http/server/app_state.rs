use std::sync::Arc;

use crate::args::Args;

/// Shared handler state: parsed configuration plus the long-lived service
/// handle (classifier model + catalog), both read-only after startup.
///
/// Generic over the service so integration tests can drive the real router
/// with the inference port stubbed out.
#[derive(Clone)]
pub struct AppState<S> {
    pub args: Arc<Args>,
    pub service: S,
}

impl<S> AppState<S> {
    pub fn new(args: Arc<Args>, service: S) -> Self {
        Self { args, service }
    }
}

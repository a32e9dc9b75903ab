use thiserror::Error;

/// Error taxonomy shared by every domain service.
///
/// `InvalidImage` is a client error (the payload could not be decoded);
/// the remaining variants are server-side failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("failed to decode image: {0}")]
    InvalidImage(String),

    #[error("classifier inference failed: {0}")]
    InferenceFailed(String),

    #[error("recipe catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("internal server error")]
    InternalServerError,
}

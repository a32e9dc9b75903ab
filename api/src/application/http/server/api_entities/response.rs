use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Success envelope: the status code is the envelope, the body is the
/// serialized payload itself.
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}

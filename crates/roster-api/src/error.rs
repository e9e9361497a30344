//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! | Failure | Status | Body |
//! |---------|--------|------|
//! | validation, conversion, malformed id, unreadable body | 400 | `{"message", "type"}` |
//! | unknown id | 404 | `{"message"}` |
//! | store failure, handler panic | 500 | `{"message": "Something went wrong!"}` |

use std::any::Any;

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::Error;
use serde_json::json;
use thiserror::Error;

/// Message returned for every unhandled failure; details go to the log only.
pub const UNHANDLED_MESSAGE: &str = "Something went wrong!";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] Error),

  /// The request body was not JSON of the expected shape.
  #[error("{0}")]
  Body(String),
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { ApiError::Body(rejection.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::Body(m) => (
        StatusCode::BAD_REQUEST,
        json!({ "message": m, "type": "ValidationError" }),
      ),
      ApiError::Core(e) => match e.root() {
        Error::NotFound { .. } => {
          (StatusCode::NOT_FOUND, json!({ "message": e.to_string() }))
        }
        Error::Store(_) => {
          tracing::error!(error = %e, "unhandled failure");
          (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": UNHANDLED_MESSAGE }),
          )
        }
        _ => (
          StatusCode::BAD_REQUEST,
          json!({ "message": e.to_string(), "type": e.kind() }),
        ),
      },
    };
    (status, Json(body)).into_response()
  }
}

/// Turn a caught handler panic into the opaque 500.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
  let detail = payload
    .downcast_ref::<&str>()
    .map(|s| (*s).to_owned())
    .or_else(|| payload.downcast_ref::<String>().cloned())
    .unwrap_or_else(|| "non-string panic payload".to_owned());
  tracing::error!(panic = %detail, "handler panicked");
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(json!({ "message": UNHANDLED_MESSAGE })),
  )
    .into_response()
}

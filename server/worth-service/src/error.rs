//! HTTP error type; handlers return `Result<T, AppError>`.

use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use hustle_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Internal server error: {0}")]
  Internal(String),
}

impl From<EngineError> for AppError {
  fn from(e: EngineError) -> Self {
    match e {
      EngineError::Validation { .. } | EngineError::Json(_) => Self::Validation(e.to_string()),
      EngineError::Io(_) => Self::Internal(e.to_string()),
    }
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    Self::Validation(rejection.body_text())
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let (status, code, message) = match &self {
      AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
      AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
      AppError::Internal(msg) => {
        tracing::error!("Internal error: {msg}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "INTERNAL_ERROR",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let body = Json(json!({
      "error": {
        "code": code,
        "message": message
      }
    }));
    (status, body).into_response()
  }
}

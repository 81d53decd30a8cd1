//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("invalid credentials")]
  Unauthorized,

  #[error("forbidden: {0}")]
  Forbidden(&'static str),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("internal error: {0}")]
  Internal(String),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, self.to_string())
      }
      ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, (*m).to_string()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

impl From<demerit_core::Error> for ApiError {
  fn from(e: demerit_core::Error) -> Self {
    use demerit_core::Error as E;
    match e {
      E::RecordNotFound(id) => Self::NotFound(format!("record {id} not found")),
      E::EmptyField(_) => Self::BadRequest(e.to_string()),
      E::StaleLogin => {
        Self::Conflict("a newer login has already committed".to_string())
      }
    }
  }
}

impl From<demerit_auth::Error> for ApiError {
  fn from(e: demerit_auth::Error) -> Self {
    use demerit_auth::Error as E;
    match e {
      E::InvalidCredentials => Self::Unauthorized,
      E::AccountExists(_) => Self::Conflict(e.to_string()),
      E::Hash(m) => Self::Internal(m),
      other => Self::BadRequest(other.to_string()),
    }
  }
}

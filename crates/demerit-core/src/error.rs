//! Error types for `demerit-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("record not found: {0}")]
  RecordNotFound(Uuid),

  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("stale login: a newer login or logout has already committed")]
  StaleLogin,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

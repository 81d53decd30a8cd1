//! Error types for `demerit-auth`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// Carries no detail about which part of the credential pair was wrong.
  #[error("invalid credentials")]
  InvalidCredentials,

  #[error("an account with id {0:?} already exists")]
  AccountExists(String),

  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("invalid email address")]
  InvalidEmail,

  #[error("password must be at least {min} characters", min = crate::password::MIN_PASSWORD_LEN)]
  PasswordTooShort,

  #[error("year must be between 1 and 4")]
  YearOutOfRange,

  #[error("semester must be between 1 and 8")]
  SemesterOutOfRange,

  #[error("password hashing failed: {0}")]
  Hash(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

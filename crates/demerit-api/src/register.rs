//! Handlers for `/register` — account creation in the identity directory.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/register/student` | Body: [`RegisterStudentBody`] |
//! | `POST` | `/register/staff` | Body: [`RegisterStaffBody`] |
//!
//! Registration does not sign the new account in; the caller signs in
//! through `POST /session` afterwards.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use demerit_auth::{RegisterStaff, RegisterStudent};
use demerit_core::store::RecordStore;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct RegisterStudentBody {
  pub student_id: String,
  pub name:       String,
  pub email:      String,
  pub password:   String,
  pub department: String,
  pub year:       u8,
  pub semester:   u8,
}

/// `POST /register/student` — returns 201 + the identity the account will
/// resolve to.
pub async fn student<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<RegisterStudentBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let identity = state.directory.register_student(RegisterStudent {
    student_id: body.student_id,
    name:       body.name,
    email:      body.email,
    password:   body.password,
    department: body.department,
    year:       body.year,
    semester:   body.semester,
  })?;
  tracing::info!(id = %identity.id(), "student account registered");
  Ok((StatusCode::CREATED, Json(identity)))
}

#[derive(Debug, Deserialize)]
pub struct RegisterStaffBody {
  pub staff_id:   String,
  pub name:       String,
  pub email:      String,
  pub password:   String,
  pub department: String,
}

/// `POST /register/staff` — returns 201 + the identity the account will
/// resolve to.
pub async fn staff<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<RegisterStaffBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let identity = state.directory.register_staff(RegisterStaff {
    staff_id:   body.staff_id,
    name:       body.name,
    email:      body.email,
    password:   body.password,
    department: body.department,
  })?;
  tracing::info!(id = %identity.id(), "staff account registered");
  Ok((StatusCode::CREATED, Json(identity)))
}

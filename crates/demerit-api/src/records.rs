//! Handlers for `/records` — the record store's HTTP surface.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/records` | Staff: every record; students: their own only |
//! | `POST` | `/records` | Staff only; body: [`NewRecordBody`] |
//! | `POST` | `/records/{id}/toggle` | Staff only; flips the status |
//! | `GET`  | `/records/stats` | Staff only; derived aggregates |
//!
//! All routes sit behind the access gate; the role checks here are on top of
//! it.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use demerit_core::{
  identity::Role,
  record::{NewRecord, PunishmentRecord, RecordStatus},
  store::RecordStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, error::ApiError, gate::Gated};

fn require_staff(role: Role, action: &'static str) -> Result<(), ApiError> {
  match role {
    Role::Staff => Ok(()),
    Role::Student => Err(ApiError::Forbidden(action)),
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /records` — staff see the full collection; a student sees only their
/// own records, so nothing of another subject ever leaves the store.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Gated(identity): Gated,
) -> Result<Json<Vec<PunishmentRecord>>, ApiError>
where
  S: RecordStore,
{
  let records = match identity.role() {
    Role::Staff => state.records.list_records().await?,
    Role::Student => state.records.records_for(identity.id()).await?,
  };
  Ok(Json(records))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /records`.
#[derive(Debug, Deserialize)]
pub struct NewRecordBody {
  pub student_id:   String,
  pub student_name: String,
  #[serde(rename = "type")]
  pub kind:         String,
  #[serde(default)]
  pub description:  String,
}

impl From<NewRecordBody> for NewRecord {
  fn from(b: NewRecordBody) -> Self {
    NewRecord {
      student_id:   b.student_id,
      student_name: b.student_name,
      kind:         b.kind,
      description:  b.description,
    }
  }
}

/// `POST /records` — returns 201 + the stored record.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Gated(identity): Gated,
  Json(body): Json<NewRecordBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  require_staff(identity.role(), "only staff may create records")?;

  let record = state.records.add_record(NewRecord::from(body)).await?;
  tracing::info!(record_id = %record.record_id, student_id = %record.student_id, "record created");
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Toggle ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
  pub record_id: Uuid,
  pub status:    RecordStatus,
}

/// `POST /records/{id}/toggle` — flip `active ⇄ resolved`; 404 for an
/// unknown id.
pub async fn toggle<S>(
  State(state): State<AppState<S>>,
  Gated(identity): Gated,
  Path(id): Path<Uuid>,
) -> Result<Json<ToggleResponse>, ApiError>
where
  S: RecordStore,
{
  require_staff(identity.role(), "only staff may change a record's status")?;

  let status = state.records.toggle_status(id).await?;
  Ok(Json(ToggleResponse { record_id: id, status }))
}

// ─── Stats ────────────────────────────────────────────────────────────────────

/// Derived aggregates for the staff overview. Recomputed per request.
#[derive(Debug, Serialize)]
pub struct RecordStats {
  pub active:            usize,
  pub resolved:          usize,
  pub total:             usize,
  pub students_involved: usize,
}

/// `GET /records/stats`
pub async fn stats<S>(
  State(state): State<AppState<S>>,
  Gated(identity): Gated,
) -> Result<Json<RecordStats>, ApiError>
where
  S: RecordStore,
{
  require_staff(identity.role(), "record statistics are a staff view")?;

  let active = state.records.count_by_status(RecordStatus::Active).await?;
  let resolved = state
    .records
    .count_by_status(RecordStatus::Resolved)
    .await?;
  let students_involved = state.records.distinct_student_count().await?;

  Ok(Json(RecordStats {
    active,
    resolved,
    total: active + resolved,
    students_involved,
  }))
}

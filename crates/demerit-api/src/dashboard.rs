//! Handler for `/dashboard` — the view composer's HTTP surface.
//!
//! Screen selection itself is the pure mapping in
//! [`demerit_core::view::select_screen`]; this handler materialises the
//! selected screen's payload from the two stores.

use axum::{
  Json,
  extract::{Query, State},
};
use demerit_core::{
  identity::Identity,
  record::{PunishmentRecord, RecordStatus},
  store::RecordStore,
  view::{DashboardView, Screen, select_screen},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError, gate::Gated};

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
  /// Defaults to the overview, the dashboard's landing view.
  #[serde(default = "default_view")]
  pub view: DashboardView,
}

fn default_view() -> DashboardView { DashboardView::Overview }

/// The materialised payload for one screen.
#[derive(Debug, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenPayload {
  StudentOverview {
    user:     Identity,
    active:   usize,
    resolved: usize,
  },
  StaffOverview {
    user:              Identity,
    active_cases:      usize,
    students_involved: usize,
  },
  StudentRecords {
    records: Vec<PunishmentRecord>,
  },
  StaffRecords {
    records: Vec<PunishmentRecord>,
  },
  Profile {
    user: Identity,
  },
}

/// `GET /dashboard[?view=overview|records|profile]`
pub async fn show<S>(
  State(state): State<AppState<S>>,
  Gated(identity): Gated,
  Query(params): Query<DashboardParams>,
) -> Result<Json<ScreenPayload>, ApiError>
where
  S: RecordStore,
{
  let payload = match select_screen(identity.role(), params.view) {
    Screen::StudentOverview => {
      let own = state.records.records_for(identity.id()).await?;
      let active = own.iter().filter(|r| r.status.is_active()).count();
      ScreenPayload::StudentOverview {
        resolved: own.len() - active,
        active,
        user: identity,
      }
    }
    Screen::StaffOverview => ScreenPayload::StaffOverview {
      active_cases: state
        .records
        .count_by_status(RecordStatus::Active)
        .await?,
      students_involved: state.records.distinct_student_count().await?,
      user: identity,
    },
    Screen::StudentRecords => ScreenPayload::StudentRecords {
      records: state.records.records_for(identity.id()).await?,
    },
    Screen::StaffRecords => ScreenPayload::StaffRecords {
      records: state.records.list_records().await?,
    },
    Screen::Profile => ScreenPayload::Profile { user: identity },
  };

  Ok(Json(payload))
}

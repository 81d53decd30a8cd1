//! Handlers for `/session` — sign-in, sign-out, and the current identity.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/session` | Body: `{"id":"…","password":"…"}` |
//! | `DELETE` | `/session` | Idempotent; always 204 |
//! | `GET`    | `/session` | Current identity, or `{"authenticated":false}` |

use axum::{Json, extract::State, http::StatusCode};
use demerit_auth::IdentityVerifier as _;
use demerit_core::{identity::Identity, store::RecordStore};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

// ─── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  /// Account id, or the email it was registered with.
  pub id:       String,
  pub password: String,
}

/// `POST /session` — verify credentials against the directory and sign in.
///
/// The attempt is opened before the (potentially slow) credential check and
/// committed after it, so a late resolution can never clobber a session state
/// that changed in between.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<Identity>, ApiError>
where
  S: RecordStore,
{
  let attempt = state.session.begin_login();

  let identity = state.directory.verify(&body.id, &body.password).await?;

  state.session.complete_login(attempt, identity.clone())?;
  tracing::info!(id = %identity.id(), role = ?identity.role(), "signed in");
  Ok(Json(identity))
}

// ─── Logout ───────────────────────────────────────────────────────────────────

/// `DELETE /session` — clear the session. Logging out while anonymous is
/// still a 204.
pub async fn logout<S>(State(state): State<AppState<S>>) -> StatusCode
where
  S: RecordStore,
{
  state.session.logout();
  StatusCode::NO_CONTENT
}

// ─── Current identity ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionInfo {
  pub authenticated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user:          Option<Identity>,
}

/// `GET /session` — who, if anyone, is signed in.
pub async fn me<S>(State(state): State<AppState<S>>) -> Json<SessionInfo>
where
  S: RecordStore,
{
  let user = state.session.current_user();
  Json(SessionInfo { authenticated: user.is_some(), user })
}

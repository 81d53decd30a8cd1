//! The access gate — evaluated on every request into the protected area.
//!
//! The gate is stateless: each extraction reads the session store afresh and
//! never caches the outcome. Unauthenticated requests are answered with a
//! redirect to the public entry point; the protected handler never runs.

use axum::{
  extract::FromRequestParts,
  http::request::Parts,
  response::{IntoResponse, Redirect, Response},
};
use demerit_core::{identity::Identity, store::RecordStore};

use crate::AppState;

/// Where unauthenticated traffic is sent.
pub const PUBLIC_ENTRY: &str = "/";

/// Present in a handler's arguments means the request passed the gate;
/// carries the identity the session held at evaluation time.
pub struct Gated(pub Identity);

/// Rejection produced by the gate: a 303 redirect to [`PUBLIC_ENTRY`].
#[derive(Debug)]
pub struct RedirectToEntry;

impl IntoResponse for RedirectToEntry {
  fn into_response(self) -> Response {
    Redirect::to(PUBLIC_ENTRY).into_response()
  }
}

impl<S> FromRequestParts<AppState<S>> for Gated
where
  S: RecordStore + 'static,
{
  type Rejection = RedirectToEntry;

  async fn from_request_parts(
    _parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    match state.session.current_user() {
      Some(identity) => Ok(Gated(identity)),
      None => Err(RedirectToEntry),
    }
  }
}

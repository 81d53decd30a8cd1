//! JSON HTTP layer for the demerit record system.
//!
//! Exposes an axum [`Router`] over the session store, the identity directory,
//! and any [`RecordStore`] backend. Every route under the authenticated area
//! passes through the access gate in [`gate`]; unauthenticated traffic is
//! redirected to the public entry point.

pub mod dashboard;
pub mod error;
pub mod gate;
pub mod records;
pub mod register;
pub mod session;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use demerit_auth::Directory;
use demerit_core::{session::SessionStore, store::RecordStore};
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `DEMERIT_*` environment.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Register the demo accounts at startup. On by default.
  #[serde(default = "default_seed")]
  pub seed_demo_accounts: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_seed() -> bool { true }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers. Constructed once in the
/// binary and passed in explicitly — there are no globals.
pub struct AppState<S> {
  pub session:   Arc<SessionStore>,
  pub records:   Arc<S>,
  pub directory: Arc<Directory>,
}

impl<S> AppState<S> {
  pub fn new(session: SessionStore, records: S, directory: Directory) -> Self {
    Self {
      session:   Arc::new(session),
      records:   Arc::new(records),
      directory: Arc::new(directory),
    }
  }
}

// Manual impl: `S` itself need not be `Clone`, only the `Arc`s are cloned.
impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      session:   self.session.clone(),
      records:   self.records.clone(),
      directory: self.directory.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// Public: session management and registration. Protected (gated):
/// the dashboard and everything under `/records`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RecordStore + 'static,
{
  Router::new()
    // Session
    .route(
      "/session",
      get(session::me::<S>)
        .post(session::login::<S>)
        .delete(session::logout::<S>),
    )
    // Registration
    .route("/register/student", post(register::student::<S>))
    .route("/register/staff", post(register::staff::<S>))
    // Dashboard (gated)
    .route("/dashboard", get(dashboard::show::<S>))
    // Records (gated)
    .route("/records", get(records::list::<S>).post(records::create::<S>))
    .route("/records/{id}/toggle", post(records::toggle::<S>))
    .route("/records/stats", get(records::stats::<S>))
    .with_state(state)
}

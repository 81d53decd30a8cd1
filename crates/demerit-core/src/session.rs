//! Session — process-wide authentication state.
//!
//! One `SessionStore` is constructed at startup and threaded through
//! explicitly; it is the single source of truth for who is signed in. The
//! store holds either no identity (anonymous) or exactly one. There is no
//! observable "authenticating" state: a pending credential check lives in the
//! caller until it resolves through [`SessionStore::complete_login`].

use std::sync::Mutex;

use crate::{Error, Result, identity::Identity};

/// Handle for an in-flight credential check, issued by
/// [`SessionStore::begin_login`].
///
/// The attempt captures the session epoch at issuance. Completion is refused
/// if any login or logout has committed since, so a slow credential check can
/// never overwrite a newer session state.
#[derive(Debug, Clone, Copy)]
pub struct LoginAttempt {
  epoch: u64,
}

#[derive(Debug)]
struct Inner {
  user:  Option<Identity>,
  /// Bumped on every committed login and every logout that cleared a user.
  epoch: u64,
}

/// The process-wide session store.
#[derive(Debug)]
pub struct SessionStore {
  inner: Mutex<Inner>,
}

impl SessionStore {
  /// An empty (anonymous) session.
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(Inner { user: None, epoch: 0 }),
    }
  }

  /// Replace the current identity unconditionally. The store performs no
  /// validation of the supplied identity — callers are responsible for
  /// supplying a well-formed one.
  pub fn login(&self, identity: Identity) {
    let mut inner = self.lock();
    inner.user = Some(identity);
    inner.epoch += 1;
  }

  /// Clear the identity. Idempotent: logging out while anonymous is a no-op.
  pub fn logout(&self) {
    let mut inner = self.lock();
    if inner.user.take().is_some() {
      inner.epoch += 1;
    }
  }

  /// Start a two-phase login for an asynchronous credential check.
  pub fn begin_login(&self) -> LoginAttempt {
    LoginAttempt { epoch: self.lock().epoch }
  }

  /// Commit a two-phase login. Fails with [`Error::StaleLogin`] if a newer
  /// login or logout has committed since the attempt began; the session is
  /// left untouched in that case.
  pub fn complete_login(
    &self,
    attempt: LoginAttempt,
    identity: Identity,
  ) -> Result<()> {
    let mut inner = self.lock();
    if inner.epoch != attempt.epoch {
      return Err(Error::StaleLogin);
    }
    inner.user = Some(identity);
    inner.epoch += 1;
    Ok(())
  }

  pub fn current_user(&self) -> Option<Identity> { self.lock().user.clone() }

  pub fn is_authenticated(&self) -> bool { self.lock().user.is_some() }

  fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
    // A poisoned session lock means a panic mid-mutation; nothing can be
    // salvaged, so propagate the panic.
    self.inner.lock().expect("session lock poisoned")
  }
}

impl Default for SessionStore {
  fn default() -> Self { Self::new() }
}

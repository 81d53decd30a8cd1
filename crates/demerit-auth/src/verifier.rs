//! The `IdentityVerifier` trait — the seam to the identity backend.

use std::future::Future;

use demerit_core::identity::Identity;

use crate::Result;

/// Abstraction over a credential-verification backend.
///
/// Given an id and password, resolves exactly once to either a well-formed
/// [`Identity`] or a failure reason. The session core never sees credentials
/// or a pending state — callers commit the resolved outcome through the
/// session store's two-phase login.
pub trait IdentityVerifier: Send + Sync {
  fn verify<'a>(
    &'a self,
    id: &'a str,
    password: &'a str,
  ) -> impl Future<Output = Result<Identity>> + Send + 'a;
}

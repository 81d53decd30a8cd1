//! Identity directory and credential verification.
//!
//! This crate stands in for the external identity backend: it stores
//! registered accounts with argon2 password hashes and resolves credentials
//! to a well-formed [`demerit_core::identity::Identity`] or a failure reason.
//! It is the only place that ever sees a password; the session core sees
//! resolved identities only.

pub mod directory;
pub mod error;
pub mod password;
pub mod verifier;

pub use directory::{Directory, RegisterStaff, RegisterStudent};
pub use error::{Error, Result};
pub use verifier::IdentityVerifier;

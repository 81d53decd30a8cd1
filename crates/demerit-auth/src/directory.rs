//! [`Directory`] — the in-process account directory.
//!
//! Holds registered accounts keyed by id. Registration validates email
//! shape, password length, and student year/semester ranges, and hashes the
//! password before storage.

use std::{collections::HashMap, sync::RwLock};

use demerit_core::identity::{Identity, StaffIdentity, StudentIdentity};

use crate::{
  Error, Result,
  password::{self, MIN_PASSWORD_LEN},
  verifier::IdentityVerifier,
};

// ─── Registration inputs ─────────────────────────────────────────────────────

/// Input to [`Directory::register_student`].
#[derive(Debug, Clone)]
pub struct RegisterStudent {
  pub student_id: String,
  pub name:       String,
  pub email:      String,
  pub password:   String,
  pub department: String,
  pub year:       u8,
  pub semester:   u8,
}

/// Input to [`Directory::register_staff`].
#[derive(Debug, Clone)]
pub struct RegisterStaff {
  pub staff_id:   String,
  pub name:       String,
  pub email:      String,
  pub password:   String,
  pub department: String,
}

// ─── Directory ───────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Account {
  identity:      Identity,
  email:         String,
  password_hash: String,
}

/// An in-memory account directory with argon2-hashed passwords.
#[derive(Debug, Default)]
pub struct Directory {
  accounts: RwLock<HashMap<String, Account>>,
}

impl Directory {
  pub fn new() -> Self { Self::default() }

  /// Register a student account. Returns the identity it will resolve to.
  pub fn register_student(&self, input: RegisterStudent) -> Result<Identity> {
    validate_common(&input.student_id, &input.name, &input.department)?;
    validate_email(&input.email)?;
    validate_password(&input.password)?;
    if !(1..=4).contains(&input.year) {
      return Err(Error::YearOutOfRange);
    }
    if !(1..=8).contains(&input.semester) {
      return Err(Error::SemesterOutOfRange);
    }

    let identity = Identity::Student(StudentIdentity {
      id:         input.student_id,
      name:       input.name,
      department: input.department,
      year:       input.year,
      semester:   input.semester,
    });

    let password_hash = password::hash_password(&input.password)?;
    self.insert(identity.clone(), input.email, password_hash)?;
    Ok(identity)
  }

  /// Register a staff account. Returns the identity it will resolve to.
  pub fn register_staff(&self, input: RegisterStaff) -> Result<Identity> {
    validate_common(&input.staff_id, &input.name, &input.department)?;
    validate_email(&input.email)?;
    validate_password(&input.password)?;

    let identity = Identity::Staff(StaffIdentity {
      id:         input.staff_id,
      name:       input.name,
      department: input.department,
    });

    let password_hash = password::hash_password(&input.password)?;
    self.insert(identity.clone(), input.email, password_hash)?;
    Ok(identity)
  }

  /// Seed an account with a pre-hashed password. Used for the demo accounts
  /// supplied through server configuration; skips registration validation.
  pub fn seed(
    &self,
    identity: Identity,
    email: impl Into<String>,
    password_hash: impl Into<String>,
  ) -> Result<()> {
    self.insert(identity, email.into(), password_hash.into())
  }

  fn insert(
    &self,
    identity: Identity,
    email: String,
    password_hash: String,
  ) -> Result<()> {
    let id = identity.id().to_owned();
    let mut accounts = self.lock_write();
    if accounts.contains_key(&id) {
      return Err(Error::AccountExists(id));
    }
    accounts.insert(id, Account { identity, email, password_hash });
    Ok(())
  }

  fn lock_write(
    &self,
  ) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Account>> {
    self.accounts.write().expect("account lock poisoned")
  }
}

impl IdentityVerifier for Directory {
  /// Looks up by id first, then by the registered email.
  async fn verify(&self, id: &str, password: &str) -> Result<Identity> {
    let accounts = self.accounts.read().expect("account lock poisoned");
    let account = accounts
      .get(id)
      .or_else(|| accounts.values().find(|a| a.email == id))
      .ok_or(Error::InvalidCredentials)?;

    if !password::verify_password(password, &account.password_hash) {
      return Err(Error::InvalidCredentials);
    }
    Ok(account.identity.clone())
  }
}

// ─── Field validation ────────────────────────────────────────────────────────

fn validate_common(id: &str, name: &str, department: &str) -> Result<()> {
  for (field, value) in [("id", id), ("name", name), ("department", department)]
  {
    if value.trim().is_empty() {
      return Err(Error::EmptyField(field));
    }
  }
  Ok(())
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
fn validate_email(email: &str) -> Result<()> {
  let Some((local, domain)) = email.split_once('@') else {
    return Err(Error::InvalidEmail);
  };
  if local.is_empty() || email.chars().any(char::is_whitespace) {
    return Err(Error::InvalidEmail);
  }
  let valid_domain = domain
    .split('.')
    .filter(|part| !part.is_empty())
    .count()
    >= 2
    && !domain.starts_with('.')
    && !domain.ends_with('.');
  if !valid_domain {
    return Err(Error::InvalidEmail);
  }
  Ok(())
}

fn validate_password(password: &str) -> Result<()> {
  if password.len() < MIN_PASSWORD_LEN {
    return Err(Error::PasswordTooShort);
  }
  Ok(())
}

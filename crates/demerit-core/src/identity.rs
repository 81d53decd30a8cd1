//! Identity — the authenticated principal for one session.
//!
//! The two roles carry different profile fields, so the identity is a tagged
//! variant rather than one struct with optional fields: a staff identity
//! cannot hold a year or semester at all.

use serde::{Deserialize, Serialize};

/// The role an identity holds. Immutable for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Student,
  Staff,
}

/// Profile fields for a student principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
  pub id:         String,
  pub name:       String,
  pub department: String,
  /// Year of study, 1–4.
  pub year:       u8,
  /// Semester, 1–8.
  pub semester:   u8,
}

/// Profile fields for a staff principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffIdentity {
  pub id:         String,
  pub name:       String,
  pub department: String,
}

/// The authenticated principal. Serialises with the role as the tag, so the
/// wire form matches the shape the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Identity {
  Student(StudentIdentity),
  Staff(StaffIdentity),
}

impl Identity {
  pub fn role(&self) -> Role {
    match self {
      Self::Student(_) => Role::Student,
      Self::Staff(_) => Role::Staff,
    }
  }

  pub fn id(&self) -> &str {
    match self {
      Self::Student(s) => &s.id,
      Self::Staff(s) => &s.id,
    }
  }

  pub fn name(&self) -> &str {
    match self {
      Self::Student(s) => &s.name,
      Self::Staff(s) => &s.name,
    }
  }

  pub fn department(&self) -> &str {
    match self {
      Self::Student(s) => &s.department,
      Self::Staff(s) => &s.department,
    }
  }
}

//! Punishment records — the domain unit of the record store.
//!
//! A record is created once and never deleted. The only mutable field is its
//! status, and the store's toggle operation is the only path that changes it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two-state lifecycle of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
  Active,
  Resolved,
}

impl RecordStatus {
  /// The other state. Applying this twice restores the original status.
  pub fn toggled(self) -> Self {
    match self {
      Self::Active => Self::Resolved,
      Self::Resolved => Self::Active,
    }
  }

  pub fn is_active(self) -> bool { matches!(self, Self::Active) }
}

/// A single disciplinary entry.
///
/// `record_id` and `date` never change after creation. `student_id` is a
/// denormalised reference — the store does not check it against the identity
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunishmentRecord {
  pub record_id:    Uuid,
  pub student_id:   String,
  pub student_name: String,
  #[serde(rename = "type")]
  pub kind:         String,
  pub description:  String,
  pub date:         NaiveDate,
  pub status:       RecordStatus,
}

/// Input to [`crate::store::RecordStore::add_record`].
/// `record_id`, `date`, and `status` are assigned by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone)]
pub struct NewRecord {
  pub student_id:   String,
  pub student_name: String,
  pub kind:         String,
  pub description:  String,
}

impl NewRecord {
  pub fn new(
    student_id: impl Into<String>,
    student_name: impl Into<String>,
    kind: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      student_id:   student_id.into(),
      student_name: student_name.into(),
      kind:         kind.into(),
      description:  description.into(),
    }
  }

  /// Check the identifying fields are non-empty. The description may be
  /// blank — a bare classification like "Tardy" is a valid entry.
  pub fn validate(&self) -> crate::Result<()> {
    for (field, value) in [
      ("student_id", &self.student_id),
      ("student_name", &self.student_name),
      ("type", &self.kind),
    ] {
      if value.trim().is_empty() {
        return Err(crate::Error::EmptyField(field));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toggled_is_an_involution() {
    assert_eq!(RecordStatus::Active.toggled(), RecordStatus::Resolved);
    assert_eq!(RecordStatus::Resolved.toggled(), RecordStatus::Active);
    assert_eq!(RecordStatus::Active.toggled().toggled(), RecordStatus::Active);
  }

  #[test]
  fn validate_rejects_blank_identifying_fields() {
    let blank_id = NewRecord::new("", "Jane", "Warning", "late work");
    assert_eq!(
      blank_id.validate(),
      Err(crate::Error::EmptyField("student_id"))
    );

    let blank_name = NewRecord::new("S1", "  ", "Warning", "late work");
    assert_eq!(
      blank_name.validate(),
      Err(crate::Error::EmptyField("student_name"))
    );

    let blank_kind = NewRecord::new("S1", "Jane", "", "late work");
    assert_eq!(blank_kind.validate(), Err(crate::Error::EmptyField("type")));
  }

  #[test]
  fn validate_allows_empty_description() {
    let input = NewRecord::new("S1", "Jane", "Tardy", "");
    assert!(input.validate().is_ok());
  }

  #[test]
  fn kind_serialises_as_type() {
    let record = PunishmentRecord {
      record_id:    Uuid::new_v4(),
      student_id:   "S1".into(),
      student_name: "Jane".into(),
      kind:         "Warning".into(),
      description:  "late work".into(),
      date:         NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
      status:       RecordStatus::Active,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "Warning");
    assert_eq!(json["status"], "active");
  }
}

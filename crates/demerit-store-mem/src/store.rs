//! [`MemoryStore`] — the in-memory implementation of [`RecordStore`].

use std::{collections::HashSet, sync::RwLock};

use chrono::Utc;
use uuid::Uuid;

use demerit_core::{
  Error, Result,
  record::{NewRecord, PunishmentRecord, RecordStatus},
  store::RecordStore,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store backed by a process-local `Vec`, newest record first.
///
/// Each mutator holds the write lock for its whole body, so every operation
/// runs to completion before any other can observe the collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
  records: RwLock<Vec<PunishmentRecord>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<PunishmentRecord>> {
    self.records.read().expect("record lock poisoned")
  }

  fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<PunishmentRecord>> {
    self.records.write().expect("record lock poisoned")
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for MemoryStore {
  async fn add_record(&self, input: NewRecord) -> Result<PunishmentRecord> {
    input.validate()?;

    // Ids must stay unique even when two records are created within the
    // same clock tick, so they are random rather than time-derived.
    let record = PunishmentRecord {
      record_id:    Uuid::new_v4(),
      student_id:   input.student_id,
      student_name: input.student_name,
      kind:         input.kind,
      description:  input.description,
      date:         Utc::now().date_naive(),
      status:       RecordStatus::Active,
    };

    self.write().insert(0, record.clone());
    Ok(record)
  }

  async fn toggle_status(&self, id: Uuid) -> Result<RecordStatus> {
    let mut records = self.write();
    let record = records
      .iter_mut()
      .find(|r| r.record_id == id)
      .ok_or(Error::RecordNotFound(id))?;

    record.status = record.status.toggled();
    Ok(record.status)
  }

  async fn records_for(&self, student_id: &str) -> Result<Vec<PunishmentRecord>> {
    Ok(
      self
        .read()
        .iter()
        .filter(|r| r.student_id == student_id)
        .cloned()
        .collect(),
    )
  }

  async fn list_records(&self) -> Result<Vec<PunishmentRecord>> {
    Ok(self.read().clone())
  }

  async fn count_by_status(&self, status: RecordStatus) -> Result<usize> {
    Ok(self.read().iter().filter(|r| r.status == status).count())
  }

  async fn distinct_student_count(&self) -> Result<usize> {
    let records = self.read();
    let students: HashSet<&str> =
      records.iter().map(|r| r.student_id.as_str()).collect();
    Ok(students.len())
  }
}

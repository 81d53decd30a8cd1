//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `demerit-store-mem`).
//! Higher layers (`demerit-api`) depend on this abstraction, not on any
//! concrete backend.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use uuid::Uuid;

use crate::{
  Result,
  record::{NewRecord, PunishmentRecord, RecordStatus},
};

/// Abstraction over a punishment-record store backend.
///
/// Records are append-only: no delete operation exists, and the only mutation
/// after creation is the status toggle. Aggregates are derived from the
/// collection on every read rather than kept as counters.
///
/// Every operation resolves to [`crate::Result`] — the failure modes
/// (not-found, rejected input) are part of the store contract, and backends
/// map their internal errors into it.
pub trait RecordStore: Send + Sync {
  /// Validate `input`, assign a fresh unique id and today's date, and store
  /// the record with `Active` status at the head of the collection
  /// (newest-first display order).
  fn add_record(
    &self,
    input: NewRecord,
  ) -> impl Future<Output = Result<PunishmentRecord>> + Send + '_;

  /// Flip `Active ⇄ Resolved` for the record with `id` and return the new
  /// status. Referencing an unknown id is an error, not a silent no-op.
  /// No other record, and no other field, is affected.
  fn toggle_status(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<RecordStatus>> + Send + '_;

  /// All records for one student, newest first. Must never contain another
  /// student's records.
  fn records_for<'a>(
    &'a self,
    student_id: &'a str,
  ) -> impl Future<Output = Result<Vec<PunishmentRecord>>> + Send + 'a;

  /// Every record, newest first. Backs the staff management view.
  fn list_records(
    &self,
  ) -> impl Future<Output = Result<Vec<PunishmentRecord>>> + Send + '_;

  /// Count of records currently in `status`, recomputed over the collection.
  fn count_by_status(
    &self,
    status: RecordStatus,
  ) -> impl Future<Output = Result<usize>> + Send + '_;

  /// Number of unique `student_id` values across all records; repeated ids
  /// count once.
  fn distinct_student_count(
    &self,
  ) -> impl Future<Output = Result<usize>> + Send + '_;
}

//! Screen selection for the dashboard.
//!
//! A pure mapping from role and navigation state to one of five screens.
//! Data loading and rendering are the HTTP layer's concern; this module owns
//! no state.

use serde::{Deserialize, Serialize};

use crate::identity::Role;

/// The navigation target a signed-in user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
  Overview,
  Records,
  Profile,
}

/// The screen the dashboard renders for a `(role, view)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
  StudentOverview,
  StaffOverview,
  /// Subject-filtered, read-only view of the record store.
  StudentRecords,
  /// Full read/write management view of the record store.
  StaffRecords,
  /// Identity fields; the student-only fields are simply absent for staff.
  Profile,
}

/// Deterministic screen selection. Same inputs, same screen.
pub fn select_screen(role: Role, view: DashboardView) -> Screen {
  match (role, view) {
    (Role::Student, DashboardView::Overview) => Screen::StudentOverview,
    (Role::Staff, DashboardView::Overview) => Screen::StaffOverview,
    (Role::Student, DashboardView::Records) => Screen::StudentRecords,
    (Role::Staff, DashboardView::Records) => Screen::StaffRecords,
    (_, DashboardView::Profile) => Screen::Profile,
  }
}

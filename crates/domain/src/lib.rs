// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and scheduling rules for QOTD duty assignment.
//!
//! Every function in this crate is pure: it takes ledger and registry
//! snapshots and returns new values or a `DomainError`. Nothing here reads the
//! clock, touches storage, or sends notifications.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assignment;
mod calendar;
mod error;
mod ledger;
mod overdue;
mod registry;
mod rotation;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use assignment::{assign, complete, mark_missed};
pub use calendar::{
    days_between, days_in_month, first_day_of_month, format_iso_date, iso_date, month_dates,
    month_from_number, parse_iso_date,
};
pub use error::DomainError;
pub use ledger::Ledger;
pub use overdue::{OverduePolicy, reconcile_overdue};
pub use registry::MemberRegistry;
pub use rotation::{RotationPlan, SkippedDate, generate_rotation};
pub use status::{
    AgendaEntry, AssignmentState, AssignmentStats, DashboardSummary, DerivedStatus, MemberAgenda,
    MemberStats, REMINDER_WINDOW_DAYS, derive_member_stats, derive_stats, derive_status,
    member_agenda, summarize_dashboard,
};
pub use types::{Assignment, AssignmentId, AssignmentStatus, Member, MemberId, MemberRole};
pub use validation::{validate_assignment, validate_member_fields};

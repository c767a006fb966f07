// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handling of assignments left `Assigned` after their date has passed.
//!
//! Such records stay `Assigned` unless an operator resolves them. Converting
//! them to `Missed` is a caller decision expressed through `OverduePolicy`.

use crate::assignment::mark_missed;
use crate::ledger::Ledger;
use crate::types::{Assignment, AssignmentStatus};
use serde::{Deserialize, Serialize};
use time::Date;

/// What to do with assignments that are overdue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverduePolicy {
    /// Leave overdue assignments as they are.
    #[default]
    Leave,
    /// Mark every overdue assignment as missed.
    MarkMissed,
}

/// Returns the updated assignments implied by `policy` as of `today`.
///
/// The ledger is not modified. Only assignments dated strictly before `today`
/// and still `Assigned` are considered.
#[must_use]
pub fn reconcile_overdue(ledger: &Ledger, today: Date, policy: OverduePolicy) -> Vec<Assignment> {
    match policy {
        OverduePolicy::Leave => Vec::new(),
        OverduePolicy::MarkMissed => ledger
            .iter()
            .filter(|assignment| {
                assignment.status() == AssignmentStatus::Assigned && assignment.date() < today
            })
            .filter_map(|assignment| mark_missed(assignment).ok())
            .collect(),
    }
}

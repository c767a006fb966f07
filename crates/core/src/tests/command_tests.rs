// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Command;
use crate::tests::helpers::{assign_command, member_ids};
use qotd_domain::{AssignmentId, OverduePolicy};
use time::Month;
use time::macros::date;

#[test]
fn test_command_names_are_stable() {
    let id: AssignmentId = AssignmentId::new("qotd-2024-06-01");
    let commands: Vec<(Command, &str)> = vec![
        (assign_command(date!(2024 - 06 - 01), "1"), "AssignMember"),
        (
            Command::ApplyRotation {
                year: 2024,
                month: Month::June,
                member_ids: member_ids(&["1"]),
            },
            "ApplyRotation",
        ),
        (
            Command::CompleteAssignment {
                assignment_id: id.clone(),
            },
            "CompleteAssignment",
        ),
        (
            Command::MarkAssignmentMissed {
                assignment_id: id.clone(),
            },
            "MarkAssignmentMissed",
        ),
        (
            Command::RemoveAssignment { assignment_id: id },
            "RemoveAssignment",
        ),
        (
            Command::ReconcileOverdue {
                today: date!(2024 - 06 - 10),
                policy: OverduePolicy::MarkMissed,
            },
            "ReconcileOverdue",
        ),
    ];

    for (command, expected) in commands {
        assert_eq!(command.name(), expected);
    }
}

#[test]
fn test_commands_compare_by_value() {
    assert_eq!(
        assign_command(date!(2024 - 06 - 01), "1"),
        assign_command(date!(2024 - 06 - 01), "1")
    );
    assert_ne!(
        assign_command(date!(2024 - 06 - 01), "1"),
        assign_command(date!(2024 - 06 - 02), "1")
    );
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::{apply, apply_intake};
use hireflow_audit::{Actor, Cause};
use hireflow_domain::{Candidate, CandidateId, ExperienceLevel, PlacementDetails, Team};
use time::macros::{date, datetime};
use time::OffsetDateTime;

pub const NOW: OffsetDateTime = datetime!(2026-02-10 09:30:00 UTC);

pub fn create_test_actor(team: Team) -> Actor {
    Actor::new(String::from("op-001"), team)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Operator request"))
}

pub fn register_command(experience_level: ExperienceLevel) -> Command {
    let batch_label = match experience_level {
        ExperienceLevel::Fresher => Some(String::from("B-2026-03")),
        ExperienceLevel::Lateral => None,
    };
    Command::RegisterCandidate {
        full_name: String::from("Asha Rao"),
        gender: String::from("Female"),
        mobile: String::from("+919876543210"),
        personal_email: String::from("asha.rao@example.com"),
        experience_level,
        batch_label,
    }
}

pub fn create_test_candidate(experience_level: ExperienceLevel) -> Candidate {
    apply_intake(
        CandidateId::new(1),
        register_command(experience_level),
        create_test_actor(Team::Admin),
        create_test_cause(),
        NOW,
    )
    .unwrap()
    .candidate
}

pub fn create_test_placement() -> PlacementDetails {
    PlacementDetails {
        business_unit: String::from("Digital"),
        client: String::from("Acme Corp"),
        track: String::from("Platform Engineering"),
        role: String::from("Associate Engineer"),
        reporting_to: String::from("Meera Iyer"),
        hr_partner: String::from("Rohan Das"),
        work_location: String::from("Bengaluru"),
        team: String::from("Payments"),
        doj: date!(2026 - 03 - 02),
    }
}

/// Applies a candidate command with test actor/cause, panicking on failure.
pub fn apply_ok(candidate: &Candidate, command: Command, team: Team) -> Candidate {
    apply(
        candidate,
        command,
        create_test_actor(team),
        create_test_cause(),
        NOW,
    )
    .unwrap()
    .new_candidate
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hireflow_domain::{
    ExperienceLevel, PlacementDetails, PlacementUpdate, RoutingFlag, TrainingOutcome,
};
use time::Date;

/// A command represents team-member intent as data only.
///
/// Commands are the only way to request candidate state changes. Raw string
/// fields are validated during application, not at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new candidate at Admin intake.
    RegisterCandidate {
        /// The candidate's full name.
        full_name: String,
        /// The candidate's gender.
        gender: String,
        /// The candidate's mobile number.
        mobile: String,
        /// The candidate's personal email address.
        personal_email: String,
        /// Experience classification.
        experience_level: ExperienceLevel,
        /// Training batch label; required for Freshers.
        batch_label: Option<String>,
    },
    /// Assign the temporary employee ID. Write-once.
    AssignTemporaryId {
        /// The temporary ID value (3-10 alphanumeric).
        employee_id: String,
    },
    /// Assign the office email address. Write-once.
    AssignOfficeEmail {
        /// The office email address.
        office_email: String,
    },
    /// Assign the permanent employee ID. Write-once, requires the
    /// temporary ID to exist first.
    AssignPermanentId {
        /// The permanent ID value (4-12 alphanumeric).
        permanent_employee_id: String,
    },
    /// Record the L&D training outcome. Re-enterable: overwrites a prior
    /// outcome.
    RecordTrainingOutcome {
        /// The outcome of the review.
        outcome: TrainingOutcome,
        /// Justification; required for Rejected and Dropped.
        reason: Option<String>,
    },
    /// Raise one of the set-once routing flags.
    MarkSentToNextStage {
        /// Which flag to raise.
        flag: RoutingFlag,
    },
    /// Record the deployment email send and seed the deployment record.
    SendDeploymentEmail {
        /// Placement details for the deployment record.
        placement: PlacementDetails,
    },
}

/// A command against an existing deployment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentCommand {
    /// Edit placement fields. Cannot touch status, exit data, or transfer
    /// data; those go through the dedicated transitions below.
    UpdatePlacement {
        /// The partial edit to apply.
        update: PlacementUpdate,
    },
    /// Record an internal transfer. Re-entrant: each call overwrites the
    /// previous transfer fields.
    RecordInternalTransfer {
        /// The transfer date.
        transfer_date: Date,
        /// The team the resource moves to.
        new_team: String,
        /// The new reporting manager.
        new_reporting_to: String,
    },
    /// Exit the resource. Terminal.
    Exit {
        /// Mandatory exit reason (minimum 5 characters).
        exit_reason: String,
    },
}

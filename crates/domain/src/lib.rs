// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod deployment_status;
mod error;
mod ld_status;
mod stage;
mod tenure;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use deployment_status::DeploymentStatus;
pub use error::DomainError;
pub use ld_status::{LdStatus, TrainingOutcome, validate_outcome_reason};
pub use stage::PipelineStage;
pub use tenure::{record_tenure_days, tenure_days};
pub use types::{
    Assigned, Candidate, CandidateId, CandidateProfile, DeploymentId, DeploymentRecord,
    EmployeeId, ExperienceLevel, OfficeEmail, PermanentEmployeeId, PlacementDetails,
    PlacementUpdate, RoutingFlag, Team,
};
pub use validation::{
    MIN_EXIT_REASON_LEN, validate_email, validate_employee_id, validate_exit_reason,
    validate_mobile, validate_permanent_employee_id, validate_required_text,
};

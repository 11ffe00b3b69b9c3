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

mod apply;
mod command;
mod error;
mod reports;
mod transition;

#[cfg(test)]
mod tests;

use hireflow_domain::{Candidate, DomainError, LdStatus};

// Re-export public types and functions
pub use apply::{apply, apply_deployment, apply_intake};
pub use command::{Command, DeploymentCommand};
pub use error::CoreError;
pub use reports::{
    DeploymentStats, LdOutcomeStats, PipelineStats, deployment_stats, ld_outcome_stats,
    pipeline_stats,
};
pub use transition::{
    DeploymentSeed, DeploymentTransition, IntakeResult, TransitionResult, snapshot_candidate,
    snapshot_deployment,
};

/// Validates that a candidate may be routed to Delivery.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `candidate` - The candidate to check
///
/// # Returns
///
/// * `Ok(())` if a permanent ID is set or the candidate is Lateral
/// * `Err(DomainError::PrereqMissing)` otherwise
///
/// # Errors
///
/// Returns an error if the candidate is a Fresher without a permanent
/// employee ID.
pub fn validate_delivery_eligible(candidate: &Candidate) -> Result<(), DomainError> {
    if !candidate.is_delivery_eligible() {
        return Err(DomainError::PrereqMissing {
            operation: "route to delivery",
            missing: "permanent_employee_id (or lateral classification)",
        });
    }
    Ok(())
}

/// Validates that a candidate is ready for the deployment email.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `candidate` - The candidate to check
///
/// # Returns
///
/// * `Ok(())` if the training outcome is Selected and the office email is
///   assigned
/// * `Err(DomainError::PrereqMissing)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The training outcome is not Selected
/// - The office email has not been assigned
pub fn validate_deployment_ready(candidate: &Candidate) -> Result<(), DomainError> {
    if candidate.ld_status != LdStatus::Selected {
        return Err(DomainError::PrereqMissing {
            operation: "send the deployment email",
            missing: "a selected training outcome",
        });
    }
    if candidate.office_email.is_none() {
        return Err(DomainError::PrereqMissing {
            operation: "send the deployment email",
            missing: "office_email",
        });
    }
    Ok(())
}

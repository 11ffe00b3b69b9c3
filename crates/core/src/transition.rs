// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hireflow_audit::{AuditEvent, StateSnapshot};
use hireflow_domain::{
    Candidate, CandidateId, DeploymentId, DeploymentRecord, PipelineStage, PlacementDetails,
};
use time::OffsetDateTime;

/// The result of a successful candidate intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeResult {
    /// The newly created candidate.
    pub candidate: Candidate,
    /// The audit event recording the intake.
    pub audit_event: AuditEvent,
}

/// The data for a deployment record that a successful deployment-email
/// transition requires the store to create.
///
/// The seed carries no record ID: the storage collaborator allocates the ID
/// when it commits the candidate flag and the record as one atomic unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSeed {
    /// The candidate the record belongs to.
    pub candidate_id: CandidateId,
    /// Placement details for the record.
    pub placement: PlacementDetails,
    /// When the email send was recorded.
    pub email_sent_at: OffsetDateTime,
}

impl DeploymentSeed {
    /// Materializes the seed into an Active deployment record.
    #[must_use]
    pub fn into_record(self, id: DeploymentId) -> DeploymentRecord {
        DeploymentRecord::new(id, self.candidate_id, self.placement, self.email_sent_at)
    }
}

/// The result of a successful candidate state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Only the deployment-email transition carries a seed; the
/// store must commit the new candidate and the seeded record together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new candidate state after the transition.
    pub new_candidate: Candidate,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// A deployment record to create alongside the candidate, if any.
    pub deployment_seed: Option<DeploymentSeed>,
}

/// The result of a successful deployment record transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTransition {
    /// The new record state after the transition.
    pub new_record: DeploymentRecord,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// Summarizes a candidate for audit purposes.
#[must_use]
pub fn snapshot_candidate(candidate: &Candidate) -> StateSnapshot {
    StateSnapshot::new(format!(
        "stage={},ld_status={},deployment_email_sent={}",
        PipelineStage::of(candidate),
        candidate.ld_status,
        candidate.deployment_email_sent
    ))
}

/// Summarizes a deployment record for audit purposes.
#[must_use]
pub fn snapshot_deployment(record: &DeploymentRecord) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={},ever_transferred={},exited={}",
        record.status,
        record.ever_transferred(),
        record.exit_date.is_some()
    ))
}

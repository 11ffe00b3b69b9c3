// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hireflow::{CoreError, DeploymentTransition, IntakeResult, TransitionResult};
use hireflow_audit::AuditEvent;
use hireflow_domain::{Candidate, CandidateId, DeploymentId, DeploymentRecord};

use crate::error::StoreError;

/// The result of a committed candidate transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCommitted {
    /// The committed candidate state.
    pub candidate: Candidate,
    /// The deployment record created alongside the candidate, if the
    /// transition carried a seed.
    pub deployment: Option<DeploymentRecord>,
}

/// Contract for the storage collaborator.
///
/// The store owns three responsibilities the pure transition functions
/// cannot: ID allocation, serialized commits against the latest committed
/// state, and atomic multi-entity writes. Transition closures are run
/// inside the store's critical section, so of two concurrent conflicting
/// commands exactly one commits and the loser's closure observes the
/// winner's state.
pub trait Store {
    /// Retrieves a candidate by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CandidateNotFound` if no candidate has this ID.
    fn candidate(&self, id: CandidateId) -> Result<Candidate, StoreError>;

    /// Retrieves all candidates, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn candidates(&self) -> Result<Vec<Candidate>, StoreError>;

    /// Retrieves a deployment record by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DeploymentNotFound` if no record has this ID.
    fn deployment(&self, id: DeploymentId) -> Result<DeploymentRecord, StoreError>;

    /// Retrieves the deployment record belonging to a candidate.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDeploymentForCandidate` if the candidate has
    /// no record.
    fn deployment_for_candidate(
        &self,
        candidate_id: CandidateId,
    ) -> Result<DeploymentRecord, StoreError>;

    /// Retrieves all deployment records, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn deployments(&self) -> Result<Vec<DeploymentRecord>, StoreError>;

    /// Registers a new candidate.
    ///
    /// The store allocates the candidate ID inside its critical section and
    /// passes it to the transition closure; the returned candidate and its
    /// intake audit event commit together.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Transition` if the closure rejects the command.
    fn register_candidate(
        &self,
        transition: &dyn Fn(CandidateId) -> Result<IntakeResult, CoreError>,
    ) -> Result<Candidate, StoreError>;

    /// Applies a transition to a candidate.
    ///
    /// The closure receives the latest committed state. On success the new
    /// candidate, the audit event, and any seeded deployment record commit
    /// as one unit; a closure failure commits nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CandidateNotFound` if no candidate has this ID,
    /// or `StoreError::Transition` if the closure rejects the command. A
    /// transition seeding a second deployment record for the same candidate
    /// is rejected without committing anything.
    fn transition_candidate(
        &self,
        id: CandidateId,
        transition: &dyn Fn(&Candidate) -> Result<TransitionResult, CoreError>,
    ) -> Result<CandidateCommitted, StoreError>;

    /// Applies a transition to a deployment record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DeploymentNotFound` if no record has this ID,
    /// or `StoreError::Transition` if the closure rejects the command.
    fn transition_deployment(
        &self,
        id: DeploymentId,
        transition: &dyn Fn(&DeploymentRecord) -> Result<DeploymentTransition, CoreError>,
    ) -> Result<DeploymentRecord, StoreError>;

    /// Retrieves the audit trail for a candidate, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn audit_log(&self, candidate_id: CandidateId) -> Result<Vec<AuditEvent>, StoreError>;
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Referenced candidate does not exist.
    CandidateNotFound(i64),
    /// Referenced deployment record does not exist.
    DeploymentNotFound(i64),
    /// A write-once field has already been assigned.
    ///
    /// Recoverable by the caller: someone already did this.
    AlreadyAssigned {
        /// The field that is already set.
        field: &'static str,
        /// The candidate the assignment was attempted on.
        candidate_id: i64,
    },
    /// A set-once flag has already been raised.
    ///
    /// Recoverable by the caller: someone already did this.
    AlreadySent {
        /// The flag that is already true.
        flag: &'static str,
        /// The candidate the flag belongs to.
        candidate_id: i64,
    },
    /// An ordering invariant was violated.
    PrereqMissing {
        /// The operation that was attempted.
        operation: &'static str,
        /// What must be present before the operation is legal.
        missing: &'static str,
    },
    /// A field fails its format rule.
    InvalidFormat {
        /// The field that failed validation.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A required justification text is missing.
    ReasonRequired {
        /// The operation that requires a reason.
        operation: &'static str,
    },
    /// A justification text is shorter than the required minimum.
    ReasonTooShort {
        /// The minimum accepted length in characters.
        minimum: usize,
        /// The length that was provided.
        actual: usize,
    },
    /// The requested transition is illegal for the current status.
    InvalidState {
        /// The current status, as its string representation.
        current: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// A second deployment record was attempted for one candidate.
    DuplicateRecord {
        /// The candidate that already has a record.
        candidate_id: i64,
    },
    /// Experience level string is not recognized.
    InvalidExperienceLevel(String),
    /// Team string is not recognized.
    InvalidTeam(String),
    /// L&D status string is not recognized.
    InvalidLdStatus(String),
    /// Training outcome string is not recognized.
    InvalidTrainingOutcome(String),
    /// Deployment status string is not recognized.
    InvalidDeploymentStatus(String),
    /// Routing flag string is not recognized.
    InvalidRoutingFlag(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CandidateNotFound(id) => write!(f, "Candidate {id} not found"),
            Self::DeploymentNotFound(id) => write!(f, "Deployment record {id} not found"),
            Self::AlreadyAssigned {
                field,
                candidate_id,
            } => {
                write!(
                    f,
                    "Field '{field}' is already assigned for candidate {candidate_id}"
                )
            }
            Self::AlreadySent { flag, candidate_id } => {
                write!(
                    f,
                    "Flag '{flag}' is already set for candidate {candidate_id}"
                )
            }
            Self::PrereqMissing { operation, missing } => {
                write!(f, "Cannot {operation}: {missing} is required first")
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "Invalid value for '{field}': {reason}")
            }
            Self::ReasonRequired { operation } => {
                write!(f, "A reason is required for {operation}")
            }
            Self::ReasonTooShort { minimum, actual } => {
                write!(
                    f,
                    "Reason too short: {actual} characters provided, minimum is {minimum}"
                )
            }
            Self::InvalidState { current, operation } => {
                write!(f, "Cannot {operation} while status is '{current}'")
            }
            Self::DuplicateRecord { candidate_id } => {
                write!(
                    f,
                    "A deployment record already exists for candidate {candidate_id}"
                )
            }
            Self::InvalidExperienceLevel(msg) => write!(f, "Invalid experience level: {msg}"),
            Self::InvalidTeam(msg) => write!(f, "Invalid team: {msg}"),
            Self::InvalidLdStatus(msg) => write!(f, "Invalid L&D status: {msg}"),
            Self::InvalidTrainingOutcome(msg) => write!(f, "Invalid training outcome: {msg}"),
            Self::InvalidDeploymentStatus(msg) => {
                write!(f, "Invalid deployment status: {msg}")
            }
            Self::InvalidRoutingFlag(msg) => write!(f, "Invalid routing flag: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

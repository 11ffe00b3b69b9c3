// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use hireflow::CoreError;
use hireflow_domain::DomainError;
use hireflow_store::StoreError;

use crate::notify::NotifyError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The team required for this action.
        required_team: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_team,
            } => {
                write!(f, "Unauthorized: '{action}' requires the {required_team} team")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor's team does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The team required for this action.
        required_team: String,
    },
    /// A lifecycle rule was violated.
    LifecycleRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The notification collaborator failed after the state committed.
    ///
    /// The committed state stands; the caller decides whether to re-notify.
    NotificationFailed {
        /// A description of the notifier failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_team,
            } => {
                write!(f, "Unauthorized: '{action}' requires the {required_team} team")
            }
            Self::LifecycleRuleViolation { rule, message } => {
                write!(f, "Lifecycle rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::NotificationFailed { message } => {
                write!(f, "Notification failed: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_team,
            } => Self::Unauthorized {
                action,
                required_team,
            },
        }
    }
}

impl From<NotifyError> for ApiError {
    fn from(err: NotifyError) -> Self {
        Self::NotificationFailed {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::CandidateNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Candidate"),
            message: format!("Candidate {id} does not exist"),
        },
        DomainError::DeploymentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Deployment record"),
            message: format!("Deployment record {id} does not exist"),
        },
        DomainError::AlreadyAssigned {
            field,
            candidate_id,
        } => ApiError::LifecycleRuleViolation {
            rule: String::from("write_once_assignment"),
            message: format!("Field '{field}' is already assigned for candidate {candidate_id}"),
        },
        DomainError::AlreadySent { flag, candidate_id } => ApiError::LifecycleRuleViolation {
            rule: String::from("set_once_flag"),
            message: format!("Flag '{flag}' is already set for candidate {candidate_id}"),
        },
        DomainError::PrereqMissing { operation, missing } => ApiError::LifecycleRuleViolation {
            rule: String::from("ordering_prerequisite"),
            message: format!("Cannot {operation}: {missing} is required first"),
        },
        DomainError::InvalidFormat { field, reason } => ApiError::InvalidInput {
            field: String::from(field),
            message: reason,
        },
        DomainError::ReasonRequired { operation } => ApiError::InvalidInput {
            field: String::from("reason"),
            message: format!("A reason is required for {operation}"),
        },
        DomainError::ReasonTooShort { minimum, actual } => ApiError::InvalidInput {
            field: String::from("reason"),
            message: format!("Reason too short: {actual} characters provided, minimum is {minimum}"),
        },
        DomainError::InvalidState { current, operation } => ApiError::LifecycleRuleViolation {
            rule: String::from("terminal_status"),
            message: format!("Cannot {operation} while status is '{current}'"),
        },
        DomainError::DuplicateRecord { candidate_id } => ApiError::LifecycleRuleViolation {
            rule: String::from("unique_deployment_record"),
            message: format!("A deployment record already exists for candidate {candidate_id}"),
        },
        DomainError::InvalidExperienceLevel(msg) => ApiError::InvalidInput {
            field: String::from("experience_level"),
            message: msg,
        },
        DomainError::InvalidTeam(msg) => ApiError::InvalidInput {
            field: String::from("team"),
            message: msg,
        },
        DomainError::InvalidLdStatus(msg) => ApiError::InvalidInput {
            field: String::from("ld_status"),
            message: msg,
        },
        DomainError::InvalidTrainingOutcome(msg) => ApiError::InvalidInput {
            field: String::from("outcome"),
            message: msg,
        },
        DomainError::InvalidDeploymentStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: msg,
        },
        DomainError::InvalidRoutingFlag(msg) => ApiError::InvalidInput {
            field: String::from("stage_flag"),
            message: msg,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a store error into an API error.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::CandidateNotFound(id) => {
            translate_domain_error(DomainError::CandidateNotFound(id))
        }
        StoreError::DeploymentNotFound(id) => {
            translate_domain_error(DomainError::DeploymentNotFound(id))
        }
        StoreError::NoDeploymentForCandidate(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Deployment record"),
            message: format!("Candidate {id} has no deployment record"),
        },
        StoreError::Transition(core_err) => translate_core_error(core_err),
        StoreError::SerializationError(msg) => ApiError::Internal {
            message: format!("Serialization error: {msg}"),
        },
        StoreError::Unavailable(msg) => ApiError::Internal {
            message: format!("Store unavailable: {msg}"),
        },
    }
}

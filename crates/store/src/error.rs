// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hireflow::CoreError;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested candidate was not found.
    CandidateNotFound(i64),
    /// The requested deployment record was not found.
    DeploymentNotFound(i64),
    /// No deployment record exists for the candidate.
    NoDeploymentForCandidate(i64),
    /// The transition closure rejected the command.
    Transition(CoreError),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// The store is unavailable.
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CandidateNotFound(id) => write!(f, "Candidate not found: {id}"),
            Self::DeploymentNotFound(id) => write!(f, "Deployment record not found: {id}"),
            Self::NoDeploymentForCandidate(id) => {
                write!(f, "No deployment record for candidate: {id}")
            }
            Self::Transition(err) => write!(f, "Transition rejected: {err}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        Self::Transition(err)
    }
}

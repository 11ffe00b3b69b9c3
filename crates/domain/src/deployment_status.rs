// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deployment record status tracking and transition logic.
//!
//! A deployed resource is exactly one of Active, InternalTransfer, or
//! Inactive. Active and InternalTransfer are mutually re-enterable;
//! Inactive is terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a deployment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    /// Deployed and working in the placed role.
    #[default]
    Active,
    /// Moved to another team or project without leaving the organization.
    InternalTransfer,
    /// Exited. Terminal: no transition leads out of this state.
    Inactive,
}

impl DeploymentStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InternalTransfer => "internal_transfer",
            Self::Inactive => "inactive",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "active" => Ok(Self::Active),
            "internal_transfer" => Ok(Self::InternalTransfer),
            "inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidDeploymentStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Inactive)
    }

    /// Validates that the record may still be mutated in this status.
    ///
    /// Placement updates and internal transfers are legal from Active and
    /// InternalTransfer; both fail once the record is Inactive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the status is terminal.
    pub const fn validate_mutable(&self, operation: &'static str) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidState {
                current: self.as_str(),
                operation,
            });
        }
        Ok(())
    }
}

impl FromStr for DeploymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Learning & Development training outcome tracking.
//!
//! This module defines the L&D review status and the outcome values a
//! reviewer may record. Unlike the write-once assignment fields, the
//! training outcome is re-enterable: a candidate can be re-reviewed and a
//! prior outcome overwritten.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// L&D review status of a candidate.
///
/// `Pending` is the initial value at intake and is never recorded by a
/// reviewer; the other three values come from [`TrainingOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LdStatus {
    /// Not yet reviewed by L&D.
    #[default]
    Pending,
    /// Cleared training and approved for delivery.
    Selected,
    /// Failed the training review.
    Rejected,
    /// Left during training.
    Dropped,
}

impl LdStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
            Self::Dropped => "dropped",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "selected" => Ok(Self::Selected),
            "rejected" => Ok(Self::Rejected),
            "dropped" => Ok(Self::Dropped),
            _ => Err(DomainError::InvalidLdStatus(s.to_string())),
        }
    }
}

impl FromStr for LdStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for LdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An outcome a reviewer may record for a candidate.
///
/// `Pending` is deliberately absent: a review always resolves to one of
/// these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingOutcome {
    /// Cleared training and approved for delivery.
    Selected,
    /// Failed the training review.
    Rejected,
    /// Left during training.
    Dropped,
}

impl TrainingOutcome {
    /// Returns the string representation of the outcome.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Rejected => "rejected",
            Self::Dropped => "dropped",
        }
    }

    /// Returns whether this outcome requires a justification text.
    ///
    /// Rejected and Dropped outcomes must carry a reason.
    #[must_use]
    pub const fn requires_reason(&self) -> bool {
        matches!(self, Self::Rejected | Self::Dropped)
    }

    /// Converts this outcome into the status it resolves to.
    #[must_use]
    pub const fn as_status(&self) -> LdStatus {
        match self {
            Self::Selected => LdStatus::Selected,
            Self::Rejected => LdStatus::Rejected,
            Self::Dropped => LdStatus::Dropped,
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "selected" => Ok(Self::Selected),
            "rejected" => Ok(Self::Rejected),
            "dropped" => Ok(Self::Dropped),
            _ => Err(DomainError::InvalidTrainingOutcome(s.to_string())),
        }
    }
}

impl FromStr for TrainingOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// Validates the reason rule for an outcome.
///
/// # Errors
///
/// Returns `DomainError::ReasonRequired` if the outcome is Rejected or
/// Dropped and the reason is missing or blank.
pub fn validate_outcome_reason(
    outcome: TrainingOutcome,
    reason: Option<&str>,
) -> Result<(), DomainError> {
    if outcome.requires_reason() && reason.is_none_or(|r| r.trim().is_empty()) {
        return Err(DomainError::ReasonRequired {
            operation: "recording a rejected or dropped training outcome",
        });
    }
    Ok(())
}

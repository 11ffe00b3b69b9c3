// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pipeline stage derivation.
//!
//! The stage is **computed**, not stored. It is a pure function of the
//! candidate's flags and assignments, so the flags can never disagree with
//! a separately-stored stage value.

use crate::ld_status::LdStatus;
use crate::types::{Candidate, ExperienceLevel};
use serde::{Deserialize, Serialize};

/// Where a candidate currently sits in the pipeline.
///
/// Stages are ordered; each gate in the lifecycle corresponds to one
/// forward arrow. Laterals skip `PermanentIdAssigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Created by Admin intake, not yet forwarded.
    Intake,
    /// Forwarded to HR-Tag / HR-Ops.
    TaggedForOps,
    /// Temporary employee ID assigned.
    IdAssigned,
    /// Permanent employee ID assigned (Freshers only).
    PermanentIdAssigned,
    /// L&D outcome recorded.
    TrainingReviewed,
    /// Selected, office email assigned, routed to Delivery.
    DeploymentReady,
    /// Deployment email sent; a deployment record exists.
    Deployed,
}

impl PipelineStage {
    /// Returns the string representation of the stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intake => "intake",
            Self::TaggedForOps => "tagged_for_ops",
            Self::IdAssigned => "id_assigned",
            Self::PermanentIdAssigned => "permanent_id_assigned",
            Self::TrainingReviewed => "training_reviewed",
            Self::DeploymentReady => "deployment_ready",
            Self::Deployed => "deployed",
        }
    }

    /// Derives the stage of a candidate from its flags and assignments.
    ///
    /// Evaluation is latest-gate-first: the candidate sits at the furthest
    /// stage whose gate it has passed.
    #[must_use]
    pub fn of(candidate: &Candidate) -> Self {
        if candidate.deployment_email_sent {
            return Self::Deployed;
        }
        if candidate.sent_to_delivery && candidate.is_deployment_ready() {
            return Self::DeploymentReady;
        }
        if candidate.ld_status != LdStatus::Pending {
            return Self::TrainingReviewed;
        }
        if candidate.permanent_employee_id.is_some()
            && candidate.experience_level == ExperienceLevel::Fresher
        {
            return Self::PermanentIdAssigned;
        }
        if candidate.employee_id.is_some() {
            return Self::IdAssigned;
        }
        if candidate.sent_to_hr_tag {
            return Self::TaggedForOps;
        }
        Self::Intake
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

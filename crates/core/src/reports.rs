// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard counters.
//!
//! Every function here is a pure projection of current state: no mutation,
//! order-insensitive, safe to recompute on every request. Staleness is
//! acceptable for a counter, never for a gate, so nothing here is ever
//! consulted by a transition.

use hireflow_domain::{Candidate, DeploymentRecord, DeploymentStatus, LdStatus, PipelineStage};
use serde::{Deserialize, Serialize};

/// Candidate counts per derived pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Candidates at Admin intake.
    pub intake: usize,
    /// Candidates forwarded to HR-Tag / HR-Ops.
    pub tagged_for_ops: usize,
    /// Candidates with a temporary ID.
    pub id_assigned: usize,
    /// Fresher candidates with a permanent ID.
    pub permanent_id_assigned: usize,
    /// Candidates with a recorded training outcome.
    pub training_reviewed: usize,
    /// Candidates ready for deployment.
    pub deployment_ready: usize,
    /// Deployed candidates.
    pub deployed: usize,
    /// All candidates.
    pub total: usize,
}

/// Deployment record counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStats {
    /// Records currently Active.
    pub active: usize,
    /// Records currently marked InternalTransfer.
    pub internal_transfer: usize,
    /// Exited records.
    pub inactive: usize,
    /// Records that have recorded at least one transfer, in any status.
    pub ever_transferred: usize,
    /// All records.
    pub total: usize,
}

/// Candidate counts per L&D status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdOutcomeStats {
    /// Not yet reviewed.
    pub pending: usize,
    /// Selected.
    pub selected: usize,
    /// Rejected.
    pub rejected: usize,
    /// Dropped.
    pub dropped: usize,
    /// All candidates.
    pub total: usize,
}

/// Counts candidates by derived pipeline stage.
#[must_use]
pub fn pipeline_stats(candidates: &[Candidate]) -> PipelineStats {
    let mut stats: PipelineStats = PipelineStats::default();
    for candidate in candidates {
        match PipelineStage::of(candidate) {
            PipelineStage::Intake => stats.intake += 1,
            PipelineStage::TaggedForOps => stats.tagged_for_ops += 1,
            PipelineStage::IdAssigned => stats.id_assigned += 1,
            PipelineStage::PermanentIdAssigned => stats.permanent_id_assigned += 1,
            PipelineStage::TrainingReviewed => stats.training_reviewed += 1,
            PipelineStage::DeploymentReady => stats.deployment_ready += 1,
            PipelineStage::Deployed => stats.deployed += 1,
        }
        stats.total += 1;
    }
    stats
}

/// Counts deployment records by status, plus ever-transferred records.
#[must_use]
pub fn deployment_stats(records: &[DeploymentRecord]) -> DeploymentStats {
    let mut stats: DeploymentStats = DeploymentStats::default();
    for record in records {
        match record.status {
            DeploymentStatus::Active => stats.active += 1,
            DeploymentStatus::InternalTransfer => stats.internal_transfer += 1,
            DeploymentStatus::Inactive => stats.inactive += 1,
        }
        if record.ever_transferred() {
            stats.ever_transferred += 1;
        }
        stats.total += 1;
    }
    stats
}

/// Counts candidates by L&D status.
#[must_use]
pub fn ld_outcome_stats(candidates: &[Candidate]) -> LdOutcomeStats {
    let mut stats: LdOutcomeStats = LdOutcomeStats::default();
    for candidate in candidates {
        match candidate.ld_status {
            LdStatus::Pending => stats.pending += 1,
            LdStatus::Selected => stats.selected += 1,
            LdStatus::Rejected => stats.rejected += 1,
            LdStatus::Dropped => stats.dropped += 1,
        }
        stats.total += 1;
    }
    stats
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These are distinct from domain types and represent the API contract.
//! Enum-valued fields cross the boundary as strings and are parsed at the
//! handler; dates are ISO 8601 strings.

use hireflow::{DeploymentStats, LdOutcomeStats, PipelineStats};

/// API request to register a candidate at Admin intake.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterCandidateRequest {
    /// The candidate's full name.
    pub full_name: String,
    /// The candidate's gender.
    pub gender: String,
    /// The candidate's mobile number.
    pub mobile: String,
    /// The candidate's personal email address.
    pub personal_email: String,
    /// Experience classification ("fresher" or "lateral").
    pub experience_level: String,
    /// Training batch label; required for freshers.
    pub batch_label: Option<String>,
}

/// API response for a successful candidate registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterCandidateResponse {
    /// The allocated candidate ID.
    pub candidate_id: i64,
    /// The derived pipeline stage.
    pub stage: String,
    /// A success message.
    pub message: String,
}

/// API request to assign a temporary employee ID.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignTemporaryIdRequest {
    /// The candidate to assign to.
    pub candidate_id: i64,
    /// The temporary employee ID.
    pub employee_id: String,
}

/// API response for a successful temporary ID assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignTemporaryIdResponse {
    /// The candidate assigned to.
    pub candidate_id: i64,
    /// The normalized employee ID.
    pub employee_id: String,
    /// A success message.
    pub message: String,
}

/// API request to assign an office email.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignOfficeEmailRequest {
    /// The candidate to assign to.
    pub candidate_id: i64,
    /// The office email address.
    pub office_email: String,
}

/// API response for a successful office email assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignOfficeEmailResponse {
    /// The candidate assigned to.
    pub candidate_id: i64,
    /// The normalized office email.
    pub office_email: String,
    /// A success message.
    pub message: String,
}

/// API request to assign a permanent employee ID.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignPermanentIdRequest {
    /// The candidate to assign to.
    pub candidate_id: i64,
    /// The permanent employee ID.
    pub permanent_employee_id: String,
}

/// API response for a successful permanent ID assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignPermanentIdResponse {
    /// The candidate assigned to.
    pub candidate_id: i64,
    /// The normalized permanent employee ID.
    pub permanent_employee_id: String,
    /// A success message.
    pub message: String,
}

/// API request to record an L&D training outcome.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordTrainingOutcomeRequest {
    /// The candidate reviewed.
    pub candidate_id: i64,
    /// The outcome ("selected", "rejected", or "dropped").
    pub outcome: String,
    /// Justification; required unless the outcome is "selected".
    pub reason: Option<String>,
}

/// API response for a recorded training outcome.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordTrainingOutcomeResponse {
    /// The candidate reviewed.
    pub candidate_id: i64,
    /// The resulting L&D status.
    pub ld_status: String,
    /// A success message.
    pub message: String,
}

/// API request to raise a routing flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarkSentToNextStageRequest {
    /// The candidate to route.
    pub candidate_id: i64,
    /// The routing flag ("sent_to_hr_tag" or "sent_to_delivery").
    pub stage_flag: String,
}

/// API response for a raised routing flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarkSentToNextStageResponse {
    /// The candidate routed.
    pub candidate_id: i64,
    /// The derived pipeline stage after routing.
    pub stage: String,
    /// A success message.
    pub message: String,
}

/// Placement details supplied with the deployment email.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacementInput {
    /// The business unit.
    pub business_unit: String,
    /// The client.
    pub client: String,
    /// The track.
    pub track: String,
    /// The role.
    pub role: String,
    /// The reporting manager.
    pub reporting_to: String,
    /// The HR partner.
    pub hr_partner: String,
    /// The work location.
    pub work_location: String,
    /// The team within the client engagement.
    pub team: String,
    /// The date of joining, ISO 8601.
    pub date_of_joining: String,
}

/// API request to send the deployment email.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SendDeploymentEmailRequest {
    /// The candidate to deploy.
    pub candidate_id: i64,
    /// Placement details for the deployment record.
    pub placement: PlacementInput,
}

/// API response for a recorded deployment email send.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SendDeploymentEmailResponse {
    /// The candidate deployed.
    pub candidate_id: i64,
    /// The created deployment record.
    pub deployment_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to edit placement details on a deployment record.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdatePlacementRequest {
    /// The record to edit.
    pub deployment_id: i64,
    /// New business unit, if changing.
    pub business_unit: Option<String>,
    /// New client, if changing.
    pub client: Option<String>,
    /// New track, if changing.
    pub track: Option<String>,
    /// New role, if changing.
    pub role: Option<String>,
    /// New reporting manager, if changing.
    pub reporting_to: Option<String>,
    /// New HR partner, if changing.
    pub hr_partner: Option<String>,
    /// New work location, if changing.
    pub work_location: Option<String>,
    /// New team, if changing.
    pub team: Option<String>,
}

/// API response for an edited deployment record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdatePlacementResponse {
    /// The record edited.
    pub deployment_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to record an internal transfer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordInternalTransferRequest {
    /// The record to transfer.
    pub deployment_id: i64,
    /// The transfer date, ISO 8601.
    pub transfer_date: String,
    /// The team the candidate moves to.
    pub new_team: String,
    /// The new reporting manager.
    pub new_reporting_to: String,
}

/// API response for a recorded internal transfer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordInternalTransferResponse {
    /// The record transferred.
    pub deployment_id: i64,
    /// The deployment status after the transfer.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to exit a deployment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExitRequest {
    /// The record to exit.
    pub deployment_id: i64,
    /// The exit reason.
    pub exit_reason: String,
}

/// API response for an exited deployment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExitResponse {
    /// The record exited.
    pub deployment_id: i64,
    /// The exit date, ISO 8601.
    pub exit_date: String,
    /// A success message.
    pub message: String,
}

/// A candidate summary for read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CandidateInfo {
    /// The candidate ID.
    pub candidate_id: i64,
    /// The candidate's full name.
    pub full_name: String,
    /// Experience classification.
    pub experience_level: String,
    /// The derived pipeline stage.
    pub stage: String,
    /// The L&D status.
    pub ld_status: String,
    /// The temporary employee ID, if assigned.
    pub employee_id: Option<String>,
    /// The permanent employee ID, if assigned.
    pub permanent_employee_id: Option<String>,
    /// The office email, if assigned.
    pub office_email: Option<String>,
    /// Whether the deployment email has been recorded.
    pub deployment_email_sent: bool,
}

/// API response listing all candidates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListCandidatesResponse {
    /// The candidates, ordered by ID.
    pub candidates: Vec<CandidateInfo>,
}

/// API response for a single candidate lookup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetCandidateResponse {
    /// The candidate.
    pub candidate: CandidateInfo,
}

/// One audit trail entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditEntryInfo {
    /// The actor who performed the action.
    pub actor_id: String,
    /// The actor's team.
    pub actor_team: String,
    /// The action name.
    pub action: String,
    /// Additional action details, if any.
    pub details: Option<String>,
    /// State summary before the transition.
    pub before: String,
    /// State summary after the transition.
    pub after: String,
}

/// API response for a candidate's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetAuditTrailResponse {
    /// The candidate the trail belongs to.
    pub candidate_id: i64,
    /// The trail, oldest first.
    pub entries: Vec<AuditEntryInfo>,
}

/// API response for the tenure of one deployment record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetTenureResponse {
    /// The record the tenure was computed for.
    pub deployment_id: i64,
    /// Whole days from joining to exit or the as-of date.
    pub tenure_days: i64,
}

/// API response carrying the pipeline stage counters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetPipelineStatsResponse {
    /// The counters.
    pub stats: PipelineStats,
}

/// API response carrying the deployment status counters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetDeploymentStatsResponse {
    /// The counters.
    pub stats: DeploymentStats,
}

/// API response carrying the L&D outcome counters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetLdOutcomeStatsResponse {
    /// The counters.
    pub stats: LdOutcomeStats,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the hireflow recruitment portal.
//!
//! One handler per lifecycle operation: each verifies team authorization,
//! translates its request DTO into a core command, runs the transition
//! through the store, and translates failures into [`ApiError`]. Outbound
//! mail crosses the [`DeploymentNotifier`] trait; no transport lives here.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod notify;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, authenticate_stub};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_store_error,
};
pub use handlers::{
    assign_office_email, assign_permanent_id, assign_temporary_id, exit_deployment,
    get_audit_trail, get_candidate, get_deployment_stats, get_ld_outcome_stats,
    get_pipeline_stats, get_tenure, list_candidates, mark_sent_to_next_stage,
    record_internal_transfer, record_training_outcome, register_candidate, send_deployment_email,
    update_placement,
};
pub use notify::{DeploymentEmailRequested, DeploymentNotifier, NotifyError};
pub use request_response::{
    AssignOfficeEmailRequest, AssignOfficeEmailResponse, AssignPermanentIdRequest,
    AssignPermanentIdResponse, AssignTemporaryIdRequest, AssignTemporaryIdResponse,
    AuditEntryInfo, CandidateInfo, ExitRequest, ExitResponse, GetAuditTrailResponse,
    GetCandidateResponse, GetDeploymentStatsResponse, GetLdOutcomeStatsResponse,
    GetPipelineStatsResponse, GetTenureResponse, ListCandidatesResponse,
    MarkSentToNextStageRequest, MarkSentToNextStageResponse, PlacementInput,
    RecordInternalTransferRequest, RecordInternalTransferResponse, RecordTrainingOutcomeRequest,
    RecordTrainingOutcomeResponse, RegisterCandidateRequest, RegisterCandidateResponse,
    SendDeploymentEmailRequest, SendDeploymentEmailResponse, UpdatePlacementRequest,
    UpdatePlacementResponse,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each handler verifies team authorization, translates the request DTO
//! into a core command, runs the transition through the store, and
//! translates every failure into an [`ApiError`]. The store appends the
//! audit event inside the same commit as the state change.

use std::str::FromStr;

use hireflow::{
    Command, DeploymentCommand, apply, apply_deployment, apply_intake, deployment_stats,
    ld_outcome_stats, pipeline_stats,
};
use hireflow_audit::{AuditEvent, Cause};
use hireflow_domain::{
    Candidate, CandidateId, DeploymentId, ExperienceLevel, PipelineStage, PlacementDetails,
    PlacementUpdate, RoutingFlag, TrainingOutcome, record_tenure_days,
};
use hireflow_store::{CandidateCommitted, Store};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_store_error};
use crate::notify::{DeploymentEmailRequested, DeploymentNotifier};
use crate::request_response::{
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

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value, DATE_FORMAT).map_err(|err| ApiError::InvalidInput {
        field: String::from(field),
        message: format!("Expected an ISO 8601 date: {err}"),
    })
}

fn format_date(date: Date) -> Result<String, ApiError> {
    date.format(DATE_FORMAT).map_err(|err| ApiError::Internal {
        message: format!("Failed to format date: {err}"),
    })
}

fn candidate_info(candidate: &Candidate) -> CandidateInfo {
    CandidateInfo {
        candidate_id: candidate.id.value(),
        full_name: candidate.profile.full_name.clone(),
        experience_level: String::from(candidate.experience_level.as_str()),
        stage: String::from(PipelineStage::of(candidate).as_str()),
        ld_status: String::from(candidate.ld_status.as_str()),
        employee_id: candidate
            .employee_id
            .as_ref()
            .map(|a| String::from(a.value.value())),
        permanent_employee_id: candidate
            .permanent_employee_id
            .as_ref()
            .map(|a| String::from(a.value.value())),
        office_email: candidate
            .office_email
            .as_ref()
            .map(|a| String::from(a.value.value())),
        deployment_email_sent: candidate.deployment_email_sent,
    }
}

fn placement_details(placement: PlacementInput) -> Result<PlacementDetails, ApiError> {
    let doj: Date = parse_date("date_of_joining", &placement.date_of_joining)?;
    Ok(PlacementDetails {
        business_unit: placement.business_unit,
        client: placement.client,
        track: placement.track,
        role: placement.role,
        reporting_to: placement.reporting_to,
        hr_partner: placement.hr_partner,
        work_location: placement.work_location,
        team: placement.team,
        doj,
    })
}

/// Registers a candidate at Admin intake.
///
/// This function:
/// - Verifies the actor is authorized (Admin team required)
/// - Translates the API request into a core command
/// - Commits the new candidate through the store, which allocates the ID
/// - Translates any errors to API errors
///
/// # Arguments
///
/// * `store` - The storage collaborator
/// * `request` - The API request to register a candidate
/// * `authenticated_actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the Admin team
/// - A profile field fails its format rule
/// - A fresher carries no batch label
pub fn register_candidate(
    store: &dyn Store,
    request: RegisterCandidateRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<RegisterCandidateResponse, ApiError> {
    AuthorizationService::authorize_register_candidate(authenticated_actor)?;

    let experience_level: ExperienceLevel =
        ExperienceLevel::from_str(&request.experience_level).map_err(translate_domain_error)?;

    let actor = authenticated_actor.to_audit_actor();
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let candidate: Candidate = store
        .register_candidate(&|id| {
            apply_intake(
                id,
                Command::RegisterCandidate {
                    full_name: request.full_name.clone(),
                    gender: request.gender.clone(),
                    mobile: request.mobile.clone(),
                    personal_email: request.personal_email.clone(),
                    experience_level,
                    batch_label: request.batch_label.clone(),
                },
                actor.clone(),
                cause.clone(),
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(RegisterCandidateResponse {
        candidate_id: candidate.id.value(),
        stage: String::from(PipelineStage::of(&candidate).as_str()),
        message: format!(
            "Successfully registered {} candidate '{}'",
            candidate.experience_level.as_str(),
            candidate.profile.full_name
        ),
    })
}

fn transition(
    store: &dyn Store,
    candidate_id: i64,
    command: Command,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<CandidateCommitted, ApiError> {
    let actor = authenticated_actor.to_audit_actor();
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    store
        .transition_candidate(CandidateId::new(candidate_id), &|current| {
            apply(current, command.clone(), actor.clone(), cause.clone(), now)
        })
        .map_err(translate_store_error)
}

/// Assigns a temporary employee ID.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the HR-Ops or IT team
/// - The candidate does not exist
/// - The ID is already assigned or fails its format rule
pub fn assign_temporary_id(
    store: &dyn Store,
    request: AssignTemporaryIdRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<AssignTemporaryIdResponse, ApiError> {
    AuthorizationService::authorize_assign_temporary_id(authenticated_actor)?;

    let committed: CandidateCommitted = transition(
        store,
        request.candidate_id,
        Command::AssignTemporaryId {
            employee_id: request.employee_id,
        },
        authenticated_actor,
        cause,
    )?;

    let employee_id: String = committed
        .candidate
        .employee_id
        .as_ref()
        .map(|a| String::from(a.value.value()))
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Employee ID missing after assignment"),
        })?;

    Ok(AssignTemporaryIdResponse {
        candidate_id: request.candidate_id,
        message: format!(
            "Assigned temporary ID '{employee_id}' to candidate {}",
            request.candidate_id
        ),
        employee_id,
    })
}

/// Assigns an office email address.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the HR-Ops or IT team
/// - The candidate does not exist
/// - The email is already assigned or fails its format rule
pub fn assign_office_email(
    store: &dyn Store,
    request: AssignOfficeEmailRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<AssignOfficeEmailResponse, ApiError> {
    AuthorizationService::authorize_assign_office_email(authenticated_actor)?;

    let committed: CandidateCommitted = transition(
        store,
        request.candidate_id,
        Command::AssignOfficeEmail {
            office_email: request.office_email,
        },
        authenticated_actor,
        cause,
    )?;

    let office_email: String = committed
        .candidate
        .office_email
        .as_ref()
        .map(|a| String::from(a.value.value()))
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Office email missing after assignment"),
        })?;

    Ok(AssignOfficeEmailResponse {
        candidate_id: request.candidate_id,
        message: format!(
            "Assigned office email '{office_email}' to candidate {}",
            request.candidate_id
        ),
        office_email,
    })
}

/// Assigns a permanent employee ID.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the HR-Ops team
/// - The candidate does not exist
/// - No temporary ID is assigned yet
/// - The ID is already assigned or fails its format rule
pub fn assign_permanent_id(
    store: &dyn Store,
    request: AssignPermanentIdRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<AssignPermanentIdResponse, ApiError> {
    AuthorizationService::authorize_assign_permanent_id(authenticated_actor)?;

    let committed: CandidateCommitted = transition(
        store,
        request.candidate_id,
        Command::AssignPermanentId {
            permanent_employee_id: request.permanent_employee_id,
        },
        authenticated_actor,
        cause,
    )?;

    let permanent_employee_id: String = committed
        .candidate
        .permanent_employee_id
        .as_ref()
        .map(|a| String::from(a.value.value()))
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Permanent ID missing after assignment"),
        })?;

    Ok(AssignPermanentIdResponse {
        candidate_id: request.candidate_id,
        message: format!(
            "Assigned permanent ID '{permanent_employee_id}' to candidate {}",
            request.candidate_id
        ),
        permanent_employee_id,
    })
}

/// Records an L&D training outcome.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the Learning & Development team
/// - The candidate does not exist
/// - The outcome string is not recognized
/// - The outcome requires a reason and none was given
pub fn record_training_outcome(
    store: &dyn Store,
    request: RecordTrainingOutcomeRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<RecordTrainingOutcomeResponse, ApiError> {
    AuthorizationService::authorize_record_training_outcome(authenticated_actor)?;

    let outcome: TrainingOutcome =
        TrainingOutcome::from_str(&request.outcome).map_err(translate_domain_error)?;

    let committed: CandidateCommitted = transition(
        store,
        request.candidate_id,
        Command::RecordTrainingOutcome {
            outcome,
            reason: request.reason,
        },
        authenticated_actor,
        cause,
    )?;

    Ok(RecordTrainingOutcomeResponse {
        candidate_id: request.candidate_id,
        ld_status: String::from(committed.candidate.ld_status.as_str()),
        message: format!(
            "Recorded training outcome '{}' for candidate {}",
            outcome.as_str(),
            request.candidate_id
        ),
    })
}

/// Raises a routing flag.
///
/// # Errors
///
/// Returns an error if:
/// - The flag string is not recognized
/// - The actor's team may not raise this flag (Admin for HR-Tag,
///   HR-Ops for Delivery)
/// - The candidate does not exist
/// - The flag is already raised, or the Delivery prerequisite is missing
pub fn mark_sent_to_next_stage(
    store: &dyn Store,
    request: MarkSentToNextStageRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<MarkSentToNextStageResponse, ApiError> {
    let flag: RoutingFlag =
        RoutingFlag::from_str(&request.stage_flag).map_err(translate_domain_error)?;
    match flag {
        RoutingFlag::HrTag => AuthorizationService::authorize_route_to_hr_tag(authenticated_actor)?,
        RoutingFlag::Delivery => {
            AuthorizationService::authorize_route_to_delivery(authenticated_actor)?;
        }
    }

    let committed: CandidateCommitted = transition(
        store,
        request.candidate_id,
        Command::MarkSentToNextStage { flag },
        authenticated_actor,
        cause,
    )?;

    Ok(MarkSentToNextStageResponse {
        candidate_id: request.candidate_id,
        stage: String::from(PipelineStage::of(&committed.candidate).as_str()),
        message: format!(
            "Raised routing flag '{}' for candidate {}",
            flag.as_str(),
            request.candidate_id
        ),
    })
}

/// Records the deployment email send.
///
/// On success the candidate flag and the Active deployment record are
/// already committed as one unit; this handler then emits the
/// [`DeploymentEmailRequested`] event. A notifier failure surfaces as
/// `ApiError::NotificationFailed` while the committed state stands.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the Delivery team
/// - The candidate does not exist
/// - The readiness prerequisites are missing or the email was already sent
/// - The notifier rejects the event (state remains committed)
pub fn send_deployment_email(
    store: &dyn Store,
    notifier: &dyn DeploymentNotifier,
    request: SendDeploymentEmailRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<SendDeploymentEmailResponse, ApiError> {
    AuthorizationService::authorize_send_deployment_email(authenticated_actor)?;

    let placement: PlacementDetails = placement_details(request.placement)?;

    let committed: CandidateCommitted = transition(
        store,
        request.candidate_id,
        Command::SendDeploymentEmail { placement },
        authenticated_actor,
        cause,
    )?;

    let record = committed.deployment.ok_or_else(|| ApiError::Internal {
        message: String::from("Deployment record missing after send"),
    })?;
    let recipient: String = committed
        .candidate
        .office_email
        .as_ref()
        .map(|a| String::from(a.value.value()))
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Office email missing after send"),
        })?;

    info!(
        candidate_id = request.candidate_id,
        deployment_id = record.id.value(),
        "Deployment email recorded"
    );

    let event: DeploymentEmailRequested = DeploymentEmailRequested {
        candidate_id: request.candidate_id,
        deployment_id: record.id.value(),
        recipient,
        client: record.placement.client.clone(),
        role: record.placement.role.clone(),
        date_of_joining: format_date(record.placement.doj)?,
    };
    if let Err(err) = notifier.deployment_email_requested(&event) {
        // The commit stands; the caller decides whether to re-notify
        warn!(
            candidate_id = request.candidate_id,
            error = %err,
            "Deployment email notification failed after commit"
        );
        return Err(err.into());
    }

    Ok(SendDeploymentEmailResponse {
        candidate_id: request.candidate_id,
        deployment_id: record.id.value(),
        message: format!(
            "Recorded deployment email send for candidate {}",
            request.candidate_id
        ),
    })
}

/// Edits placement details on a deployment record.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the Delivery team
/// - The record does not exist or is Inactive
pub fn update_placement(
    store: &dyn Store,
    request: UpdatePlacementRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<UpdatePlacementResponse, ApiError> {
    AuthorizationService::authorize_update_placement(authenticated_actor)?;

    let update: PlacementUpdate = PlacementUpdate {
        business_unit: request.business_unit,
        client: request.client,
        track: request.track,
        role: request.role,
        reporting_to: request.reporting_to,
        hr_partner: request.hr_partner,
        work_location: request.work_location,
        team: request.team,
    };

    let actor = authenticated_actor.to_audit_actor();
    let today: Date = OffsetDateTime::now_utc().date();

    store
        .transition_deployment(DeploymentId::new(request.deployment_id), &|current| {
            apply_deployment(
                current,
                DeploymentCommand::UpdatePlacement {
                    update: update.clone(),
                },
                actor.clone(),
                cause.clone(),
                today,
            )
        })
        .map_err(translate_store_error)?;

    Ok(UpdatePlacementResponse {
        deployment_id: request.deployment_id,
        message: format!("Updated placement details for record {}", request.deployment_id),
    })
}

/// Records an internal transfer on a deployment record.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the Delivery team
/// - The transfer date does not parse
/// - The record does not exist or is Inactive
/// - A transfer field is blank
pub fn record_internal_transfer(
    store: &dyn Store,
    request: RecordInternalTransferRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<RecordInternalTransferResponse, ApiError> {
    AuthorizationService::authorize_record_internal_transfer(authenticated_actor)?;

    let transfer_date: Date = parse_date("transfer_date", &request.transfer_date)?;
    let actor = authenticated_actor.to_audit_actor();
    let today: Date = OffsetDateTime::now_utc().date();

    let record = store
        .transition_deployment(DeploymentId::new(request.deployment_id), &|current| {
            apply_deployment(
                current,
                DeploymentCommand::RecordInternalTransfer {
                    transfer_date,
                    new_team: request.new_team.clone(),
                    new_reporting_to: request.new_reporting_to.clone(),
                },
                actor.clone(),
                cause.clone(),
                today,
            )
        })
        .map_err(translate_store_error)?;

    Ok(RecordInternalTransferResponse {
        deployment_id: request.deployment_id,
        status: String::from(record.status.as_str()),
        message: format!(
            "Recorded internal transfer to team '{}' for record {}",
            request.new_team, request.deployment_id
        ),
    })
}

/// Exits a deployment, freezing the record.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not on the Delivery team
/// - The record does not exist or is already Inactive
/// - The exit reason is shorter than the minimum
pub fn exit_deployment(
    store: &dyn Store,
    request: ExitRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ExitResponse, ApiError> {
    AuthorizationService::authorize_exit(authenticated_actor)?;

    let actor = authenticated_actor.to_audit_actor();
    let today: Date = OffsetDateTime::now_utc().date();

    let record = store
        .transition_deployment(DeploymentId::new(request.deployment_id), &|current| {
            apply_deployment(
                current,
                DeploymentCommand::Exit {
                    exit_reason: request.exit_reason.clone(),
                },
                actor.clone(),
                cause.clone(),
                today,
            )
        })
        .map_err(translate_store_error)?;

    let exit_date: Date = record.exit_date.ok_or_else(|| ApiError::Internal {
        message: String::from("Exit date missing after exit"),
    })?;

    Ok(ExitResponse {
        deployment_id: request.deployment_id,
        exit_date: format_date(exit_date)?,
        message: format!("Exited deployment record {}", request.deployment_id),
    })
}

/// Retrieves one candidate.
///
/// # Errors
///
/// Returns an error if the candidate does not exist.
pub fn get_candidate(store: &dyn Store, candidate_id: i64) -> Result<GetCandidateResponse, ApiError> {
    let candidate: Candidate = store
        .candidate(CandidateId::new(candidate_id))
        .map_err(translate_store_error)?;
    Ok(GetCandidateResponse {
        candidate: candidate_info(&candidate),
    })
}

/// Lists all candidates, ordered by ID.
///
/// # Errors
///
/// Returns an error if the store is unavailable.
pub fn list_candidates(store: &dyn Store) -> Result<ListCandidatesResponse, ApiError> {
    let candidates: Vec<Candidate> = store.candidates().map_err(translate_store_error)?;
    Ok(ListCandidatesResponse {
        candidates: candidates.iter().map(candidate_info).collect(),
    })
}

/// Retrieves a candidate's audit trail, oldest first.
///
/// # Errors
///
/// Returns an error if the candidate does not exist.
pub fn get_audit_trail(
    store: &dyn Store,
    candidate_id: i64,
) -> Result<GetAuditTrailResponse, ApiError> {
    // Distinguish "no candidate" from "no events yet"
    store
        .candidate(CandidateId::new(candidate_id))
        .map_err(translate_store_error)?;
    let events: Vec<AuditEvent> = store
        .audit_log(CandidateId::new(candidate_id))
        .map_err(translate_store_error)?;

    Ok(GetAuditTrailResponse {
        candidate_id,
        entries: events
            .into_iter()
            .map(|event| AuditEntryInfo {
                actor_id: event.actor.id,
                actor_team: String::from(event.actor.team.as_str()),
                action: event.action.name,
                details: event.action.details,
                before: event.before.data,
                after: event.after.data,
            })
            .collect(),
    })
}

/// Computes the tenure of one deployment record.
///
/// Tenure runs from the date of joining to the exit date, or to `as_of`
/// for a record still in service.
///
/// # Errors
///
/// Returns an error if the record does not exist or the date does not
/// parse.
pub fn get_tenure(
    store: &dyn Store,
    deployment_id: i64,
    as_of: &str,
) -> Result<GetTenureResponse, ApiError> {
    let as_of: Date = parse_date("as_of", as_of)?;
    let record = store
        .deployment(DeploymentId::new(deployment_id))
        .map_err(translate_store_error)?;

    Ok(GetTenureResponse {
        deployment_id,
        tenure_days: record_tenure_days(&record, as_of),
    })
}

/// Computes candidate counts per derived pipeline stage.
///
/// # Errors
///
/// Returns an error if the store is unavailable.
pub fn get_pipeline_stats(store: &dyn Store) -> Result<GetPipelineStatsResponse, ApiError> {
    let candidates: Vec<Candidate> = store.candidates().map_err(translate_store_error)?;
    Ok(GetPipelineStatsResponse {
        stats: pipeline_stats(&candidates),
    })
}

/// Computes deployment record counts per status.
///
/// # Errors
///
/// Returns an error if the store is unavailable.
pub fn get_deployment_stats(store: &dyn Store) -> Result<GetDeploymentStatsResponse, ApiError> {
    let records = store.deployments().map_err(translate_store_error)?;
    Ok(GetDeploymentStatsResponse {
        stats: deployment_stats(&records),
    })
}

/// Computes candidate counts per L&D status.
///
/// # Errors
///
/// Returns an error if the store is unavailable.
pub fn get_ld_outcome_stats(store: &dyn Store) -> Result<GetLdOutcomeStatsResponse, ApiError> {
    let candidates: Vec<Candidate> = store.candidates().map_err(translate_store_error)?;
    Ok(GetLdOutcomeStatsResponse {
        stats: ld_outcome_stats(&candidates),
    })
}

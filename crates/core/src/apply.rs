// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, DeploymentCommand};
use crate::error::CoreError;
use crate::{validate_delivery_eligible, validate_deployment_ready};
use crate::transition::{
    DeploymentSeed, DeploymentTransition, IntakeResult, TransitionResult, snapshot_candidate,
    snapshot_deployment,
};
use hireflow_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use hireflow_domain::{
    Assigned, Candidate, CandidateId, CandidateProfile, DeploymentRecord, DeploymentStatus,
    DomainError, EmployeeId, OfficeEmail, PermanentEmployeeId, RoutingFlag,
    validate_exit_reason, validate_outcome_reason, validate_required_text,
};
use time::{Date, OffsetDateTime};

/// Applies an intake command, producing a new candidate and audit event.
///
/// Intake is the only command that creates an entity rather than
/// transitioning one; the candidate ID is supplied by the storage
/// collaborator that owns ID allocation.
///
/// # Arguments
///
/// * `id` - The ID the store allocated for the candidate
/// * `command` - The `RegisterCandidate` command
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The creation timestamp
///
/// # Errors
///
/// Returns an error if a profile field fails its format rule or a Fresher
/// carries no batch label.
pub fn apply_intake(
    id: CandidateId,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<IntakeResult, CoreError> {
    match command {
        Command::RegisterCandidate {
            full_name,
            gender,
            mobile,
            personal_email,
            experience_level,
            batch_label,
        } => {
            let profile: CandidateProfile =
                CandidateProfile::new(&full_name, &gender, &mobile, &personal_email)?;
            let candidate: Candidate =
                Candidate::new(id, profile, experience_level, batch_label, now)?;

            let before: StateSnapshot = StateSnapshot::new(String::from("absent"));
            let after: StateSnapshot = snapshot_candidate(&candidate);

            let action: Action = Action::new(
                String::from("RegisterCandidate"),
                Some(format!(
                    "Registered {} candidate '{}'",
                    experience_level.as_str(),
                    candidate.profile.full_name
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after, id);

            Ok(IntakeResult {
                candidate,
                audit_event,
            })
        }
        _ => {
            // Non-intake commands should use apply() instead
            unreachable!("apply_intake called with non-intake command")
        }
    }
}

/// Applies a command to an existing candidate, producing the new candidate
/// state and audit event.
///
/// This function is pure: the current candidate is read-only, time is an
/// explicit parameter, and a failed command leaves nothing changed. All
/// write-once and ordering rules are enforced here; the storage
/// collaborator runs this against the latest committed state so the loser
/// of two concurrent assignments observes the winner's value.
///
/// # Arguments
///
/// * `candidate` - The current candidate state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The timestamp recorded on assignments and outcomes
///
/// # Errors
///
/// Returns an error if:
/// - A write-once field or set-once flag is already set
/// - An ordering prerequisite is missing
/// - A field value fails its format rule
/// - A required reason is missing
/// - A training outcome is recorded after the deployment email went out
#[allow(clippy::too_many_lines)]
pub fn apply(
    candidate: &Candidate,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = snapshot_candidate(candidate);

    match command {
        Command::AssignTemporaryId { employee_id } => {
            if candidate.employee_id.is_some() {
                return Err(CoreError::DomainViolation(DomainError::AlreadyAssigned {
                    field: "employee_id",
                    candidate_id: candidate.id.value(),
                }));
            }
            let value: EmployeeId = EmployeeId::new(&employee_id)?;

            let mut new_candidate: Candidate = candidate.clone();
            new_candidate.employee_id = Some(Assigned::new(
                value.clone(),
                now,
                actor.id.clone(),
            ));

            let action: Action = Action::new(
                String::from("AssignTemporaryId"),
                Some(format!("Assigned temporary ID '{}'", value.value())),
            );
            let after: StateSnapshot = snapshot_candidate(&new_candidate);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, candidate.id);

            Ok(TransitionResult {
                new_candidate,
                audit_event,
                deployment_seed: None,
            })
        }
        Command::AssignOfficeEmail { office_email } => {
            if candidate.office_email.is_some() {
                return Err(CoreError::DomainViolation(DomainError::AlreadyAssigned {
                    field: "office_email",
                    candidate_id: candidate.id.value(),
                }));
            }
            let value: OfficeEmail = OfficeEmail::new(&office_email)?;

            let mut new_candidate: Candidate = candidate.clone();
            new_candidate.office_email = Some(Assigned::new(
                value.clone(),
                now,
                actor.id.clone(),
            ));

            let action: Action = Action::new(
                String::from("AssignOfficeEmail"),
                Some(format!("Assigned office email '{}'", value.value())),
            );
            let after: StateSnapshot = snapshot_candidate(&new_candidate);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, candidate.id);

            Ok(TransitionResult {
                new_candidate,
                audit_event,
                deployment_seed: None,
            })
        }
        Command::AssignPermanentId {
            permanent_employee_id,
        } => {
            // Ordering gate: no permanent ID before a temporary ID
            if candidate.employee_id.is_none() {
                return Err(CoreError::DomainViolation(DomainError::PrereqMissing {
                    operation: "assign a permanent employee ID",
                    missing: "employee_id",
                }));
            }
            if candidate.permanent_employee_id.is_some() {
                return Err(CoreError::DomainViolation(DomainError::AlreadyAssigned {
                    field: "permanent_employee_id",
                    candidate_id: candidate.id.value(),
                }));
            }
            let value: PermanentEmployeeId = PermanentEmployeeId::new(&permanent_employee_id)?;

            let mut new_candidate: Candidate = candidate.clone();
            new_candidate.permanent_employee_id = Some(Assigned::new(
                value.clone(),
                now,
                actor.id.clone(),
            ));

            let action: Action = Action::new(
                String::from("AssignPermanentId"),
                Some(format!("Assigned permanent ID '{}'", value.value())),
            );
            let after: StateSnapshot = snapshot_candidate(&new_candidate);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, candidate.id);

            Ok(TransitionResult {
                new_candidate,
                audit_event,
                deployment_seed: None,
            })
        }
        Command::RecordTrainingOutcome { outcome, reason } => {
            // The outcome freezes once the deployment email has gone out;
            // a deployed candidate always remains Selected
            if candidate.deployment_email_sent {
                return Err(CoreError::DomainViolation(DomainError::InvalidState {
                    current: "deployed",
                    operation: "record a training outcome",
                }));
            }
            validate_outcome_reason(outcome, reason.as_deref())?;

            // The one re-enterable field: a prior outcome is overwritten
            let mut new_candidate: Candidate = candidate.clone();
            new_candidate.ld_status = outcome.as_status();
            new_candidate.ld_reason = if outcome.requires_reason() {
                reason.map(|r| r.trim().to_string())
            } else {
                None
            };
            new_candidate.ld_status_updated_at = Some(now);
            new_candidate.ld_status_updated_by = Some(actor.id.clone());

            let action: Action = Action::new(
                String::from("RecordTrainingOutcome"),
                Some(format!("Recorded training outcome '{}'", outcome.as_str())),
            );
            let after: StateSnapshot = snapshot_candidate(&new_candidate);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, candidate.id);

            Ok(TransitionResult {
                new_candidate,
                audit_event,
                deployment_seed: None,
            })
        }
        Command::MarkSentToNextStage { flag } => {
            let mut new_candidate: Candidate = candidate.clone();
            match flag {
                RoutingFlag::HrTag => {
                    if candidate.sent_to_hr_tag {
                        return Err(CoreError::DomainViolation(DomainError::AlreadySent {
                            flag: "sent_to_hr_tag",
                            candidate_id: candidate.id.value(),
                        }));
                    }
                    new_candidate.sent_to_hr_tag = true;
                }
                RoutingFlag::Delivery => {
                    if candidate.sent_to_delivery {
                        return Err(CoreError::DomainViolation(DomainError::AlreadySent {
                            flag: "sent_to_delivery",
                            candidate_id: candidate.id.value(),
                        }));
                    }
                    validate_delivery_eligible(candidate)?;
                    new_candidate.sent_to_delivery = true;
                }
            }

            let action: Action = Action::new(
                String::from("MarkSentToNextStage"),
                Some(format!("Raised routing flag '{}'", flag.as_str())),
            );
            let after: StateSnapshot = snapshot_candidate(&new_candidate);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, candidate.id);

            Ok(TransitionResult {
                new_candidate,
                audit_event,
                deployment_seed: None,
            })
        }
        Command::SendDeploymentEmail { placement } => {
            if candidate.deployment_email_sent {
                return Err(CoreError::DomainViolation(DomainError::AlreadySent {
                    flag: "deployment_email_sent",
                    candidate_id: candidate.id.value(),
                }));
            }
            validate_deployment_ready(candidate)?;

            let mut new_candidate: Candidate = candidate.clone();
            new_candidate.deployment_email_sent = true;

            // The flag and the record commit together or not at all
            let deployment_seed: DeploymentSeed = DeploymentSeed {
                candidate_id: candidate.id,
                placement,
                email_sent_at: now,
            };

            let action: Action = Action::new(
                String::from("SendDeploymentEmail"),
                Some(format!(
                    "Recorded deployment email send for candidate {}",
                    candidate.id
                )),
            );
            let after: StateSnapshot = snapshot_candidate(&new_candidate);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, candidate.id);

            Ok(TransitionResult {
                new_candidate,
                audit_event,
                deployment_seed: Some(deployment_seed),
            })
        }
        Command::RegisterCandidate { .. } => {
            // Intake commands should use apply_intake() instead
            unreachable!("apply called with intake command")
        }
    }
}

/// Applies a command to an existing deployment record.
///
/// Pure in the same sense as [`apply`]: the current record is read-only and
/// the transfer/exit date is an explicit parameter.
///
/// # Arguments
///
/// * `record` - The current record state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `today` - The date recorded on an exit
///
/// # Errors
///
/// Returns an error if:
/// - The record is Inactive (terminal; nothing may be mutated)
/// - An exit reason is shorter than the minimum
/// - A transfer field is blank
pub fn apply_deployment(
    record: &DeploymentRecord,
    command: DeploymentCommand,
    actor: Actor,
    cause: Cause,
    today: Date,
) -> Result<DeploymentTransition, CoreError> {
    let before: StateSnapshot = snapshot_deployment(record);

    match command {
        DeploymentCommand::UpdatePlacement { update } => {
            record.status.validate_mutable("update placement details")?;

            let mut new_record = record.clone();
            if let Some(business_unit) = update.business_unit {
                new_record.placement.business_unit = business_unit;
            }
            if let Some(client) = update.client {
                new_record.placement.client = client;
            }
            if let Some(track) = update.track {
                new_record.placement.track = track;
            }
            if let Some(role) = update.role {
                new_record.placement.role = role;
            }
            if let Some(reporting_to) = update.reporting_to {
                new_record.placement.reporting_to = reporting_to;
            }
            if let Some(hr_partner) = update.hr_partner {
                new_record.placement.hr_partner = hr_partner;
            }
            if let Some(work_location) = update.work_location {
                new_record.placement.work_location = work_location;
            }
            if let Some(team) = update.team {
                new_record.placement.team = team;
            }

            let action: Action = Action::new(
                String::from("UpdatePlacement"),
                Some(String::from("Edited placement details")),
            );
            let after: StateSnapshot = snapshot_deployment(&new_record);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, record.candidate_id);

            Ok(DeploymentTransition {
                new_record,
                audit_event,
            })
        }
        DeploymentCommand::RecordInternalTransfer {
            transfer_date,
            new_team,
            new_reporting_to,
        } => {
            record.status.validate_mutable("record an internal transfer")?;
            validate_required_text("new_team", &new_team)?;
            validate_required_text("new_reporting_to", &new_reporting_to)?;

            // Re-entrant by design: successive transfers overwrite these
            // fields, and the audit log is the history
            let mut new_record = record.clone();
            new_record.status = DeploymentStatus::InternalTransfer;
            new_record.internal_transfer_date = Some(transfer_date);
            new_record.transfer_team = Some(new_team.clone());
            new_record.transfer_reporting_to = Some(new_reporting_to);

            let action: Action = Action::new(
                String::from("RecordInternalTransfer"),
                Some(format!(
                    "Transferred to team '{new_team}' on {transfer_date}"
                )),
            );
            let after: StateSnapshot = snapshot_deployment(&new_record);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, record.candidate_id);

            Ok(DeploymentTransition {
                new_record,
                audit_event,
            })
        }
        DeploymentCommand::Exit { exit_reason } => {
            if record.status.is_terminal() {
                return Err(CoreError::DomainViolation(DomainError::InvalidState {
                    current: record.status.as_str(),
                    operation: "exit",
                }));
            }
            validate_exit_reason(&exit_reason)?;

            let mut new_record = record.clone();
            new_record.status = DeploymentStatus::Inactive;
            new_record.exit_date = Some(today);
            new_record.exit_reason = Some(exit_reason.trim().to_string());

            let action: Action = Action::new(
                String::from("Exit"),
                Some(format!("Exited on {today}")),
            );
            let after: StateSnapshot = snapshot_deployment(&new_record);
            let audit_event: AuditEvent =
                AuditEvent::new(actor, cause, action, before, after, record.candidate_id);

            Ok(DeploymentTransition {
                new_record,
                audit_event,
            })
        }
    }
}

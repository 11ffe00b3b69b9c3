// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hireflow_domain::Team;
use hireflow_store::MemoryStore;

use super::helpers::{
    FailingNotifier, RecordingNotifier, deploy_candidate, placement_input, register_request,
    setup_candidate, test_actor, test_cause,
};
use crate::error::ApiError;
use crate::handlers::{
    assign_office_email, assign_permanent_id, assign_temporary_id, exit_deployment,
    get_audit_trail, get_candidate, get_deployment_stats, get_ld_outcome_stats,
    get_pipeline_stats, get_tenure, list_candidates, mark_sent_to_next_stage,
    record_internal_transfer, record_training_outcome, register_candidate, send_deployment_email,
    update_placement,
};
use crate::request_response::{
    AssignOfficeEmailRequest, AssignPermanentIdRequest, AssignTemporaryIdRequest, ExitRequest,
    MarkSentToNextStageRequest, PlacementInput, RecordInternalTransferRequest,
    RecordTrainingOutcomeRequest, SendDeploymentEmailRequest, UpdatePlacementRequest,
};

#[test]
fn test_register_candidate_returns_intake_stage() {
    let store = MemoryStore::new();
    let response = register_candidate(
        &store,
        register_request("fresher"),
        &test_actor(Team::Admin),
        test_cause(),
    )
    .unwrap();

    assert_eq!(response.candidate_id, 1);
    assert_eq!(response.stage, "intake");
    assert!(response.message.contains("Asha Rao"));
}

#[test]
fn test_register_candidate_rejects_unknown_experience_level() {
    let store = MemoryStore::new();
    let mut request = register_request("fresher");
    request.experience_level = String::from("junior");

    let result = register_candidate(&store, request, &test_actor(Team::Admin), test_cause());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "experience_level"
    ));
}

#[test]
fn test_assign_temporary_id_normalizes_value() {
    let store = MemoryStore::new();
    let candidate_id = setup_candidate(&store);

    let response = assign_temporary_id(
        &store,
        AssignTemporaryIdRequest {
            candidate_id,
            employee_id: String::from("emp001"),
        },
        &test_actor(Team::It),
        test_cause(),
    )
    .unwrap();

    assert_eq!(response.employee_id, "EMP001");
}

#[test]
fn test_assign_temporary_id_unknown_candidate() {
    let store = MemoryStore::new();
    let result = assign_temporary_id(
        &store,
        AssignTemporaryIdRequest {
            candidate_id: 99,
            employee_id: String::from("EMP001"),
        },
        &test_actor(Team::HrOps),
        test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Candidate"
    ));
}

#[test]
fn test_double_office_email_is_a_write_once_violation() {
    let store = MemoryStore::new();
    let candidate_id = setup_candidate(&store);
    let request = AssignOfficeEmailRequest {
        candidate_id,
        office_email: String::from("asha.rao@corp.example.com"),
    };
    assign_office_email(&store, request.clone(), &test_actor(Team::HrOps), test_cause()).unwrap();

    let result = assign_office_email(&store, request, &test_actor(Team::It), test_cause());

    assert!(matches!(
        result,
        Err(ApiError::LifecycleRuleViolation { ref rule, .. })
            if rule == "write_once_assignment"
    ));
}

#[test]
fn test_permanent_id_before_temporary_id_is_an_ordering_violation() {
    let store = MemoryStore::new();
    let candidate_id = setup_candidate(&store);

    let result = assign_permanent_id(
        &store,
        AssignPermanentIdRequest {
            candidate_id,
            permanent_employee_id: String::from("PERM0001"),
        },
        &test_actor(Team::HrOps),
        test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::LifecycleRuleViolation { ref rule, .. })
            if rule == "ordering_prerequisite"
    ));
}

#[test]
fn test_record_training_outcome_rejects_unknown_outcome() {
    let store = MemoryStore::new();
    let candidate_id = setup_candidate(&store);

    let result = record_training_outcome(
        &store,
        RecordTrainingOutcomeRequest {
            candidate_id,
            outcome: String::from("maybe"),
            reason: None,
        },
        &test_actor(Team::LearningDevelopment),
        test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "outcome"
    ));
}

#[test]
fn test_mark_sent_rejects_unknown_flag() {
    let store = MemoryStore::new();
    let candidate_id = setup_candidate(&store);

    let result = mark_sent_to_next_stage(
        &store,
        MarkSentToNextStageRequest {
            candidate_id,
            stage_flag: String::from("sent_to_finance"),
        },
        &test_actor(Team::Admin),
        test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "stage_flag"
    ));
}

#[test]
fn test_send_deployment_email_notifies_with_committed_details() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let candidate_id = setup_candidate(&store);

    let response = deploy_candidate(&store, &notifier, candidate_id);

    assert_eq!(response.deployment_id, 1);
    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].candidate_id, candidate_id);
    assert_eq!(events[0].deployment_id, 1);
    assert_eq!(events[0].recipient, "asha.rao@corp.example.com");
    assert_eq!(events[0].client, "Acme Corp");
    assert_eq!(events[0].date_of_joining, "2026-03-02");
}

#[test]
fn test_notifier_failure_does_not_roll_back_the_commit() {
    let store = MemoryStore::new();
    let candidate_id = setup_candidate(&store);
    assign_office_email(
        &store,
        AssignOfficeEmailRequest {
            candidate_id,
            office_email: String::from("asha.rao@corp.example.com"),
        },
        &test_actor(Team::HrOps),
        test_cause(),
    )
    .unwrap();
    record_training_outcome(
        &store,
        RecordTrainingOutcomeRequest {
            candidate_id,
            outcome: String::from("selected"),
            reason: None,
        },
        &test_actor(Team::LearningDevelopment),
        test_cause(),
    )
    .unwrap();

    let result = send_deployment_email(
        &store,
        &FailingNotifier,
        SendDeploymentEmailRequest {
            candidate_id,
            placement: placement_input(),
        },
        &test_actor(Team::Delivery),
        test_cause(),
    );

    assert!(matches!(result, Err(ApiError::NotificationFailed { .. })));
    // The flag and the record stand
    let candidate = get_candidate(&store, candidate_id).unwrap().candidate;
    assert!(candidate.deployment_email_sent);
    assert_eq!(get_deployment_stats(&store).unwrap().stats.active, 1);
}

#[test]
fn test_update_placement_round_trip() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let candidate_id = setup_candidate(&store);
    let deployment_id = deploy_candidate(&store, &notifier, candidate_id).deployment_id;

    let response = update_placement(
        &store,
        UpdatePlacementRequest {
            deployment_id,
            client: Some(String::from("Globex")),
            ..UpdatePlacementRequest::default()
        },
        &test_actor(Team::Delivery),
        test_cause(),
    )
    .unwrap();

    assert_eq!(response.deployment_id, deployment_id);
}

#[test]
fn test_internal_transfer_reports_new_status() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let candidate_id = setup_candidate(&store);
    let deployment_id = deploy_candidate(&store, &notifier, candidate_id).deployment_id;

    let response = record_internal_transfer(
        &store,
        RecordInternalTransferRequest {
            deployment_id,
            transfer_date: String::from("2026-05-01"),
            new_team: String::from("Lending"),
            new_reporting_to: String::from("Kiran Shah"),
        },
        &test_actor(Team::Delivery),
        test_cause(),
    )
    .unwrap();

    assert_eq!(response.status, "internal_transfer");
}

#[test]
fn test_transfer_rejects_malformed_date() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let candidate_id = setup_candidate(&store);
    let deployment_id = deploy_candidate(&store, &notifier, candidate_id).deployment_id;

    let result = record_internal_transfer(
        &store,
        RecordInternalTransferRequest {
            deployment_id,
            transfer_date: String::from("01/05/2026"),
            new_team: String::from("Lending"),
            new_reporting_to: String::from("Kiran Shah"),
        },
        &test_actor(Team::Delivery),
        test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "transfer_date"
    ));
}

#[test]
fn test_exit_freezes_the_record() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let candidate_id = setup_candidate(&store);
    let deployment_id = deploy_candidate(&store, &notifier, candidate_id).deployment_id;

    exit_deployment(
        &store,
        ExitRequest {
            deployment_id,
            exit_reason: String::from("End of engagement"),
        },
        &test_actor(Team::Delivery),
        test_cause(),
    )
    .unwrap();

    let result = update_placement(
        &store,
        UpdatePlacementRequest {
            deployment_id,
            client: Some(String::from("Globex")),
            ..UpdatePlacementRequest::default()
        },
        &test_actor(Team::Delivery),
        test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::LifecycleRuleViolation { ref rule, .. }) if rule == "terminal_status"
    ));
}

#[test]
fn test_tenure_runs_from_joining_to_as_of() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let candidate_id = setup_candidate(&store);

    let mut placement: PlacementInput = placement_input();
    placement.date_of_joining = String::from("2024-01-01");
    assign_office_email(
        &store,
        AssignOfficeEmailRequest {
            candidate_id,
            office_email: String::from("asha.rao@corp.example.com"),
        },
        &test_actor(Team::HrOps),
        test_cause(),
    )
    .unwrap();
    record_training_outcome(
        &store,
        RecordTrainingOutcomeRequest {
            candidate_id,
            outcome: String::from("selected"),
            reason: None,
        },
        &test_actor(Team::LearningDevelopment),
        test_cause(),
    )
    .unwrap();
    let deployment_id = send_deployment_email(
        &store,
        &notifier,
        SendDeploymentEmailRequest {
            candidate_id,
            placement,
        },
        &test_actor(Team::Delivery),
        test_cause(),
    )
    .unwrap()
    .deployment_id;

    let response = get_tenure(&store, deployment_id, "2024-07-01").unwrap();
    assert_eq!(response.tenure_days, 182);

    // Same inputs, same answer
    let again = get_tenure(&store, deployment_id, "2024-07-01").unwrap();
    assert_eq!(again.tenure_days, 182);
}

#[test]
fn test_audit_trail_lists_transitions_oldest_first() {
    let store = MemoryStore::new();
    let candidate_id = setup_candidate(&store);
    assign_temporary_id(
        &store,
        AssignTemporaryIdRequest {
            candidate_id,
            employee_id: String::from("EMP001"),
        },
        &test_actor(Team::It),
        test_cause(),
    )
    .unwrap();

    let trail = get_audit_trail(&store, candidate_id).unwrap();

    assert_eq!(trail.entries.len(), 2);
    assert_eq!(trail.entries[0].action, "RegisterCandidate");
    assert_eq!(trail.entries[1].action, "AssignTemporaryId");
    assert_eq!(trail.entries[1].actor_team, "it");
}

#[test]
fn test_audit_trail_for_unknown_candidate() {
    let store = MemoryStore::new();
    let result = get_audit_trail(&store, 42);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_stats_handlers_project_the_population() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let first = setup_candidate(&store);
    setup_candidate(&store);
    deploy_candidate(&store, &notifier, first);

    assert_eq!(list_candidates(&store).unwrap().candidates.len(), 2);

    let pipeline = get_pipeline_stats(&store).unwrap().stats;
    assert_eq!(pipeline.deployed, 1);
    assert_eq!(pipeline.intake, 1);
    assert_eq!(pipeline.total, 2);

    let ld = get_ld_outcome_stats(&store).unwrap().stats;
    assert_eq!(ld.selected, 1);
    assert_eq!(ld.pending, 1);

    let deployments = get_deployment_stats(&store).unwrap().stats;
    assert_eq!(deployments.active, 1);
    assert_eq!(deployments.total, 1);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;
use std::thread;

use hireflow::{
    Command, CoreError, DeploymentCommand, DeploymentSeed, TransitionResult, apply,
    apply_deployment, apply_intake, snapshot_candidate,
};
use hireflow_audit::{Action, Actor, AuditEvent, Cause};
use hireflow_domain::{
    Candidate, CandidateId, DeploymentStatus, DomainError, ExperienceLevel, PlacementDetails, Team,
    TrainingOutcome,
};
use time::OffsetDateTime;
use time::macros::{date, datetime};

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::store::{CandidateCommitted, Store};

const NOW: OffsetDateTime = datetime!(2026-02-10 09:30:00 UTC);

fn test_actor(team: Team) -> Actor {
    Actor::new(String::from("op-001"), team)
}

fn test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Operator request"))
}

fn test_placement() -> PlacementDetails {
    PlacementDetails {
        business_unit: String::from("Digital"),
        client: String::from("Acme Corp"),
        track: String::from("Platform Engineering"),
        role: String::from("Associate Engineer"),
        reporting_to: String::from("Meera Iyer"),
        hr_partner: String::from("Rohan Das"),
        work_location: String::from("Bengaluru"),
        team: String::from("Payments"),
        doj: date!(2026 - 03 - 02),
    }
}

fn register_command(name: &str) -> Command {
    Command::RegisterCandidate {
        full_name: String::from(name),
        gender: String::from("Female"),
        mobile: String::from("+919876543210"),
        personal_email: String::from("asha.rao@example.com"),
        experience_level: ExperienceLevel::Lateral,
        batch_label: None,
    }
}

fn register(store: &MemoryStore, name: &str) -> Candidate {
    store
        .register_candidate(&|id| {
            apply_intake(
                id,
                register_command(name),
                test_actor(Team::Admin),
                test_cause(),
                NOW,
            )
        })
        .unwrap()
}

fn run_command(store: &MemoryStore, id: CandidateId, command: Command) -> CandidateCommitted {
    store
        .transition_candidate(id, &|current| {
            apply(
                current,
                command.clone(),
                test_actor(Team::HrOps),
                test_cause(),
                NOW,
            )
        })
        .unwrap()
}

/// Walks a candidate to the deployment email, returning the committed
/// record's candidate.
fn deploy(store: &MemoryStore, id: CandidateId) -> CandidateCommitted {
    run_command(
        store,
        id,
        Command::AssignOfficeEmail {
            office_email: String::from("asha.rao@corp.example.com"),
        },
    );
    run_command(
        store,
        id,
        Command::RecordTrainingOutcome {
            outcome: TrainingOutcome::Selected,
            reason: None,
        },
    );
    run_command(
        store,
        id,
        Command::SendDeploymentEmail {
            placement: test_placement(),
        },
    )
}

#[test]
fn test_register_allocates_sequential_ids() {
    let store = MemoryStore::new();
    let first = register(&store, "Asha Rao");
    let second = register(&store, "Vikram Nair");

    assert_eq!(first.id, CandidateId::new(1));
    assert_eq!(second.id, CandidateId::new(2));
    assert_eq!(store.candidates().unwrap().len(), 2);
}

#[test]
fn test_rejected_intake_commits_nothing() {
    let store = MemoryStore::new();
    let result = store.register_candidate(&|id| {
        apply_intake(
            id,
            Command::RegisterCandidate {
                full_name: String::from("Asha Rao"),
                gender: String::from("Female"),
                mobile: String::from("+919876543210"),
                personal_email: String::from("not-an-email"),
                experience_level: ExperienceLevel::Lateral,
                batch_label: None,
            },
            test_actor(Team::Admin),
            test_cause(),
            NOW,
        )
    });

    assert!(matches!(result, Err(StoreError::Transition(_))));
    assert!(store.candidates().unwrap().is_empty());
    assert!(store.audit_log(CandidateId::new(1)).unwrap().is_empty());

    // The failed attempt does not burn the ID
    let candidate = register(&store, "Asha Rao");
    assert_eq!(candidate.id, CandidateId::new(1));
}

#[test]
fn test_missing_candidate_is_reported() {
    let store = MemoryStore::new();
    assert_eq!(
        store.candidate(CandidateId::new(42)),
        Err(StoreError::CandidateNotFound(42))
    );
}

#[test]
fn test_transition_commits_candidate_and_audit() {
    let store = MemoryStore::new();
    let candidate = register(&store, "Asha Rao");

    let committed = run_command(
        &store,
        candidate.id,
        Command::AssignTemporaryId {
            employee_id: String::from("EMP001"),
        },
    );

    assert!(committed.candidate.employee_id.is_some());
    assert!(committed.deployment.is_none());
    assert_eq!(store.candidate(candidate.id).unwrap(), committed.candidate);

    let trail = store.audit_log(candidate.id).unwrap();
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0].action.name, "RegisterCandidate");
    assert_eq!(trail[1].action.name, "AssignTemporaryId");
}

#[test]
fn test_rejected_transition_leaves_state_unchanged() {
    let store = MemoryStore::new();
    let candidate = register(&store, "Asha Rao");
    run_command(
        &store,
        candidate.id,
        Command::AssignTemporaryId {
            employee_id: String::from("EMP001"),
        },
    );

    let result = store.transition_candidate(candidate.id, &|current| {
        apply(
            current,
            Command::AssignTemporaryId {
                employee_id: String::from("EMP002"),
            },
            test_actor(Team::It),
            test_cause(),
            NOW,
        )
    });

    assert!(matches!(result, Err(StoreError::Transition(_))));
    let stored = store.candidate(candidate.id).unwrap();
    assert_eq!(stored.employee_id.unwrap().value.value(), "EMP001");
    // The rejected command left no audit event
    assert_eq!(store.audit_log(candidate.id).unwrap().len(), 2);
}

#[test]
fn test_deployment_email_commits_flag_and_record_together() {
    let store = MemoryStore::new();
    let candidate = register(&store, "Asha Rao");

    let committed = deploy(&store, candidate.id);

    assert!(committed.candidate.deployment_email_sent);
    let record = committed.deployment.unwrap();
    assert_eq!(record.candidate_id, candidate.id);
    assert_eq!(record.status, DeploymentStatus::Active);
    assert_eq!(record.email_sent_at, NOW);

    assert_eq!(store.deployment(record.id).unwrap(), record);
    assert_eq!(store.deployment_for_candidate(candidate.id).unwrap(), record);
}

#[test]
fn test_at_most_one_deployment_record_per_candidate() {
    let store = MemoryStore::new();
    let candidate = register(&store, "Asha Rao");
    deploy(&store, candidate.id);

    // A transition smuggling a second seed past the flag check hits the
    // store's unique key
    let result = store.transition_candidate(candidate.id, &|current| {
        Ok(TransitionResult {
            new_candidate: current.clone(),
            audit_event: AuditEvent::new(
                test_actor(Team::Delivery),
                test_cause(),
                Action::new(String::from("SendDeploymentEmail"), None),
                snapshot_candidate(current),
                snapshot_candidate(current),
                current.id,
            ),
            deployment_seed: Some(DeploymentSeed {
                candidate_id: current.id,
                placement: test_placement(),
                email_sent_at: NOW,
            }),
        })
    });

    assert_eq!(
        result,
        Err(StoreError::Transition(CoreError::DomainViolation(
            DomainError::DuplicateRecord { candidate_id: 1 }
        )))
    );
    assert_eq!(store.deployments().unwrap().len(), 1);
}

#[test]
fn test_deployment_transition_round_trip() {
    let store = MemoryStore::new();
    let candidate = register(&store, "Asha Rao");
    let record = deploy(&store, candidate.id).deployment.unwrap();

    let exited = store
        .transition_deployment(record.id, &|current| {
            apply_deployment(
                current,
                DeploymentCommand::Exit {
                    exit_reason: String::from("End of engagement"),
                },
                test_actor(Team::Delivery),
                test_cause(),
                date!(2026 - 06 - 15),
            )
        })
        .unwrap();

    assert_eq!(exited.status, DeploymentStatus::Inactive);
    assert_eq!(store.deployment(record.id).unwrap(), exited);

    // Deployment events land on the same candidate-scoped trail
    let trail = store.audit_log(candidate.id).unwrap();
    assert_eq!(trail.last().unwrap().action.name, "Exit");
}

#[test]
fn test_concurrent_assignment_has_exactly_one_winner() {
    let store = Arc::new(MemoryStore::new());
    let candidate = register(&store, "Asha Rao");

    let handles: Vec<_> = ["EMP100", "EMP200"]
        .into_iter()
        .map(|employee_id| {
            let store = Arc::clone(&store);
            let id = candidate.id;
            thread::spawn(move || {
                store.transition_candidate(id, &|current| {
                    apply(
                        current,
                        Command::AssignTemporaryId {
                            employee_id: String::from(employee_id),
                        },
                        test_actor(Team::It),
                        test_cause(),
                        NOW,
                    )
                })
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);

    // The loser observed the winner's committed value
    let loser = results.iter().find(|r| r.is_err()).unwrap();
    assert!(matches!(
        loser,
        Err(StoreError::Transition(CoreError::DomainViolation(
            DomainError::AlreadyAssigned {
                field: "employee_id",
                ..
            }
        )))
    ));

    let stored = store.candidate(candidate.id).unwrap();
    let value = stored.employee_id.unwrap().value;
    assert!(value.value() == "EMP100" || value.value() == "EMP200");
}

#[test]
fn test_snapshot_round_trip_preserves_entities_and_counters() {
    let store = MemoryStore::new();
    let candidate = register(&store, "Asha Rao");
    let record = deploy(&store, candidate.id).deployment.unwrap();

    let snapshot = store.snapshot_json().unwrap();
    let restored = MemoryStore::from_snapshot_json(&snapshot).unwrap();

    assert_eq!(restored.candidates().unwrap(), store.candidates().unwrap());
    assert_eq!(restored.deployment(record.id).unwrap(), record);
    assert_eq!(
        restored.deployment_for_candidate(candidate.id).unwrap(),
        record
    );

    // Fresh registrations continue past the restored IDs
    let next = register(&restored, "Vikram Nair");
    assert_eq!(next.id, CandidateId::new(2));
}

#[test]
fn test_malformed_snapshot_is_rejected() {
    let result = MemoryStore::from_snapshot_json("{not json");
    assert!(matches!(result, Err(StoreError::SerializationError(_))));
}

#[test]
fn test_audit_log_is_scoped_to_one_candidate() {
    let store = MemoryStore::new();
    let first = register(&store, "Asha Rao");
    let second = register(&store, "Vikram Nair");
    run_command(
        &store,
        first.id,
        Command::AssignTemporaryId {
            employee_id: String::from("EMP001"),
        },
    );

    assert_eq!(store.audit_log(first.id).unwrap().len(), 2);
    assert_eq!(store.audit_log(second.id).unwrap().len(), 1);
}

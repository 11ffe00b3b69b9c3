// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Mutex;

use hireflow_audit::Cause;
use hireflow_domain::Team;
use hireflow_store::MemoryStore;

use crate::auth::AuthenticatedActor;
use crate::handlers::{
    assign_office_email, record_training_outcome, register_candidate, send_deployment_email,
};
use crate::notify::{DeploymentEmailRequested, DeploymentNotifier, NotifyError};
use crate::request_response::{
    AssignOfficeEmailRequest, PlacementInput, RecordTrainingOutcomeRequest,
    RegisterCandidateRequest, SendDeploymentEmailRequest, SendDeploymentEmailResponse,
};

/// Notifier that records every event it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<DeploymentEmailRequested>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DeploymentEmailRequested> {
        self.events.lock().unwrap().clone()
    }
}

impl DeploymentNotifier for RecordingNotifier {
    fn deployment_email_requested(
        &self,
        event: &DeploymentEmailRequested,
    ) -> Result<(), NotifyError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Notifier that always fails.
#[derive(Debug, Default)]
pub struct FailingNotifier;

impl DeploymentNotifier for FailingNotifier {
    fn deployment_email_requested(
        &self,
        _event: &DeploymentEmailRequested,
    ) -> Result<(), NotifyError> {
        Err(NotifyError::Unavailable {
            reason: String::from("mail relay down"),
        })
    }
}

pub fn test_actor(team: Team) -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("op-001"), team)
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Operator request"))
}

pub fn register_request(experience_level: &str) -> RegisterCandidateRequest {
    let batch_label = if experience_level == "fresher" {
        Some(String::from("B-2026-03"))
    } else {
        None
    };
    RegisterCandidateRequest {
        full_name: String::from("Asha Rao"),
        gender: String::from("Female"),
        mobile: String::from("+919876543210"),
        personal_email: String::from("asha.rao@example.com"),
        experience_level: String::from(experience_level),
        batch_label,
    }
}

pub fn placement_input() -> PlacementInput {
    PlacementInput {
        business_unit: String::from("Digital"),
        client: String::from("Acme Corp"),
        track: String::from("Platform Engineering"),
        role: String::from("Associate Engineer"),
        reporting_to: String::from("Meera Iyer"),
        hr_partner: String::from("Rohan Das"),
        work_location: String::from("Bengaluru"),
        team: String::from("Payments"),
        date_of_joining: String::from("2026-03-02"),
    }
}

/// Registers a lateral candidate through the API, returning its ID.
pub fn setup_candidate(store: &MemoryStore) -> i64 {
    register_candidate(
        store,
        register_request("lateral"),
        &test_actor(Team::Admin),
        test_cause(),
    )
    .unwrap()
    .candidate_id
}

/// Walks a candidate to a committed deployment email.
pub fn deploy_candidate(
    store: &MemoryStore,
    notifier: &dyn DeploymentNotifier,
    candidate_id: i64,
) -> SendDeploymentEmailResponse {
    assign_office_email(
        store,
        AssignOfficeEmailRequest {
            candidate_id,
            office_email: String::from("asha.rao@corp.example.com"),
        },
        &test_actor(Team::HrOps),
        test_cause(),
    )
    .unwrap();
    record_training_outcome(
        store,
        RecordTrainingOutcomeRequest {
            candidate_id,
            outcome: String::from("selected"),
            reason: None,
        },
        &test_actor(Team::LearningDevelopment),
        test_cause(),
    )
    .unwrap();
    send_deployment_email(
        store,
        notifier,
        SendDeploymentEmailRequest {
            candidate_id,
            placement: placement_input(),
        },
        &test_actor(Team::Delivery),
        test_cause(),
    )
    .unwrap()
}

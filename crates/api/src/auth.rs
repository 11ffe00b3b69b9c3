// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use hireflow_audit::Actor;
use hireflow_domain::Team;

use crate::error::AuthError;

/// An authenticated actor with an associated team.
///
/// This represents a portal operator who has been authenticated and
/// has permission to perform certain actions based on their team.
/// Operators act on behalf of candidates; candidates never authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The team this actor acts for.
    pub team: Team,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `team` - The team this actor acts for
    #[must_use]
    pub const fn new(id: String, team: Team) -> Self {
        Self { id, team }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording audit events to attribute actions
    /// to the authenticated operator.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.team)
    }
}

/// Stub authentication function.
///
/// Credential verification is out of scope for this crate; the caller
/// integrates with its own identity layer and hands over an already
/// trusted identity.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the actor to authenticate
/// * `team` - The team to assign to the actor
///
/// # Errors
///
/// Returns an error if the actor ID is empty.
pub fn authenticate_stub(actor_id: String, team: Team) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, team))
}

/// Authorization service for enforcing team-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific action based on their team.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require(
        actor: &AuthenticatedActor,
        allowed: &[Team],
        action: &str,
    ) -> Result<(), AuthError> {
        if allowed.contains(&actor.team) {
            return Ok(());
        }
        let required_team: String = allowed
            .iter()
            .map(Team::as_str)
            .collect::<Vec<&str>>()
            .join(" or ");
        Err(AuthError::Unauthorized {
            action: String::from(action),
            required_team,
        })
    }

    /// Checks if an actor may register a candidate.
    ///
    /// Intake belongs to the Admin team.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_register_candidate(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::Admin], "register_candidate")
    }

    /// Checks if an actor may assign a temporary employee ID.
    ///
    /// HR-Ops and IT share this duty.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_assign_temporary_id(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::HrOps, Team::It], "assign_temporary_id")
    }

    /// Checks if an actor may assign an office email.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_assign_office_email(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::HrOps, Team::It], "assign_office_email")
    }

    /// Checks if an actor may assign a permanent employee ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_assign_permanent_id(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::HrOps], "assign_permanent_id")
    }

    /// Checks if an actor may record a training outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_record_training_outcome(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(
            actor,
            &[Team::LearningDevelopment],
            "record_training_outcome",
        )
    }

    /// Checks if an actor may raise the send-to-HR-Tag routing flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_route_to_hr_tag(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::Admin], "route_to_hr_tag")
    }

    /// Checks if an actor may raise the send-to-Delivery routing flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_route_to_delivery(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::HrOps], "route_to_delivery")
    }

    /// Checks if an actor may send the deployment email.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_send_deployment_email(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::Delivery], "send_deployment_email")
    }

    /// Checks if an actor may edit placement details.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_update_placement(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::Delivery], "update_placement")
    }

    /// Checks if an actor may record an internal transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_record_internal_transfer(
        actor: &AuthenticatedActor,
    ) -> Result<(), AuthError> {
        Self::require(actor, &[Team::Delivery], "record_internal_transfer")
    }

    /// Checks if an actor may exit a deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's team is not authorized.
    pub fn authorize_exit(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, &[Team::Delivery], "exit_deployment")
    }
}

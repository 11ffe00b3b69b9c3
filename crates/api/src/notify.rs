// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound notification boundary.
//!
//! The portal never sends mail itself. When a deployment email is
//! recorded, the API hands a [`DeploymentEmailRequested`] event to the
//! caller-supplied [`DeploymentNotifier`]. The committed state never
//! depends on the notifier: a failure surfaces to the caller while the
//! candidate flag and deployment record stand.

use thiserror::Error;

/// Notification delivery errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// The notification channel rejected the event.
    #[error("Notification rejected: {reason}")]
    Rejected {
        /// Why the channel rejected the event.
        reason: String,
    },

    /// The notification channel is unreachable.
    #[error("Notification channel unavailable: {reason}")]
    Unavailable {
        /// Why the channel is unreachable.
        reason: String,
    },
}

/// The event emitted after a deployment email send is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentEmailRequested {
    /// The candidate the deployment belongs to.
    pub candidate_id: i64,
    /// The deployment record created by the send.
    pub deployment_id: i64,
    /// The office email address the send is addressed to.
    pub recipient: String,
    /// The client the candidate is placed with.
    pub client: String,
    /// The role the candidate is placed into.
    pub role: String,
    /// The date of joining, ISO 8601.
    pub date_of_joining: String,
}

/// Outbound collaborator that carries deployment email requests.
pub trait DeploymentNotifier {
    /// Delivers a deployment email request.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be delivered. The caller's
    /// committed state is unaffected either way.
    fn deployment_email_requested(
        &self,
        event: &DeploymentEmailRequested,
    ) -> Result<(), NotifyError>;
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use hireflow::{CoreError, DeploymentTransition, IntakeResult, TransitionResult};
use hireflow_audit::AuditEvent;
use hireflow_domain::{Candidate, CandidateId, DeploymentId, DeploymentRecord, DomainError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::store::{CandidateCommitted, Store};

/// A JSON-serializable dump of store state.
///
/// The audit trail is not part of the snapshot; it is an append-only log
/// with its own lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreSnapshot {
    candidates: Vec<Candidate>,
    deployments: Vec<DeploymentRecord>,
}

#[derive(Debug, Default)]
struct Inner {
    candidates: BTreeMap<i64, Candidate>,
    deployments: BTreeMap<i64, DeploymentRecord>,
    /// Unique key: at most one deployment record per candidate.
    deployment_by_candidate: BTreeMap<i64, i64>,
    next_candidate_id: i64,
    next_deployment_id: i64,
    audit: Vec<AuditEvent>,
}

/// In-memory reference store.
///
/// All mutations run under one lock, which gives the serialized-commit
/// guarantee the [`Store`] contract requires. Suitable for tests and
/// single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from a JSON snapshot produced by
    /// [`Self::snapshot_json`].
    ///
    /// ID counters and the per-candidate unique index are rebuilt from the
    /// snapshot contents. The audit trail starts empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SerializationError` if the snapshot does not
    /// parse.
    pub fn from_snapshot_json(snapshot: &str) -> Result<Self, StoreError> {
        let snapshot: StoreSnapshot = serde_json::from_str(snapshot)
            .map_err(|err| StoreError::SerializationError(err.to_string()))?;

        let mut inner: Inner = Inner::default();
        for candidate in snapshot.candidates {
            let id: i64 = candidate.id.value();
            inner.next_candidate_id = inner.next_candidate_id.max(id);
            inner.candidates.insert(id, candidate);
        }
        for record in snapshot.deployments {
            let id: i64 = record.id.value();
            inner.next_deployment_id = inner.next_deployment_id.max(id);
            inner
                .deployment_by_candidate
                .insert(record.candidate_id.value(), id);
            inner.deployments.insert(id, record);
        }

        info!(
            candidates = inner.candidates.len(),
            deployments = inner.deployments.len(),
            "Restored store from snapshot"
        );
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    /// Serializes current candidates and deployment records to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable or serialization fails.
    pub fn snapshot_json(&self) -> Result<String, StoreError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        let snapshot: StoreSnapshot = StoreSnapshot {
            candidates: inner.candidates.values().cloned().collect(),
            deployments: inner.deployments.values().cloned().collect(),
        };
        serde_json::to_string(&snapshot)
            .map_err(|err| StoreError::SerializationError(err.to_string()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}

impl Store for MemoryStore {
    fn candidate(&self, id: CandidateId) -> Result<Candidate, StoreError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        inner
            .candidates
            .get(&id.value())
            .cloned()
            .ok_or(StoreError::CandidateNotFound(id.value()))
    }

    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        Ok(inner.candidates.values().cloned().collect())
    }

    fn deployment(&self, id: DeploymentId) -> Result<DeploymentRecord, StoreError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        inner
            .deployments
            .get(&id.value())
            .cloned()
            .ok_or(StoreError::DeploymentNotFound(id.value()))
    }

    fn deployment_for_candidate(
        &self,
        candidate_id: CandidateId,
    ) -> Result<DeploymentRecord, StoreError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        let record_id: i64 = *inner
            .deployment_by_candidate
            .get(&candidate_id.value())
            .ok_or(StoreError::NoDeploymentForCandidate(candidate_id.value()))?;
        inner
            .deployments
            .get(&record_id)
            .cloned()
            .ok_or(StoreError::DeploymentNotFound(record_id))
    }

    fn deployments(&self) -> Result<Vec<DeploymentRecord>, StoreError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        Ok(inner.deployments.values().cloned().collect())
    }

    fn register_candidate(
        &self,
        transition: &dyn Fn(CandidateId) -> Result<IntakeResult, CoreError>,
    ) -> Result<Candidate, StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;

        let id: CandidateId = CandidateId::new(inner.next_candidate_id + 1);
        let result: IntakeResult = transition(id)?;

        inner.next_candidate_id = id.value();
        inner.candidates.insert(id.value(), result.candidate.clone());
        inner.audit.push(result.audit_event);

        info!(candidate_id = id.value(), "Registered candidate");
        Ok(result.candidate)
    }

    fn transition_candidate(
        &self,
        id: CandidateId,
        transition: &dyn Fn(&Candidate) -> Result<TransitionResult, CoreError>,
    ) -> Result<CandidateCommitted, StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;

        // The closure sees the latest committed state, never a stale read
        let current: Candidate = inner
            .candidates
            .get(&id.value())
            .cloned()
            .ok_or(StoreError::CandidateNotFound(id.value()))?;
        let result: TransitionResult = transition(&current)?;

        let deployment: Option<DeploymentRecord> = match result.deployment_seed {
            Some(seed) => {
                if inner.deployment_by_candidate.contains_key(&id.value()) {
                    return Err(StoreError::Transition(CoreError::DomainViolation(
                        DomainError::DuplicateRecord {
                            candidate_id: id.value(),
                        },
                    )));
                }
                let record_id: DeploymentId = DeploymentId::new(inner.next_deployment_id + 1);
                let record: DeploymentRecord = seed.into_record(record_id);

                inner.next_deployment_id = record_id.value();
                inner
                    .deployment_by_candidate
                    .insert(id.value(), record_id.value());
                inner.deployments.insert(record_id.value(), record.clone());

                debug!(
                    candidate_id = id.value(),
                    deployment_id = record_id.value(),
                    "Created deployment record"
                );
                Some(record)
            }
            None => None,
        };

        inner.candidates.insert(id.value(), result.new_candidate.clone());
        inner.audit.push(result.audit_event);

        debug!(candidate_id = id.value(), "Committed candidate transition");
        Ok(CandidateCommitted {
            candidate: result.new_candidate,
            deployment,
        })
    }

    fn transition_deployment(
        &self,
        id: DeploymentId,
        transition: &dyn Fn(&DeploymentRecord) -> Result<DeploymentTransition, CoreError>,
    ) -> Result<DeploymentRecord, StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;

        let current: DeploymentRecord = inner
            .deployments
            .get(&id.value())
            .cloned()
            .ok_or(StoreError::DeploymentNotFound(id.value()))?;
        let result: DeploymentTransition = transition(&current)?;

        inner.deployments.insert(id.value(), result.new_record.clone());
        inner.audit.push(result.audit_event);

        debug!(deployment_id = id.value(), "Committed deployment transition");
        Ok(result.new_record)
    }

    fn audit_log(&self, candidate_id: CandidateId) -> Result<Vec<AuditEvent>, StoreError> {
        let inner: MutexGuard<'_, Inner> = self.lock()?;
        Ok(inner
            .audit
            .iter()
            .filter(|event| event.candidate_id == candidate_id)
            .cloned()
            .collect())
    }
}

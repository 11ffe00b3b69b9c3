// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::deployment_status::DeploymentStatus;
use crate::error::DomainError;
use crate::ld_status::LdStatus;
use crate::validation::{
    validate_email, validate_employee_id, validate_mobile, validate_permanent_employee_id,
    validate_required_text,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Opaque identifier for a candidate.
///
/// Candidate IDs are assigned by the storage collaborator and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(i64);

impl CandidateId {
    /// Creates a new `CandidateId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a deployment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeploymentId(i64);

impl DeploymentId {
    /// Creates a new `DeploymentId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The organizational teams whose members act on candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// Admin intake: owns candidate creation and HR-Tag routing.
    Admin,
    /// HR tagging team.
    HrTag,
    /// HR operations: IDs, office email, Delivery routing.
    HrOps,
    /// IT: temporary IDs and office email.
    It,
    /// Learning & Development: training outcomes.
    LearningDevelopment,
    /// Delivery: deployment email, transfers, exits.
    Delivery,
}

impl Team {
    /// Returns the string representation of the team.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HrTag => "hr_tag",
            Self::HrOps => "hr_ops",
            Self::It => "it",
            Self::LearningDevelopment => "learning_development",
            Self::Delivery => "delivery",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "admin" => Ok(Self::Admin),
            "hr_tag" => Ok(Self::HrTag),
            "hr_ops" => Ok(Self::HrOps),
            "it" => Ok(Self::It),
            "learning_development" => Ok(Self::LearningDevelopment),
            "delivery" => Ok(Self::Delivery),
            _ => Err(DomainError::InvalidTeam(s.to_string())),
        }
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Experience classification of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New hire going through training; carries a batch label.
    Fresher,
    /// Experienced hire; skips the permanent-ID gate before delivery.
    Lateral,
}

impl ExperienceLevel {
    /// Returns the string representation of the level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fresher => "fresher",
            Self::Lateral => "lateral",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "fresher" => Ok(Self::Fresher),
            "lateral" => Ok(Self::Lateral),
            _ => Err(DomainError::InvalidExperienceLevel(s.to_string())),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// The routing flags a candidate can be forwarded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingFlag {
    /// Forward from Admin intake to the HR tagging team.
    HrTag,
    /// Forward to Delivery once the candidate is delivery-eligible.
    Delivery,
}

impl RoutingFlag {
    /// Returns the string representation of the flag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HrTag => "sent_to_hr_tag",
            Self::Delivery => "sent_to_delivery",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "sent_to_hr_tag" => Ok(Self::HrTag),
            "sent_to_delivery" => Ok(Self::Delivery),
            _ => Err(DomainError::InvalidRoutingFlag(s.to_string())),
        }
    }
}

impl FromStr for RoutingFlag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// A temporary employee ID.
///
/// Validated at construction: 3-10 ASCII alphanumeric characters,
/// normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId {
    value: String,
}

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the value is not 3-10
    /// alphanumeric characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        validate_employee_id(value)?;
        Ok(Self {
            value: value.to_uppercase(),
        })
    }

    /// Returns the ID value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A permanent employee ID.
///
/// Validated at construction: 4-12 ASCII alphanumeric characters,
/// normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermanentEmployeeId {
    value: String,
}

impl PermanentEmployeeId {
    /// Creates a new `PermanentEmployeeId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the value is not 4-12
    /// alphanumeric characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        validate_permanent_employee_id(value)?;
        Ok(Self {
            value: value.to_uppercase(),
        })
    }

    /// Returns the ID value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An assigned office email address.
///
/// Validated at construction, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfficeEmail {
    value: String,
}

impl OfficeEmail {
    /// Creates a new `OfficeEmail`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the value is not a plausible
    /// email address.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        validate_email("office_email", value)?;
        Ok(Self {
            value: value.to_lowercase(),
        })
    }

    /// Returns the email address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A write-once assignment with its provenance.
///
/// Records who assigned the value and when, alongside the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assigned<T> {
    /// The assigned value.
    pub value: T,
    /// When the assignment happened.
    pub assigned_at: OffsetDateTime,
    /// The actor ID that performed the assignment.
    pub assigned_by: String,
}

impl<T> Assigned<T> {
    /// Creates a new `Assigned`.
    #[must_use]
    pub const fn new(value: T, assigned_at: OffsetDateTime, assigned_by: String) -> Self {
        Self {
            value,
            assigned_at,
            assigned_by,
        }
    }
}

/// Contact and profile data captured at Admin intake.
///
/// All fields are immutable once the candidate is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// The candidate's full name.
    pub full_name: String,
    /// The candidate's gender, as captured at intake.
    pub gender: String,
    /// The candidate's mobile number.
    pub mobile: String,
    /// The candidate's personal email address.
    pub personal_email: String,
}

impl CandidateProfile {
    /// Creates a new validated `CandidateProfile`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if any field fails its rule:
    /// empty name or gender, malformed mobile number, malformed personal
    /// email.
    pub fn new(
        full_name: &str,
        gender: &str,
        mobile: &str,
        personal_email: &str,
    ) -> Result<Self, DomainError> {
        validate_required_text("full_name", full_name)?;
        validate_required_text("gender", gender)?;
        validate_mobile(mobile)?;
        validate_email("personal_email", personal_email)?;
        Ok(Self {
            full_name: full_name.trim().to_string(),
            gender: gender.trim().to_string(),
            mobile: mobile.to_string(),
            personal_email: personal_email.to_lowercase(),
        })
    }
}

/// One person moving through the recruitment pipeline.
///
/// Candidates are never deleted; terminal outcomes are recorded in status
/// fields instead of removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque, immutable identifier.
    pub id: CandidateId,
    /// Profile data owned by Admin intake.
    pub profile: CandidateProfile,
    /// Experience classification.
    pub experience_level: ExperienceLevel,
    /// Training batch label; only meaningful for Freshers.
    pub batch_label: Option<String>,
    /// Temporary employee ID, assigned once by HR-Ops or IT.
    pub employee_id: Option<Assigned<EmployeeId>>,
    /// Office email, assigned once by HR-Ops or IT.
    pub office_email: Option<Assigned<OfficeEmail>>,
    /// Permanent employee ID, assigned once by HR-Ops after the temporary ID.
    pub permanent_employee_id: Option<Assigned<PermanentEmployeeId>>,
    /// Routing flag: forwarded from intake to HR-Tag. Never reset.
    pub sent_to_hr_tag: bool,
    /// Routing flag: forwarded to Delivery. Never reset.
    pub sent_to_delivery: bool,
    /// L&D review status. The single re-enterable field.
    pub ld_status: LdStatus,
    /// Justification for a Rejected or Dropped outcome.
    pub ld_reason: Option<String>,
    /// When the L&D status was last recorded.
    pub ld_status_updated_at: Option<OffsetDateTime>,
    /// Actor ID that last recorded the L&D status.
    pub ld_status_updated_by: Option<String>,
    /// Set exactly once by the deployment-send transition.
    pub deployment_email_sent: bool,
    /// When the candidate was created.
    pub created_at: OffsetDateTime,
}

impl Candidate {
    /// Creates a new candidate at Admin intake.
    ///
    /// The candidate starts with no assignments, both routing flags down,
    /// and `LdStatus::Pending`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PrereqMissing` if a Fresher has no batch label.
    pub fn new(
        id: CandidateId,
        profile: CandidateProfile,
        experience_level: ExperienceLevel,
        batch_label: Option<String>,
        created_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        if experience_level == ExperienceLevel::Fresher
            && batch_label.as_deref().is_none_or(|l| l.trim().is_empty())
        {
            return Err(DomainError::PrereqMissing {
                operation: "register a fresher candidate",
                missing: "batch_label",
            });
        }
        Ok(Self {
            id,
            profile,
            experience_level,
            batch_label,
            employee_id: None,
            office_email: None,
            permanent_employee_id: None,
            sent_to_hr_tag: false,
            sent_to_delivery: false,
            ld_status: LdStatus::Pending,
            ld_reason: None,
            ld_status_updated_at: None,
            ld_status_updated_by: None,
            deployment_email_sent: false,
            created_at,
        })
    }

    /// Returns whether the candidate may be routed to Delivery.
    ///
    /// Rule: a permanent employee ID is set, or the candidate is Lateral.
    #[must_use]
    pub const fn is_delivery_eligible(&self) -> bool {
        self.permanent_employee_id.is_some()
            || matches!(self.experience_level, ExperienceLevel::Lateral)
    }

    /// Returns whether the deployment email may be sent.
    ///
    /// Rule: training outcome is Selected and the office email is assigned.
    #[must_use]
    pub const fn is_deployment_ready(&self) -> bool {
        matches!(self.ld_status, LdStatus::Selected) && self.office_email.is_some()
    }
}

/// Placement details carried by a deployment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDetails {
    /// Business unit the resource is placed in.
    pub business_unit: String,
    /// Client the resource is billed to.
    pub client: String,
    /// Track or practice.
    pub track: String,
    /// Role title.
    pub role: String,
    /// Direct reporting manager.
    pub reporting_to: String,
    /// Assigned HR partner.
    pub hr_partner: String,
    /// Work location.
    pub work_location: String,
    /// Team the resource joins.
    pub team: String,
    /// Date of joining.
    pub doj: Date,
}

/// A partial edit of placement fields.
///
/// Only the placement fields are editable this way; status, exit data, and
/// transfer data go through their dedicated transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementUpdate {
    /// New business unit, if changing.
    pub business_unit: Option<String>,
    /// New client, if changing.
    pub client: Option<String>,
    /// New track, if changing.
    pub track: Option<String>,
    /// New role title, if changing.
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

impl PlacementUpdate {
    /// Returns whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.business_unit.is_none()
            && self.client.is_none()
            && self.track.is_none()
            && self.role.is_none()
            && self.reporting_to.is_none()
            && self.hr_partner.is_none()
            && self.work_location.is_none()
            && self.team.is_none()
    }
}

/// The durable row representing a candidate's active placement.
///
/// At most one record exists per candidate, created on the first successful
/// deployment-email send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Opaque identifier.
    pub id: DeploymentId,
    /// The candidate this record belongs to. Unique across records.
    pub candidate_id: CandidateId,
    /// Placement details.
    pub placement: PlacementDetails,
    /// When the deployment email send was recorded (= creation time).
    pub email_sent_at: OffsetDateTime,
    /// Current lifecycle status.
    pub status: DeploymentStatus,
    /// Set only on the transition to Inactive. Immutable thereafter.
    pub exit_date: Option<Date>,
    /// Required alongside `exit_date`.
    pub exit_reason: Option<String>,
    /// Date of the most recent internal transfer.
    pub internal_transfer_date: Option<Date>,
    /// Team of the most recent internal transfer.
    pub transfer_team: Option<String>,
    /// Reporting manager of the most recent internal transfer.
    pub transfer_reporting_to: Option<String>,
}

impl DeploymentRecord {
    /// Creates a new Active deployment record.
    #[must_use]
    pub const fn new(
        id: DeploymentId,
        candidate_id: CandidateId,
        placement: PlacementDetails,
        email_sent_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            candidate_id,
            placement,
            email_sent_at,
            status: DeploymentStatus::Active,
            exit_date: None,
            exit_reason: None,
            internal_transfer_date: None,
            transfer_team: None,
            transfer_reporting_to: None,
        }
    }

    /// Returns whether this record has ever recorded an internal transfer.
    #[must_use]
    pub const fn ever_transferred(&self) -> bool {
        self.internal_transfer_date.is_some()
    }
}

//! Job domain entities
//!
//! A job is one application tracked by its owner: the company applied
//! to, the position, and where the application stands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use jobtrack_common::{Error, Result};

/// Maximum length of a company name
pub const COMPANY_MAX_LEN: usize = 50;

/// Maximum length of a position title
pub const POSITION_MAX_LEN: usize = 100;

/// Where an application stands
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Interview,
    Declined,
}

impl JobStatus {
    /// Every accepted status, in declaration order
    pub const ALL: [JobStatus; 3] = [JobStatus::Pending, JobStatus::Interview, JobStatus::Declined];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Interview => "interview",
            JobStatus::Declined => "declined",
        }
    }
}

/// A tracked job application, as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[schema(read_only)]
    pub id: Uuid,
    #[schema(min_length = 1, max_length = 50, example = "Acme")]
    pub company: String,
    #[schema(min_length = 1, max_length = 100, example = "Backend Engineer")]
    pub position: String,
    pub status: JobStatus,
    /// User ID of the caller that created the job
    #[schema(read_only)]
    pub created_by: String,
    #[schema(read_only)]
    pub created_at: DateTime<Utc>,
    #[schema(read_only)]
    pub updated_at: DateTime<Utc>,
}

/// Why `value` is not an acceptable company name, if it is not
pub fn company_problem(value: &str) -> Option<String> {
    text_problem("Company", value, COMPANY_MAX_LEN)
}

/// Why `value` is not an acceptable position title, if it is not
pub fn position_problem(value: &str) -> Option<String> {
    text_problem("Position", value, POSITION_MAX_LEN)
}

/// Surrounding whitespace is ignored: length is measured on the trimmed text
fn text_problem(label: &str, value: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{} cannot be empty", label));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{} cannot exceed {} characters", label, max_len));
    }
    None
}

/// Partial update of a job; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<JobStatus>,
}

impl JobPatch {
    pub fn is_empty(&self) -> bool {
        self.company.is_none() && self.position.is_none() && self.status.is_none()
    }
}

impl Job {
    /// Create a new job with validation
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        status: Option<JobStatus>,
        created_by: impl Into<String>,
    ) -> Result<Self> {
        let company = Self::validate_company(company.into())?;
        let position = Self::validate_position(position.into())?;

        let created_by = created_by.into();
        if created_by.trim().is_empty() {
            return Err(Error::Validation("Job owner cannot be empty".to_string()));
        }

        let now = Utc::now();
        Ok(Job {
            id: Uuid::new_v4(),
            company,
            position,
            status: status.unwrap_or_default(),
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// Validates every provided field before touching the job, so a
    /// rejected patch leaves it unchanged.
    pub fn apply(&mut self, patch: JobPatch) -> Result<()> {
        if patch.is_empty() {
            return Err(Error::Validation(
                "Provide at least one of company, position or status".to_string(),
            ));
        }

        let company = patch.company.map(Self::validate_company).transpose()?;
        let position = patch.position.map(Self::validate_position).transpose()?;

        if let Some(company) = company {
            self.company = company;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.created_by == user_id
    }

    fn validate_company(company: String) -> Result<String> {
        match company_problem(&company) {
            Some(problem) => Err(Error::Validation(problem)),
            None => Ok(company.trim().to_string()),
        }
    }

    fn validate_position(position: String) -> Result<String> {
        match position_problem(&position) {
            Some(problem) => Err(Error::Validation(problem)),
            None => Ok(position.trim().to_string()),
        }
    }
}

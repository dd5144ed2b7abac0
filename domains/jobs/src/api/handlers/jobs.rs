//! Job management API handlers
//!
//! Every handler runs behind the bearer route layer; the caller identity
//! arrives through `AuthUser` and scopes all storage access.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jobtrack_auth::AuthUser;
use jobtrack_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::middleware::JobsState;
use crate::domain::entities::{company_problem, position_problem, Job, JobPatch, JobStatus};

/// Request for creating a job
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    #[validate(custom(function = "validate_company"))]
    #[schema(min_length = 1, max_length = 50, example = "Acme")]
    pub company: String,

    #[validate(custom(function = "validate_position"))]
    #[schema(min_length = 1, max_length = 100, example = "Backend Engineer")]
    pub position: String,

    /// Defaults to `pending`
    pub status: Option<JobStatus>,
}

/// Request for updating a job; any non-empty subset of fields
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateJobRequest {
    #[validate(custom(function = "validate_company"))]
    #[schema(min_length = 1, max_length = 50)]
    pub company: Option<String>,

    #[validate(custom(function = "validate_position"))]
    #[schema(min_length = 1, max_length = 100)]
    pub position: Option<String>,

    pub status: Option<JobStatus>,
}

impl From<UpdateJobRequest> for JobPatch {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            company: req.company,
            position: req.position,
            status: req.status,
        }
    }
}

fn validate_company(value: &str) -> std::result::Result<(), ValidationError> {
    as_validation_error("company", company_problem(value))
}

fn validate_position(value: &str) -> std::result::Result<(), ValidationError> {
    as_validation_error("position", position_problem(value))
}

fn as_validation_error(
    code: &'static str,
    problem: Option<String>,
) -> std::result::Result<(), ValidationError> {
    match problem {
        Some(message) => Err(ValidationError::new(code).with_message(message.into())),
        None => Ok(()),
    }
}

/// Response for listing jobs
#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
}

/// Path ids are opaque strings; anything that is not a job id cannot name a job
fn parse_job_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| job_not_found(raw))
}

fn job_not_found(id: &str) -> Error {
    Error::NotFound(format!("No job with id {}", id))
}

/// List jobs created by the caller
///
/// **GET /jobs**
pub async fn list_jobs(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
) -> Result<Json<JobListResponse>> {
    let jobs = state.repo.list_by_owner(&ctx.user_id).await?;

    Ok(Json(JobListResponse {
        count: jobs.len(),
        jobs,
    }))
}

/// Get a single job by ID
///
/// **GET /jobs/{id}**
pub async fn get_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<String>,
) -> Result<Json<Job>> {
    let job_id = parse_job_id(&id)?;

    let job = state
        .repo
        .find(&ctx.user_id, job_id)
        .await?
        .ok_or_else(|| job_not_found(&id))?;

    Ok(Json(job))
}

/// Create a job owned by the caller
///
/// **POST /jobs**
pub async fn create_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>)> {
    let job = Job::new(req.company, req.position, req.status, ctx.user_id.as_str())?;

    let created = state.repo.create(&job).await?;

    tracing::info!(job_id = %created.id, user_id = %ctx.user_id, "Job created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a job
///
/// **PATCH /jobs/{id}**
pub async fn update_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<Job>> {
    let job_id = parse_job_id(&id)?;

    let mut job = state
        .repo
        .find(&ctx.user_id, job_id)
        .await?
        .ok_or_else(|| job_not_found(&id))?;

    job.apply(req.into())?;

    // The job may have been deleted since it was read
    let updated = state
        .repo
        .update(&job)
        .await?
        .ok_or_else(|| job_not_found(&id))?;

    tracing::info!(job_id = %updated.id, user_id = %ctx.user_id, "Job updated");

    Ok(Json(updated))
}

/// Delete a job
///
/// **DELETE /jobs/{id}**
pub async fn delete_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let job_id = parse_job_id(&id)?;

    if !state.repo.delete(&ctx.user_id, job_id).await? {
        return Err(job_not_found(&id));
    }

    tracing::info!(job_id = %job_id, user_id = %ctx.user_id, "Job deleted");

    Ok(StatusCode::OK)
}

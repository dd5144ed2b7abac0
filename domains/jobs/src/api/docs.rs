//! API descriptor for the Jobs domain
//!
//! Component schemas come straight from the wire types, so the published
//! contract changes whenever they do.

use jobtrack_openapi::{ApiMetadata, DescriptorBuilder, DescriptorError, OpenApiDocument};

use super::handlers::jobs::{CreateJobRequest, UpdateJobRequest};
use super::routes::route_table;
use crate::domain::entities::{Job, JobStatus};

pub const JOBS_TAG: &str = "Jobs";

pub const JOB: &str = "Job";
pub const JOB_STATUS: &str = "JobStatus";
pub const CREATE_JOB_REQUEST: &str = "CreateJobRequest";
pub const UPDATE_JOB_REQUEST: &str = "UpdateJobRequest";

/// Generate the OpenAPI document for the `/jobs` routes
pub fn api_descriptor(metadata: ApiMetadata) -> Result<OpenApiDocument, DescriptorError> {
    DescriptorBuilder::new(metadata)
        .tag(JOBS_TAG, "Job management")
        .register::<Job>()
        .register::<JobStatus>()
        .register::<CreateJobRequest>()
        .register::<UpdateJobRequest>()
        .build(&route_table())
}

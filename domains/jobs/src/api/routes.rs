//! Route definitions for the Jobs domain API
//!
//! The `/jobs` routes are declared once, as data, in [`route_table`].
//! Both the axum router and the API descriptor are derived from it.

use axum::{
    middleware,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use jobtrack_auth::require_bearer;
use jobtrack_openapi::{AuthRequirement, HandlerRef, HttpMethod, RouteEntry, RouteTable};

use super::docs::{CREATE_JOB_REQUEST, JOBS_TAG, UPDATE_JOB_REQUEST};
use super::handlers::jobs;
use super::middleware::JobsState;

/// Handler references bound by the `/jobs` route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsOperation {
    ListJobs,
    CreateJob,
    GetJob,
    UpdateJob,
    DeleteJob,
}

impl HandlerRef for JobsOperation {
    fn operation_id(&self) -> &'static str {
        match self {
            JobsOperation::ListJobs => "getAllJobs",
            JobsOperation::CreateJob => "createJob",
            JobsOperation::GetJob => "getJob",
            JobsOperation::UpdateJob => "updateJob",
            JobsOperation::DeleteJob => "deleteJob",
        }
    }
}

impl JobsOperation {
    /// Bind the handler for this operation to `method`
    fn method_router(self, method: HttpMethod) -> MethodRouter<JobsState> {
        let filter = method_filter(method);
        match self {
            JobsOperation::ListJobs => on(filter, jobs::list_jobs),
            JobsOperation::CreateJob => on(filter, jobs::create_job),
            JobsOperation::GetJob => on(filter, jobs::get_job),
            JobsOperation::UpdateJob => on(filter, jobs::update_job),
            JobsOperation::DeleteJob => on(filter, jobs::delete_job),
        }
    }
}

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Put => MethodFilter::PUT,
        HttpMethod::Patch => MethodFilter::PATCH,
        HttpMethod::Delete => MethodFilter::DELETE,
    }
}

/// The `/jobs` resource; every route inherits the bearer requirement
pub fn route_table() -> RouteTable<JobsOperation> {
    RouteTable::new(AuthRequirement::Bearer)
        .route(
            RouteEntry::new(HttpMethod::Get, "/jobs", JobsOperation::ListJobs)
                .summary("Get all jobs")
                .tag(JOBS_TAG)
                .response(200, "List jobs")
                .response(401, "Authentication invalid"),
        )
        .route(
            RouteEntry::new(HttpMethod::Post, "/jobs", JobsOperation::CreateJob)
                .summary("Create a job")
                .tag(JOBS_TAG)
                .request_body(CREATE_JOB_REQUEST)
                .response(201, "Job created")
                .response(400, "Bad request")
                .response(401, "Authentication invalid"),
        )
        .route(
            RouteEntry::new(HttpMethod::Get, "/jobs/{id}", JobsOperation::GetJob)
                .summary("Get a single job by id")
                .tag(JOBS_TAG)
                .response(200, "Job found")
                .response(401, "Authentication invalid")
                .response(404, "Job not found"),
        )
        .route(
            RouteEntry::new(HttpMethod::Patch, "/jobs/{id}", JobsOperation::UpdateJob)
                .summary("Update a job by id")
                .tag(JOBS_TAG)
                .request_body(UPDATE_JOB_REQUEST)
                .response(200, "Job updated")
                .response(400, "Bad request")
                .response(401, "Authentication invalid")
                .response(404, "Job not found"),
        )
        .route(
            RouteEntry::new(HttpMethod::Delete, "/jobs/{id}", JobsOperation::DeleteJob)
                .summary("Delete a job by id")
                .tag(JOBS_TAG)
                .response(200, "Job deleted")
                .response(401, "Authentication invalid")
                .response(404, "Job not found"),
        )
}

/// Create all Jobs domain API routes
pub fn routes(state: &JobsState) -> Router<JobsState> {
    routes_from_table(&route_table(), state)
}

/// Wire every entry of `table`, guarding bearer routes with `require_bearer`
fn routes_from_table(table: &RouteTable<JobsOperation>, state: &JobsState) -> Router<JobsState> {
    table.entries().iter().fold(Router::new(), |router, entry| {
        let mut method_router = entry.handler.method_router(entry.method);

        if table.effective_auth(entry) == AuthRequirement::Bearer {
            method_router = method_router.route_layer(middleware::from_fn_with_state(
                state.auth.clone(),
                require_bearer,
            ));
        }

        router.route(entry.path, method_router)
    })
}

//! Jobs domain state and auth backend integration

use axum::extract::FromRef;
use jobtrack_auth::AuthBackend;
use std::sync::Arc;

use crate::repository::JobRepository;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub repo: Arc<dyn JobRepository>,
    pub auth: AuthBackend,
}

impl JobsState {
    pub fn new(repo: Arc<dyn JobRepository>, auth: AuthBackend) -> Self {
        Self { repo, auth }
    }
}

impl FromRef<JobsState> for AuthBackend {
    fn from_ref(state: &JobsState) -> Self {
        state.auth.clone()
    }
}

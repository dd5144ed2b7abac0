//! Repository implementations for the Jobs domain

pub mod jobs;
pub mod memory;

use async_trait::async_trait;
use jobtrack_common::Result;
use uuid::Uuid;

use crate::domain::entities::Job;

pub use jobs::PgJobRepository;
pub use memory::InMemoryJobRepository;

/// Storage for jobs, scoped by owner.
///
/// Lookups take the owner alongside the id so a job created by someone
/// else is indistinguishable from a missing one.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// All jobs created by `owner`, newest first
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Job>>;

    async fn find(&self, owner: &str, id: Uuid) -> Result<Option<Job>>;

    async fn create(&self, job: &Job) -> Result<Job>;

    /// Persist an updated job; `None` when it no longer exists
    async fn update(&self, job: &Job) -> Result<Option<Job>>;

    /// Returns whether a job was removed
    async fn delete(&self, owner: &str, id: Uuid) -> Result<bool>;
}

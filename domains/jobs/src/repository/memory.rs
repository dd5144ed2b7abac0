//! In-memory job repository
//!
//! Used when no database is configured and throughout the test suites.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use jobtrack_common::{Error, Result};

use super::JobRepository;
use crate::domain::entities::Job;

#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<HashMap<Uuid, Job>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Job>> {
        let jobs = self.jobs.read().await;
        let mut owned: Vec<Job> = jobs
            .values()
            .filter(|job| job.is_owned_by(owner))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn find(&self, owner: &str, id: Uuid) -> Result<Option<Job>> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).filter(|job| job.is_owned_by(owner)).cloned())
    }

    async fn create(&self, job: &Job) -> Result<Job> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(Error::Internal(format!("Job {} already exists", job.id)));
        }
        jobs.insert(job.id, job.clone());
        Ok(job.clone())
    }

    async fn update(&self, job: &Job) -> Result<Option<Job>> {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(&job.id) {
            Some(stored) if stored.is_owned_by(&job.created_by) => {
                *stored = job.clone();
                Ok(Some(job.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, owner: &str, id: Uuid) -> Result<bool> {
        let mut jobs = self.jobs.write().await;
        let owned = jobs.get(&id).is_some_and(|job| job.is_owned_by(owner));
        if owned {
            jobs.remove(&id);
        }
        Ok(owned)
    }
}

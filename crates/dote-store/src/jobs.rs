//! Job store
//!
//! Jobs keep an explicit listing order: new jobs are prepended so the board
//! shows the most recent work first. The memory implementation holds a
//! single ordered vector behind a lock for that reason, unlike the keyed
//! stores for the other collections.

use async_trait::async_trait;
use dote_core::error::DoteResult;
use dote_models::Job;
use parking_lot::RwLock;

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Find a job by id
    async fn get(&self, id: &str) -> DoteResult<Option<Job>>;

    /// Replace the stored job with the same id, or append if new
    async fn put(&self, job: Job) -> DoteResult<()>;

    /// Insert a new job at the front of the listing order
    async fn prepend(&self, job: Job) -> DoteResult<()>;

    /// Remove a job, returning it if it existed
    async fn delete(&self, id: &str) -> DoteResult<Option<Job>>;

    /// All jobs in listing order
    async fn list(&self) -> DoteResult<Vec<Job>>;
}

/// In-memory job store
pub struct MemoryJobStore {
    jobs: RwLock<Vec<Job>>,
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn get(&self, id: &str) -> DoteResult<Option<Job>> {
        let jobs = self.jobs.read();
        Ok(jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn put(&self, job: Job) -> DoteResult<()> {
        let mut jobs = self.jobs.write();
        match jobs.iter_mut().find(|j| j.id == job.id) {
            Some(slot) => *slot = job,
            None => jobs.push(job),
        }
        Ok(())
    }

    async fn prepend(&self, job: Job) -> DoteResult<()> {
        let mut jobs = self.jobs.write();
        jobs.retain(|j| j.id != job.id);
        jobs.insert(0, job);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DoteResult<Option<Job>> {
        let mut jobs = self.jobs.write();
        let position = jobs.iter().position(|j| j.id == id);
        Ok(position.map(|i| jobs.remove(i)))
    }

    async fn list(&self) -> DoteResult<Vec<Job>> {
        Ok(self.jobs.read().clone())
    }
}

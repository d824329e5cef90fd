//! Stage and assignment moves
//!
//! The two kanban drags. Neither logs history and neither validates: any
//! stage can be set from any other, including backward.

use std::sync::Arc;

use dote_models::{Job, JobStage};
use dote_store::JobStore;

use crate::result::ServiceResult;

pub struct StageService {
    jobs: Arc<dyn JobStore>,
}

impl StageService {
    pub fn new(jobs: Arc<dyn JobStore>) -> Self {
        Self { jobs }
    }

    /// Move the job one stage forward. At Launch this persists the job
    /// unchanged rather than failing.
    pub async fn advance(&self, mut job: Job) -> ServiceResult<Job> {
        if let Some(next) = job.stage.next() {
            job.stage = next;
        }
        self.persist(job).await
    }

    /// Set the stage directly, any direction
    pub async fn set_stage(&self, mut job: Job, stage: JobStage) -> ServiceResult<Job> {
        job.stage = stage;
        self.persist(job).await
    }

    /// Hand the job to another member
    pub async fn reassign(&self, mut job: Job, member_id: &str) -> ServiceResult<Job> {
        job.assignee_id = member_id.to_string();
        self.persist(job).await
    }

    async fn persist(&self, job: Job) -> ServiceResult<Job> {
        if let Err(err) = self.jobs.put(job.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(job_id = %job.id, stage = ?job.stage, "job moved");
        ServiceResult::success(job)
    }
}

use std::sync::Arc;

use dote_models::Job;
use dote_store::JobStore;
use dote_timers::TimeTracker;

use crate::result::ServiceResult;

/// Deletes a job and drops any timer state its pieces accumulated.
pub struct DeleteJobService {
    jobs: Arc<dyn JobStore>,
    tracker: Arc<TimeTracker>,
}

impl DeleteJobService {
    pub fn new(jobs: Arc<dyn JobStore>, tracker: Arc<TimeTracker>) -> Self {
        Self { jobs, tracker }
    }

    pub async fn call(self, job_id: &str) -> ServiceResult<Job> {
        match self.jobs.delete(job_id).await {
            Ok(Some(job)) => {
                self.tracker
                    .discard(job.pieces.iter().map(|p| p.id.as_str()));
                tracing::debug!(job_id = %job.id, "job deleted");
                ServiceResult::success(job)
            }
            Ok(None) => {
                ServiceResult::failure_with_base_error(format!("Job {job_id} does not exist"))
            }
            Err(err) => ServiceResult::failure_with_base_error(err.to_string()),
        }
    }
}

//! Create service for jobs

use std::sync::Arc;

use dote_core::ids::new_job_id;
use dote_journals::{actions, HistoryService};
use dote_models::{Job, JobStage, JobType, TeamMember};
use dote_store::{ClientStore, JobStore};

use super::set_attributes::SetJobAttributesService;
use super::JobParams;
use crate::result::ServiceResult;

/// Creates a job on the board.
///
/// Defaults: stage Briefing, type Digital, deadline today. The client name
/// snapshot is resolved from the client store at this moment and not kept
/// in sync afterwards. The new job lands at the front of the listing with
/// a "Job created" history line already in place.
pub struct CreateJobService<'a> {
    actor: &'a TeamMember,
    jobs: Arc<dyn JobStore>,
    clients: Arc<dyn ClientStore>,
    history: HistoryService,
}

impl<'a> CreateJobService<'a> {
    pub fn new(
        actor: &'a TeamMember,
        jobs: Arc<dyn JobStore>,
        clients: Arc<dyn ClientStore>,
        history: HistoryService,
    ) -> Self {
        Self {
            actor,
            jobs,
            clients,
            history,
        }
    }

    pub async fn call(self, params: JobParams) -> ServiceResult<Job> {
        let deadline = params
            .deadline
            .unwrap_or_else(|| self.history.clock().today());
        let base = Job {
            id: new_job_id(),
            title: String::new(),
            client_id: String::new(),
            client_name: String::new(),
            job_type: JobType::Digital,
            stage: JobStage::Briefing,
            assignee_id: String::new(),
            deadline,
            description: None,
            dropbox_links: Vec::new(),
            pieces: Vec::new(),
            history: Vec::new(),
        };

        let result = SetJobAttributesService::new(base).call(&params);
        if result.is_failure() {
            return result;
        }
        let mut job = result.unwrap();

        match self.clients.get(&job.client_id).await {
            Ok(Some(client)) => job.client_name = client.name,
            Ok(None) => return ServiceResult::failure_with_error("client", "does not exist"),
            Err(err) => return ServiceResult::failure_with_base_error(err.to_string()),
        }

        job.prepend_history(self.history.entry(self.actor, actions::JOB_CREATED));

        if let Err(err) = self.jobs.prepend(job.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(job_id = %job.id, title = %job.title, "job created");

        ServiceResult::success(job)
    }
}

//! Update service for jobs

use std::sync::Arc;

use dote_journals::{actions, HistoryService};
use dote_models::{Job, TeamMember};
use dote_store::{ClientStore, JobStore};

use super::set_attributes::SetJobAttributesService;
use super::JobParams;
use crate::result::ServiceResult;

/// The manual "save" on the job details screen. Applies field edits,
/// refreshes the client name snapshot when the client changed, and logs
/// "Job updated manually".
pub struct UpdateJobService<'a> {
    actor: &'a TeamMember,
    jobs: Arc<dyn JobStore>,
    clients: Arc<dyn ClientStore>,
    history: HistoryService,
}

impl<'a> UpdateJobService<'a> {
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

    pub async fn call(self, job: Job, params: JobParams) -> ServiceResult<Job> {
        let client_changed = params
            .client_id
            .as_ref()
            .is_some_and(|id| *id != job.client_id);

        let result = SetJobAttributesService::new(job).call(&params);
        if result.is_failure() {
            return result;
        }
        let mut job = result.unwrap();

        if client_changed {
            match self.clients.get(&job.client_id).await {
                Ok(Some(client)) => job.client_name = client.name,
                Ok(None) => {
                    return ServiceResult::failure_with_error("client", "does not exist")
                }
                Err(err) => return ServiceResult::failure_with_base_error(err.to_string()),
            }
        }

        job.prepend_history(
            self.history
                .entry(self.actor, actions::JOB_UPDATED_MANUALLY),
        );

        if let Err(err) = self.jobs.put(job.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(job_id = %job.id, "job updated");

        ServiceResult::success(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dote_core::traits::Clock;
    use dote_models::{Client, JobStage, JobType, Role};
    use dote_store::{MemoryClientStore, MemoryJobStore};

    struct FixedClock;

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2023, 10, 20).unwrap()
        }

        fn now_display(&self) -> String {
            "20/10/2023 09:30:00".to_string()
        }
    }

    fn actor() -> TeamMember {
        TeamMember::new("1", "Jéssica Bastianini", "ana@dote.com", Role::Atendimento)
    }

    fn existing_job() -> Job {
        Job {
            id: "JOB-101".to_string(),
            title: "Black Friday campaign".to_string(),
            client_id: "1".to_string(),
            client_name: "TechSolutions Inc.".to_string(),
            job_type: JobType::Digital,
            stage: JobStage::Creation,
            assignee_id: "2".to_string(),
            deadline: NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
            description: None,
            dropbox_links: Vec::new(),
            pieces: Vec::new(),
            history: Vec::new(),
        }
    }

    async fn setup() -> (Arc<MemoryJobStore>, Arc<MemoryClientStore>, HistoryService) {
        let jobs = Arc::new(MemoryJobStore::new());
        jobs.put(existing_job()).await.unwrap();
        let clients = Arc::new(MemoryClientStore::new());
        clients
            .put(Client::new("1", "TechSolutions Inc."))
            .await
            .unwrap();
        clients
            .put(Client::new("2", "Boutique Flora"))
            .await
            .unwrap();
        let history = HistoryService::new(jobs.clone(), Arc::new(FixedClock));
        (jobs, clients, history)
    }

    #[tokio::test]
    async fn manual_save_edits_fields_and_logs() {
        let (jobs, clients, history) = setup().await;
        let actor = actor();
        let service = UpdateJobService::new(&actor, jobs.clone(), clients, history);

        let params = JobParams::new()
            .with_title("Black Friday campaign v2")
            .with_deadline(NaiveDate::from_ymd_opt(2023, 11, 25).unwrap());
        let result = service.call(existing_job(), params).await;
        assert!(result.is_success());

        let stored = jobs.get("JOB-101").await.unwrap().unwrap();
        assert_eq!(stored.title, "Black Friday campaign v2");
        assert_eq!(stored.history.len(), 1);
        assert_eq!(stored.history[0].action, "Job updated manually");
    }

    #[tokio::test]
    async fn changing_the_client_refreshes_the_snapshot() {
        let (jobs, clients, history) = setup().await;
        let actor = actor();
        let service = UpdateJobService::new(&actor, jobs, clients, history);

        let params = JobParams::new().with_client_id("2");
        let result = service.call(existing_job(), params).await;

        let job = result.unwrap();
        assert_eq!(job.client_name, "Boutique Flora");
    }

    #[tokio::test]
    async fn keeping_the_same_client_does_not_touch_the_snapshot() {
        let (jobs, clients, history) = setup().await;
        // A renamed client must not retroactively relabel the job
        clients
            .put(Client::new("1", "TechSolutions Global"))
            .await
            .unwrap();
        let actor = actor();
        let service = UpdateJobService::new(&actor, jobs, clients, history);

        let params = JobParams::new().with_title("Still the same client");
        let result = service.call(existing_job(), params).await;

        assert_eq!(result.unwrap().client_name, "TechSolutions Inc.");
    }
}

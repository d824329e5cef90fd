//! Dropbox link list edits
//!
//! Links are plain strings addressed by position. Out-of-range edits are
//! no-ops and nothing here writes history.

use std::sync::Arc;

use dote_models::Job;
use dote_store::JobStore;

use crate::result::ServiceResult;

pub struct LinkService {
    jobs: Arc<dyn JobStore>,
}

impl LinkService {
    pub fn new(jobs: Arc<dyn JobStore>) -> Self {
        Self { jobs }
    }

    pub async fn add_link(&self, mut job: Job, url: impl Into<String>) -> ServiceResult<Job> {
        job.dropbox_links.push(url.into());
        self.persist(job).await
    }

    pub async fn set_link(
        &self,
        mut job: Job,
        index: usize,
        url: impl Into<String>,
    ) -> ServiceResult<Job> {
        if let Some(slot) = job.dropbox_links.get_mut(index) {
            *slot = url.into();
        }
        self.persist(job).await
    }

    pub async fn remove_link(&self, mut job: Job, index: usize) -> ServiceResult<Job> {
        if index < job.dropbox_links.len() {
            job.dropbox_links.remove(index);
        }
        self.persist(job).await
    }

    async fn persist(&self, job: Job) -> ServiceResult<Job> {
        if let Err(err) = self.jobs.put(job.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        ServiceResult::success(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dote_models::{JobStage, JobType};
    use dote_store::MemoryJobStore;

    fn job() -> Job {
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

    fn service() -> LinkService {
        LinkService::new(Arc::new(MemoryJobStore::new()))
    }

    #[tokio::test]
    async fn links_append_in_order() {
        let service = service();
        let job = service
            .add_link(job(), "https://www.dropbox.com/s/brief")
            .await
            .unwrap();
        let job = service
            .add_link(job, "https://www.dropbox.com/s/assets")
            .await
            .unwrap();

        assert_eq!(
            job.dropbox_links,
            [
                "https://www.dropbox.com/s/brief",
                "https://www.dropbox.com/s/assets"
            ]
        );
        assert!(job.history.is_empty());
    }

    #[tokio::test]
    async fn set_link_replaces_only_its_slot() {
        let service = service();
        let mut job = job();
        job.dropbox_links = vec!["a".to_string(), "b".to_string()];

        let job = service.set_link(job, 1, "c").await.unwrap();
        assert_eq!(job.dropbox_links, ["a", "c"]);

        let job = service.set_link(job, 5, "d").await.unwrap();
        assert_eq!(job.dropbox_links, ["a", "c"]);
    }

    #[tokio::test]
    async fn remove_link_shifts_the_rest_down() {
        let service = service();
        let mut job = job();
        job.dropbox_links = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let job = service.remove_link(job, 0).await.unwrap();
        assert_eq!(job.dropbox_links, ["b", "c"]);

        let job = service.remove_link(job, 9).await.unwrap();
        assert_eq!(job.dropbox_links, ["b", "c"]);
    }
}

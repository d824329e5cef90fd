//! History service

use std::sync::Arc;

use dote_core::ids::new_id;
use dote_core::traits::Clock;
use dote_models::{JobHistoryEntry, TeamMember};
use dote_store::JobStore;

/// Writes audit lines onto jobs
#[derive(Clone)]
pub struct HistoryService {
    jobs: Arc<dyn JobStore>,
    clock: Arc<dyn Clock>,
}

impl HistoryService {
    pub fn new(jobs: Arc<dyn JobStore>, clock: Arc<dyn Clock>) -> Self {
        Self { jobs, clock }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Build an entry stamped with the current display time and actor name.
    /// Used directly when a job is created with its first line already in
    /// place.
    pub fn entry(&self, actor: &TeamMember, action: impl Into<String>) -> JobHistoryEntry {
        JobHistoryEntry {
            id: new_id(),
            date: self.clock.now_display(),
            user: actor.name.clone(),
            action: action.into(),
        }
    }

    /// Prepend an entry to the job's history. Best effort: when the job is
    /// gone or the write fails, the triggering action proceeds without its
    /// audit line.
    pub async fn log(&self, job_id: &str, actor: &TeamMember, action: impl Into<String>) {
        let entry = self.entry(actor, action);
        match self.jobs.get(job_id).await {
            Ok(Some(mut job)) => {
                job.prepend_history(entry);
                if let Err(err) = self.jobs.put(job).await {
                    tracing::warn!(job_id, %err, "failed to write history entry");
                }
            }
            Ok(None) => {
                tracing::warn!(job_id, action = %entry.action, "history target job missing");
            }
            Err(err) => {
                tracing::warn!(job_id, %err, "failed to load job for history");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dote_models::{Job, JobStage, JobType, Role};
    use dote_store::MemoryJobStore;

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

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
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

    fn service(store: Arc<MemoryJobStore>) -> HistoryService {
        HistoryService::new(store, Arc::new(FixedClock))
    }

    #[test]
    fn entry_is_stamped_with_clock_and_actor() {
        let history = service(Arc::new(MemoryJobStore::new()));
        let entry = history.entry(&actor(), "Job created");

        assert_eq!(entry.date, "20/10/2023 09:30:00");
        assert_eq!(entry.user, "Jéssica Bastianini");
        assert_eq!(entry.action, "Job created");
        assert!(!entry.id.is_empty());
    }

    #[tokio::test]
    async fn log_prepends_newest_first() {
        let store = Arc::new(MemoryJobStore::new());
        store.put(job("JOB-1")).await.unwrap();
        let history = service(store.clone());

        history.log("JOB-1", &actor(), "Job created").await;
        history.log("JOB-1", &actor(), "Job updated manually").await;

        let job = store.get("JOB-1").await.unwrap().unwrap();
        let lines: Vec<_> = job.history.iter().map(|h| h.action.as_str()).collect();
        assert_eq!(lines, ["Job updated manually", "Job created"]);
    }

    #[tokio::test]
    async fn log_on_missing_job_is_a_no_op() {
        let store = Arc::new(MemoryJobStore::new());
        let history = service(store.clone());

        history.log("JOB-999", &actor(), "Job updated manually").await;

        assert!(store.list().await.unwrap().is_empty());
    }
}

//! Piece management
//!
//! Pieces live inside their job; every edit replaces the whole job record.
//! Only removal writes history. Missing piece ids are tolerated as no-ops,
//! matching the board's optimistic edits.

use std::sync::Arc;

use dote_core::ids::new_id;
use dote_journals::{actions, HistoryService};
use dote_models::{Job, JobPiece, PieceStatus, TeamMember};
use dote_store::JobStore;
use dote_timers::TimeTracker;

use super::PieceParams;
use crate::result::ServiceResult;

pub struct PieceService<'a> {
    actor: &'a TeamMember,
    jobs: Arc<dyn JobStore>,
    history: HistoryService,
    tracker: Arc<TimeTracker>,
}

impl<'a> PieceService<'a> {
    pub fn new(
        actor: &'a TeamMember,
        jobs: Arc<dyn JobStore>,
        history: HistoryService,
        tracker: Arc<TimeTracker>,
    ) -> Self {
        Self {
            actor,
            jobs,
            history,
            tracker,
        }
    }

    /// Append a fresh piece with defaults: "New piece", Digital, Pending,
    /// nobody assigned
    pub async fn add(&self, mut job: Job) -> ServiceResult<Job> {
        job.pieces.push(JobPiece::new(new_id()));
        self.persist(job).await
    }

    /// Edit a piece's descriptive fields
    pub async fn update(
        &self,
        mut job: Job,
        piece_id: &str,
        params: &PieceParams,
    ) -> ServiceResult<Job> {
        if let Some(piece) = job.piece_mut(piece_id) {
            if let Some(ref name) = params.name {
                piece.name = name.clone();
            }
            if let Some(piece_type) = params.piece_type {
                piece.piece_type = piece_type;
            }
            if let Some(ref format) = params.format {
                piece.format = format.clone();
            }
            if let Some(ref content) = params.content {
                piece.content = content.clone();
            }
            if let Some(ref link) = params.final_art_link {
                piece.final_art_link = Some(link.clone());
            }
        }
        self.persist(job).await
    }

    /// Set the piece's workflow status. Any status can follow any other.
    pub async fn set_status(
        &self,
        mut job: Job,
        piece_id: &str,
        status: PieceStatus,
    ) -> ServiceResult<Job> {
        if let Some(piece) = job.piece_mut(piece_id) {
            piece.status = status;
        }
        self.persist(job).await
    }

    /// Replace the piece's assignee set wholesale
    pub async fn set_assignees(
        &self,
        mut job: Job,
        piece_id: &str,
        member_ids: Vec<String>,
    ) -> ServiceResult<Job> {
        if let Some(piece) = job.piece_mut(piece_id) {
            piece.assignee_ids = member_ids;
        }
        self.persist(job).await
    }

    /// Remove a piece, logging "Removed piece: <name>" with the name read
    /// before removal. The piece's timer state goes with it.
    pub async fn remove(&self, mut job: Job, piece_id: &str) -> ServiceResult<Job> {
        let Some(name) = job.piece(piece_id).map(|p| p.name.clone()) else {
            return self.persist(job).await;
        };

        job.pieces.retain(|p| p.id != piece_id);
        self.tracker.discard([piece_id]);
        job.prepend_history(
            self.history
                .entry(self.actor, actions::removed_piece(&name)),
        );
        self.persist(job).await
    }

    async fn persist(&self, job: Job) -> ServiceResult<Job> {
        if let Err(err) = self.jobs.put(job.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(job_id = %job.id, pieces = job.pieces.len(), "pieces updated");
        ServiceResult::success(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dote_core::traits::Clock;
    use dote_models::{JobStage, JobType, Role};
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
        TeamMember::new("2", "Roberto Dias", "roberto@dote.com", Role::Designer)
    }

    fn named_piece(id: &str, name: &str) -> JobPiece {
        let mut piece = JobPiece::new(id);
        piece.name = name.to_string();
        piece
    }

    fn job_with_pieces(pieces: Vec<JobPiece>) -> Job {
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
            pieces,
            history: Vec::new(),
        }
    }

    fn setup() -> (Arc<MemoryJobStore>, HistoryService, Arc<TimeTracker>) {
        let jobs = Arc::new(MemoryJobStore::new());
        let history = HistoryService::new(jobs.clone(), Arc::new(FixedClock));
        let tracker = Arc::new(TimeTracker::new());
        (jobs, history, tracker)
    }

    #[tokio::test]
    async fn add_appends_a_default_piece_without_history() {
        let (jobs, history, tracker) = setup();
        let actor = actor();
        let service = PieceService::new(&actor, jobs, history, tracker);

        let job = service.add(job_with_pieces(Vec::new())).await.unwrap();

        assert_eq!(job.pieces.len(), 1);
        assert_eq!(job.pieces[0].name, "New piece");
        assert_eq!(job.pieces[0].status, PieceStatus::Pending);
        assert!(job.pieces[0].assignee_ids.is_empty());
        assert!(job.history.is_empty());
    }

    #[tokio::test]
    async fn remove_keeps_the_rest_and_logs_the_name() {
        let (jobs, history, tracker) = setup();
        let actor = actor();
        let service = PieceService::new(&actor, jobs, history, tracker.clone());
        tracker.start("p1");

        let job = job_with_pieces(vec![
            named_piece("p1", "Site banner"),
            named_piece("p2", "Story sequence"),
        ]);
        let job = service.remove(job, "p1").await.unwrap();

        let ids: Vec<_> = job.pieces.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2"]);
        assert_eq!(job.history.len(), 1);
        assert_eq!(job.history[0].action, "Removed piece: Site banner");
        // Timer state went with the piece
        assert!(!tracker.is_running("p1"));
        assert_eq!(tracker.elapsed("p1"), 0);
    }

    #[tokio::test]
    async fn removing_an_unknown_piece_changes_nothing() {
        let (jobs, history, tracker) = setup();
        let actor = actor();
        let service = PieceService::new(&actor, jobs, history, tracker);

        let job = job_with_pieces(vec![named_piece("p1", "Site banner")]);
        let job = service.remove(job, "p9").await.unwrap();

        assert_eq!(job.pieces.len(), 1);
        assert!(job.history.is_empty());
    }

    #[tokio::test]
    async fn status_flips_are_unrestricted_and_silent() {
        let (jobs, history, tracker) = setup();
        let actor = actor();
        let service = PieceService::new(&actor, jobs, history, tracker);

        let job = job_with_pieces(vec![named_piece("p1", "Site banner")]);
        let job = service
            .set_status(job, "p1", PieceStatus::Approved)
            .await
            .unwrap();
        let job = service
            .set_status(job, "p1", PieceStatus::Redo)
            .await
            .unwrap();

        assert_eq!(job.pieces[0].status, PieceStatus::Redo);
        assert!(job.history.is_empty());
    }

    #[tokio::test]
    async fn set_assignees_replaces_the_whole_set() {
        let (jobs, history, tracker) = setup();
        let actor = actor();
        let service = PieceService::new(&actor, jobs, history, tracker);

        let mut piece = named_piece("p1", "Site banner");
        piece.assignee_ids = vec!["2".to_string(), "3".to_string()];
        let job = job_with_pieces(vec![piece]);

        let job = service
            .set_assignees(job, "p1", vec!["1".to_string()])
            .await
            .unwrap();
        assert_eq!(job.pieces[0].assignee_ids, ["1"]);

        let job = service.set_assignees(job, "p1", Vec::new()).await.unwrap();
        assert!(job.pieces[0].assignee_ids.is_empty());
    }

    #[tokio::test]
    async fn update_edits_descriptive_fields() {
        let (jobs, history, tracker) = setup();
        let actor = actor();
        let service = PieceService::new(&actor, jobs, history, tracker);

        let job = job_with_pieces(vec![named_piece("p1", "Site banner")]);
        let params = PieceParams::new()
            .with_name("Hero banner")
            .with_format("1920x600")
            .with_final_art_link("https://www.dropbox.com/s/final");
        let job = service.update(job, "p1", &params).await.unwrap();

        let piece = &job.pieces[0];
        assert_eq!(piece.name, "Hero banner");
        assert_eq!(piece.format, "1920x600");
        assert_eq!(
            piece.final_art_link.as_deref(),
            Some("https://www.dropbox.com/s/final")
        );
    }
}

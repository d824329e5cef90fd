//! Timer service
//!
//! The board exposes one gesture per piece: toggle. Starting is silent;
//! pausing writes a history line with the piece's name.

use std::sync::Arc;

use dote_journals::{actions, HistoryService};
use dote_models::{Job, TeamMember};
use dote_store::JobStore;

use crate::TimeTracker;

pub struct TimerService {
    tracker: Arc<TimeTracker>,
    jobs: Arc<dyn JobStore>,
    history: HistoryService,
}

impl TimerService {
    pub fn new(tracker: Arc<TimeTracker>, jobs: Arc<dyn JobStore>, history: HistoryService) -> Self {
        Self {
            tracker,
            jobs,
            history,
        }
    }

    pub fn start(&self, piece_id: &str) {
        self.tracker.start(piece_id);
    }

    /// Pause a running timer and record it on the job. Stopping an idle
    /// timer does nothing and writes no history.
    pub async fn stop(&self, job_id: &str, piece_id: &str, actor: &TeamMember) {
        if !self.tracker.pause(piece_id) {
            return;
        }
        let piece_name = match self.jobs.get(job_id).await {
            Ok(Some(job)) => job.piece(piece_id).map(|p| p.name.clone()),
            _ => None,
        };
        // Fall back to the id when the piece is already gone
        let name = piece_name.unwrap_or_else(|| piece_id.to_string());
        self.history
            .log(job_id, actor, actions::paused_timer(&name))
            .await;
    }

    pub async fn toggle(&self, job_id: &str, piece_id: &str, actor: &TeamMember) {
        if self.tracker.is_running(piece_id) {
            self.stop(job_id, piece_id, actor).await;
        } else {
            self.tracker.start(piece_id);
        }
    }

    /// Drop timer state for every piece of a deleted job
    pub fn discard_job(&self, job: &Job) {
        self.tracker
            .discard(job.pieces.iter().map(|p| p.id.as_str()));
    }

    pub fn elapsed(&self, piece_id: &str) -> u64 {
        self.tracker.elapsed(piece_id)
    }

    pub fn is_running(&self, piece_id: &str) -> bool {
        self.tracker.is_running(piece_id)
    }
}

//! Job model
//!
//! A job owns its pieces and history inline; edits replace the whole record
//! in the store rather than patching fields in place.

use chrono::NaiveDate;
use dote_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};

/// The seven ordered stages a job moves through, briefing to launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStage {
    Briefing,
    Research,
    Creation,
    InternalApproval,
    ClientApproval,
    Production,
    Launch,
}

impl JobStage {
    /// All stages in board order
    pub const ALL: [JobStage; 7] = [
        JobStage::Briefing,
        JobStage::Research,
        JobStage::Creation,
        JobStage::InternalApproval,
        JobStage::ClientApproval,
        JobStage::Production,
        JobStage::Launch,
    ];

    /// Next stage in the sequence; `None` at the terminal stage
    pub fn next(self) -> Option<JobStage> {
        match self {
            JobStage::Briefing => Some(JobStage::Research),
            JobStage::Research => Some(JobStage::Creation),
            JobStage::Creation => Some(JobStage::InternalApproval),
            JobStage::InternalApproval => Some(JobStage::ClientApproval),
            JobStage::ClientApproval => Some(JobStage::Production),
            JobStage::Production => Some(JobStage::Launch),
            JobStage::Launch => None,
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, JobStage::Launch)
    }

    /// Column label used on the kanban board
    pub fn label(self) -> &'static str {
        match self {
            JobStage::Briefing => "Briefing",
            JobStage::Research => "Research & content",
            JobStage::Creation => "Creation",
            JobStage::InternalApproval => "Internal approval",
            JobStage::ClientApproval => "Client approval",
            JobStage::Production => "Production",
            JobStage::Launch => "Launch",
        }
    }
}

/// Job and piece medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    Digital,
    Offline,
}

/// Piece workflow status. Unlike stages these are unordered: any status can
/// be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceStatus {
    Pending,
    Done,
    Approved,
    Redo,
}

impl PieceStatus {
    /// Done and approved pieces both count toward job progress
    pub fn is_complete(self) -> bool {
        matches!(self, PieceStatus::Done | PieceStatus::Approved)
    }

    pub fn label(self) -> &'static str {
        match self {
            PieceStatus::Pending => "Pending",
            PieceStatus::Done => "Done",
            PieceStatus::Approved => "Approved",
            PieceStatus::Redo => "Redo",
        }
    }
}

/// An individual deliverable within a job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPiece {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub piece_type: JobType,
    /// Free-text dimensions or medium description ("1920x600", "A3 poster")
    pub format: String,
    /// Pieces support multiple assignees, unlike jobs
    pub assignee_ids: Vec<Id>,
    /// Brief or copy for the piece
    pub content: String,
    pub final_art_link: Option<String>,
    pub status: PieceStatus,
}

impl JobPiece {
    /// New piece with the defaults applied on the job details form
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            name: "New piece".to_string(),
            piece_type: JobType::Digital,
            format: String::new(),
            assignee_ids: Vec::new(),
            content: String::new(),
            final_art_link: None,
            status: PieceStatus::Pending,
        }
    }
}

/// One audit line on a job. Newest entries sit at the front of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHistoryEntry {
    pub id: Id,
    /// Display timestamp from the clock collaborator
    pub date: String,
    /// Actor name at the time of the action
    pub user: String,
    pub action: String,
}

/// Progress derived from piece statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProgress {
    pub total: usize,
    pub completed: usize,
    pub percent: u32,
}

/// A unit of creative work for a client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Id,
    pub title: String,
    pub client_id: Id,
    /// Display snapshot taken when the job was created or reassigned to a
    /// client; a later client rename does not update it
    pub client_name: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub stage: JobStage,
    pub assignee_id: Id,
    pub deadline: NaiveDate,
    pub description: Option<String>,
    /// Ordered reference links, stored as-is without URL validation
    pub dropbox_links: Vec<String>,
    pub pieces: Vec<JobPiece>,
    pub history: Vec<JobHistoryEntry>,
}

impl Job {
    /// Overdue means past deadline while still unfinished. Launched jobs are
    /// never overdue regardless of deadline.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline < today && !self.stage.is_final()
    }

    /// Completion stats over the job's pieces. Percent is 0 for a job with
    /// no pieces.
    pub fn progress(&self) -> JobProgress {
        let total = self.pieces.len();
        let completed = self.pieces.iter().filter(|p| p.status.is_complete()).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        JobProgress {
            total,
            completed,
            percent,
        }
    }

    pub fn piece(&self, piece_id: &str) -> Option<&JobPiece> {
        self.pieces.iter().find(|p| p.id == piece_id)
    }

    pub fn piece_mut(&mut self, piece_id: &str) -> Option<&mut JobPiece> {
        self.pieces.iter_mut().find(|p| p.id == piece_id)
    }

    /// Insert a history entry at the front, keeping newest-first order
    pub fn prepend_history(&mut self, entry: JobHistoryEntry) {
        self.history.insert(0, entry);
    }
}

impl Identifiable for Job {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Job {
    const TYPE_NAME: &'static str = "Job";
}

/// Format accumulated seconds as zero-padded "HH:MM:SS". Hours keep growing
/// past 24, there is no wraparound.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_pieces(statuses: &[PieceStatus]) -> Job {
        let pieces = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| JobPiece {
                status: *status,
                ..JobPiece::new(format!("p{}", i + 1))
            })
            .collect();
        Job {
            id: "JOB-1".to_string(),
            title: "Campaign".to_string(),
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

    #[test]
    fn stage_sequence_reaches_launch_in_six_steps() {
        let mut stage = JobStage::Briefing;
        let mut steps = 0;
        while let Some(next) = stage.next() {
            stage = next;
            steps += 1;
        }
        assert_eq!(steps, 6);
        assert_eq!(stage, JobStage::Launch);
        assert_eq!(stage.next(), None);
    }

    #[test]
    fn launched_jobs_are_never_overdue() {
        let mut job = job_with_pieces(&[]);
        job.deadline = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        job.stage = JobStage::Launch;

        let far_future = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(!job.is_overdue(far_future));

        job.stage = JobStage::Production;
        assert!(job.is_overdue(far_future));
    }

    #[test]
    fn overdue_requires_deadline_strictly_before_today() {
        let job = job_with_pieces(&[]);
        assert!(!job.is_overdue(job.deadline));
        assert!(job.is_overdue(job.deadline.succ_opt().unwrap()));
    }

    #[test]
    fn progress_with_no_pieces_is_all_zero() {
        let job = job_with_pieces(&[]);
        assert_eq!(
            job.progress(),
            JobProgress {
                total: 0,
                completed: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn progress_counts_done_and_approved() {
        let job = job_with_pieces(&[
            PieceStatus::Pending,
            PieceStatus::Done,
            PieceStatus::Approved,
            PieceStatus::Redo,
        ]);
        assert_eq!(
            job.progress(),
            JobProgress {
                total: 4,
                completed: 2,
                percent: 50
            }
        );
    }

    #[test]
    fn progress_percent_rounds() {
        let job = job_with_pieces(&[
            PieceStatus::Done,
            PieceStatus::Pending,
            PieceStatus::Pending,
        ]);
        // 1/3 rounds to 33
        assert_eq!(job.progress().percent, 33);

        let job = job_with_pieces(&[
            PieceStatus::Done,
            PieceStatus::Done,
            PieceStatus::Pending,
        ]);
        // 2/3 rounds to 67
        assert_eq!(job.progress().percent, 67);
    }

    #[test]
    fn new_piece_defaults() {
        let piece = JobPiece::new("p1");
        assert_eq!(piece.status, PieceStatus::Pending);
        assert_eq!(piece.piece_type, JobType::Digital);
        assert!(piece.assignee_ids.is_empty());
        assert_eq!(piece.name, "New piece");
    }

    #[test]
    fn history_is_newest_first() {
        let mut job = job_with_pieces(&[]);
        for n in 1..=3 {
            job.prepend_history(JobHistoryEntry {
                id: format!("h{n}"),
                date: format!("2023-10-0{n}"),
                user: "Ana".to_string(),
                action: format!("action {n}"),
            });
        }
        let ids: Vec<_> = job.history.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["h3", "h2", "h1"]);
    }

    #[test]
    fn format_elapsed_pads_and_does_not_wrap() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3661), "01:01:01");
        // 30 hours straight
        assert_eq!(format_elapsed(108_000), "30:00:00");
    }

    #[test]
    fn job_serializes_with_camel_case_wire_names() {
        let job = job_with_pieces(&[PieceStatus::Pending]);
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["clientId"], "1");
        assert_eq!(value["type"], "Digital");
        assert_eq!(value["deadline"], "2023-11-20");
        assert_eq!(value["pieces"][0]["assigneeIds"], serde_json::json!([]));
    }
}

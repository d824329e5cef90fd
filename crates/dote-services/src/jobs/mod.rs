//! Job services
//!
//! The job board's operations: create, edit, stage moves, piece management,
//! reference links, delete. Only create and edit validate; stage and piece
//! mutations always go through.

mod create;
mod delete;
mod links;
mod pieces;
mod set_attributes;
mod stages;
mod update;

pub use create::CreateJobService;
pub use delete::DeleteJobService;
pub use links::LinkService;
pub use pieces::PieceService;
pub use set_attributes::SetJobAttributesService;
pub use stages::StageService;
pub use update::UpdateJobService;

use chrono::NaiveDate;
use dote_models::{JobStage, JobType};

/// Job service params. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct JobParams {
    pub title: Option<String>,
    pub client_id: Option<String>,
    pub job_type: Option<JobType>,
    pub stage: Option<JobStage>,
    pub assignee_id: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub description: Option<String>,
}

impl JobParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    pub fn with_stage(mut self, stage: JobStage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_assignee_id(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Piece edit params. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct PieceParams {
    pub name: Option<String>,
    pub piece_type: Option<JobType>,
    pub format: Option<String>,
    pub content: Option<String>,
    pub final_art_link: Option<String>,
}

impl PieceParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_piece_type(mut self, piece_type: JobType) -> Self {
        self.piece_type = Some(piece_type);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_final_art_link(mut self, link: impl Into<String>) -> Self {
        self.final_art_link = Some(link.into());
        self
    }
}

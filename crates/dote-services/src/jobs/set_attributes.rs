//! Set attributes service for jobs

use dote_contracts::{Contract, JobContract};
use dote_models::Job;

use super::JobParams;
use crate::result::ServiceResult;

/// Applies params to a job and validates the outcome. Both create and
/// update funnel their field edits through here.
pub struct SetJobAttributesService {
    model: Job,
}

impl SetJobAttributesService {
    pub fn new(model: Job) -> Self {
        Self { model }
    }

    pub fn call(mut self, params: &JobParams) -> ServiceResult<Job> {
        self.set_attributes(params);

        if let Err(errors) = JobContract::new().validate(&self.model) {
            return ServiceResult::failure(errors);
        }

        ServiceResult::success(self.model)
    }

    fn set_attributes(&mut self, params: &JobParams) {
        if let Some(ref title) = params.title {
            self.model.title = title.clone();
        }
        if let Some(ref client_id) = params.client_id {
            self.model.client_id = client_id.clone();
        }
        if let Some(job_type) = params.job_type {
            self.model.job_type = job_type;
        }
        if let Some(stage) = params.stage {
            self.model.stage = stage;
        }
        if let Some(ref assignee_id) = params.assignee_id {
            self.model.assignee_id = assignee_id.clone();
        }
        if let Some(deadline) = params.deadline {
            self.model.deadline = deadline;
        }
        if let Some(ref description) = params.description {
            self.model.description = Some(description.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dote_models::{JobStage, JobType};

    fn base_job() -> Job {
        Job {
            id: "JOB-1".to_string(),
            title: "Black Friday campaign".to_string(),
            client_id: "1".to_string(),
            client_name: "TechSolutions Inc.".to_string(),
            job_type: JobType::Digital,
            stage: JobStage::Briefing,
            assignee_id: "2".to_string(),
            deadline: NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
            description: None,
            dropbox_links: Vec::new(),
            pieces: Vec::new(),
            history: Vec::new(),
        }
    }

    #[test]
    fn applies_only_the_given_fields() {
        let params = JobParams::new()
            .with_title("Christmas campaign")
            .with_description("Retail push for December");

        let result = SetJobAttributesService::new(base_job()).call(&params);
        assert!(result.is_success());

        let job = result.unwrap();
        assert_eq!(job.title, "Christmas campaign");
        assert_eq!(job.description.as_deref(), Some("Retail push for December"));
        // Untouched fields keep their values
        assert_eq!(job.assignee_id, "2");
        assert_eq!(job.stage, JobStage::Briefing);
    }

    #[test]
    fn blanking_the_title_fails_validation() {
        let params = JobParams::new().with_title("");
        let result = SetJobAttributesService::new(base_job()).call(&params);

        assert!(result.is_failure());
        assert!(result.errors().has_error("title"));
    }
}

//! Contract for jobs

use dote_core::error::ValidationErrors;
use dote_models::Job;

use crate::base::{finish, Contract, ValidationResult};

/// Validates a job before create or update
#[derive(Debug, Default, Clone, Copy)]
pub struct JobContract;

impl JobContract {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_title(&self, title: &str, errors: &mut ValidationErrors) {
        if title.trim().is_empty() {
            errors.add("title", "can't be blank");
        }
    }

    pub fn validate_client(&self, client_id: &str, errors: &mut ValidationErrors) {
        if client_id.is_empty() {
            errors.add("client", "can't be blank");
        }
    }

    pub fn validate_assignee(&self, assignee_id: &str, errors: &mut ValidationErrors) {
        if assignee_id.is_empty() {
            errors.add("assignee", "can't be blank");
        }
    }
}

impl Contract<Job> for JobContract {
    fn validate(&self, entity: &Job) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_title(&entity.title, &mut errors);
        self.validate_client(&entity.client_id, &mut errors);
        self.validate_assignee(&entity.assignee_id, &mut errors);

        finish(errors)
    }
}

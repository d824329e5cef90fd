//! Contract for team members

use std::sync::LazyLock;

use dote_core::error::ValidationErrors;
use dote_models::TeamMember;
use regex::Regex;

use crate::base::{finish, Contract, ValidationResult};

/// Valid email pattern
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validates a team member before create or update
#[derive(Debug, Default, Clone, Copy)]
pub struct MemberContract;

impl MemberContract {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_name(&self, name: &str, errors: &mut ValidationErrors) {
        if name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
    }

    pub fn validate_email(&self, email: &str, errors: &mut ValidationErrors) {
        if email.is_empty() {
            errors.add("email", "can't be blank");
            return;
        }
        if !EMAIL_PATTERN.is_match(email) {
            errors.add("email", "is not a valid email address");
        }
    }
}

impl Contract<TeamMember> for MemberContract {
    fn validate(&self, entity: &TeamMember) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(&entity.name, &mut errors);
        self.validate_email(&entity.email, &mut errors);

        finish(errors)
    }
}

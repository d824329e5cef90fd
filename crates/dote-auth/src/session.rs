//! Sign-in session
//!
//! One signed-in user at a time. The password is required but never
//! verified against anything; the dashboard this replaces shipped with a
//! purely decorative login form.

use std::sync::Arc;

use dote_core::error::{DoteError, DoteResult, ValidationErrors};
use dote_core::traits::Entity;
use dote_models::TeamMember;
use dote_store::TeamStore;

pub struct Session {
    team: Arc<dyn TeamStore>,
    current: Option<TeamMember>,
}

impl Session {
    pub fn new(team: Arc<dyn TeamStore>) -> Self {
        Self {
            team,
            current: None,
        }
    }

    /// Sign in by email. Both fields must be present, then the email must
    /// match a team member; the password itself is accepted as-is.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> DoteResult<TeamMember> {
        let mut errors = ValidationErrors::new();
        if email.trim().is_empty() {
            errors.add("email", "can't be blank");
        }
        if password.is_empty() {
            errors.add("password", "can't be blank");
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let member = self
            .team
            .find_by_email(email)
            .await?
            .ok_or_else(|| DoteError::not_found(TeamMember::TYPE_NAME, email))?;

        tracing::info!(member_id = %member.id, name = %member.name, "signed in");
        self.current = Some(member.clone());
        Ok(member)
    }

    pub fn current_user(&self) -> Option<&TeamMember> {
        self.current.as_ref()
    }

    pub fn sign_out(&mut self) {
        if let Some(member) = self.current.take() {
            tracing::info!(member_id = %member.id, "signed out");
        }
    }
}

//! Team services
//!
//! Member records carry their own capability override; creation stamps the
//! role's default set so later role edits don't silently change access.

mod create;
mod delete;
mod set_attributes;
mod update;

pub use create::CreateMemberService;
pub use delete::DeleteMemberService;
pub use set_attributes::SetMemberAttributesService;
pub use update::UpdateMemberService;

use chrono::NaiveDate;
use dote_models::{AccessPermissions, MemberStatus, Role};

/// Member service params. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct MemberParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub status: Option<MemberStatus>,
    pub avatar: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub bio: Option<String>,
    /// Raw skill labels; blanks are dropped and the rest trimmed on apply
    pub skills: Option<Vec<String>>,
    pub permissions: Option<AccessPermissions>,
}

impl MemberParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_joined_date(mut self, date: NaiveDate) -> Self {
        self.joined_date = Some(date);
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn with_permissions(mut self, permissions: AccessPermissions) -> Self {
        self.permissions = Some(permissions);
        self
    }
}

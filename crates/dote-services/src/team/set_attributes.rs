use dote_contracts::{Contract, MemberContract};
use dote_models::TeamMember;

use super::MemberParams;
use crate::result::ServiceResult;

/// Applies params to a member and validates the result. Used by create and
/// update; does not persist.
pub struct SetMemberAttributesService {
    model: TeamMember,
}

impl SetMemberAttributesService {
    pub fn new(model: TeamMember) -> Self {
        Self { model }
    }

    pub fn call(mut self, params: &MemberParams) -> ServiceResult<TeamMember> {
        self.set_attributes(params);
        match MemberContract.validate(&self.model) {
            Ok(()) => ServiceResult::success(self.model),
            Err(errors) => ServiceResult::failure(errors),
        }
    }

    fn set_attributes(&mut self, params: &MemberParams) {
        if let Some(ref name) = params.name {
            self.model.name = name.clone();
        }
        if let Some(ref email) = params.email {
            self.model.email = email.clone();
        }
        if let Some(ref phone) = params.phone {
            self.model.phone = Some(phone.clone());
        }
        if let Some(role) = params.role {
            self.model.role = role;
        }
        if let Some(status) = params.status {
            self.model.status = status;
        }
        if let Some(ref avatar) = params.avatar {
            self.model.avatar = Some(avatar.clone());
        }
        if let Some(date) = params.joined_date {
            self.model.joined_date = Some(date);
        }
        if let Some(ref bio) = params.bio {
            self.model.bio = Some(bio.clone());
        }
        if let Some(ref skills) = params.skills {
            self.model.skills = skills
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(permissions) = params.permissions {
            self.model.permissions = Some(permissions);
        }
    }
}

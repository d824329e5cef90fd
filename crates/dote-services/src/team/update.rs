use std::sync::Arc;

use dote_models::TeamMember;
use dote_store::TeamStore;

use super::{MemberParams, SetMemberAttributesService};
use crate::result::ServiceResult;

/// Edits a member's profile, role, status, skills, or capability override.
pub struct UpdateMemberService {
    team: Arc<dyn TeamStore>,
}

impl UpdateMemberService {
    pub fn new(team: Arc<dyn TeamStore>) -> Self {
        Self { team }
    }

    pub async fn call(self, member: TeamMember, params: &MemberParams) -> ServiceResult<TeamMember> {
        let result = SetMemberAttributesService::new(member).call(params);
        if result.is_failure() {
            return result;
        }
        let member = result.unwrap();

        if let Err(err) = self.team.put(member.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(member_id = %member.id, "member updated");
        ServiceResult::success(member)
    }
}

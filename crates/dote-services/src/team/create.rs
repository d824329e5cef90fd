use std::sync::Arc;

use dote_core::ids::new_id;
use dote_core::traits::Clock;
use dote_models::{AccessPermissions, Role, TeamMember};
use dote_store::TeamStore;

use super::{MemberParams, SetMemberAttributesService};
use crate::result::ServiceResult;

/// Creates a team member. Name and email are required; everything else has
/// an onboarding default. The role's capability set is stamped onto the
/// record at creation so later edits to the role table don't retroactively
/// change who sees what.
pub struct CreateMemberService {
    team: Arc<dyn TeamStore>,
    clock: Arc<dyn Clock>,
}

impl CreateMemberService {
    pub fn new(team: Arc<dyn TeamStore>, clock: Arc<dyn Clock>) -> Self {
        Self { team, clock }
    }

    pub async fn call(self, params: &MemberParams) -> ServiceResult<TeamMember> {
        let model = TeamMember::new(new_id(), "", "", Role::Designer);
        let result = SetMemberAttributesService::new(model).call(params);
        if result.is_failure() {
            return result;
        }
        let mut member = result.unwrap();

        if member.joined_date.is_none() {
            member.joined_date = Some(self.clock.today());
        }
        if member.avatar.is_none() {
            member.avatar = Some(generated_avatar(&member.name));
        }
        if member.permissions.is_none() {
            member.permissions = Some(AccessPermissions::for_role(member.role));
        }

        if let Err(err) = self.team.put(member.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(member_id = %member.id, name = %member.name, "member created");
        ServiceResult::success(member)
    }
}

/// Placeholder avatar from the ui-avatars service, same image the member
/// picker shows until a real photo is uploaded
fn generated_avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&color=fff&size=150",
        name.replace(' ', "%20")
    )
}

use std::sync::Arc;

use dote_models::TeamMember;
use dote_store::TeamStore;

use crate::result::ServiceResult;

/// Removes a member from the directory. Jobs and pieces keep their
/// assignee ids; a dangling id just renders unassigned on the boards.
pub struct DeleteMemberService {
    team: Arc<dyn TeamStore>,
}

impl DeleteMemberService {
    pub fn new(team: Arc<dyn TeamStore>) -> Self {
        Self { team }
    }

    pub async fn call(self, member_id: &str) -> ServiceResult<TeamMember> {
        match self.team.delete(member_id).await {
            Ok(Some(member)) => {
                tracing::debug!(member_id = %member.id, "member deleted");
                ServiceResult::success(member)
            }
            Ok(None) => {
                ServiceResult::failure_with_base_error(format!("Member {member_id} does not exist"))
            }
            Err(err) => ServiceResult::failure_with_base_error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dote_models::Role;
    use dote_store::MemoryTeamStore;

    #[tokio::test]
    async fn delete_returns_the_removed_member() {
        let team = Arc::new(MemoryTeamStore::new());
        team.put(TeamMember::new(
            "2",
            "Roberto Dias",
            "roberto@dote.com",
            Role::Designer,
        ))
        .await
        .unwrap();

        let result = DeleteMemberService::new(team.clone()).call("2").await;

        assert_eq!(result.unwrap().name, "Roberto Dias");
        assert!(team.get("2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_a_missing_member_fails() {
        let team = Arc::new(MemoryTeamStore::new());

        let result = DeleteMemberService::new(team).call("404").await;

        assert!(result.is_failure());
        assert_eq!(
            result.full_messages(),
            vec!["Member 404 does not exist".to_string()]
        );
    }
}

//! Team member store

use async_trait::async_trait;
use dashmap::DashMap;
use dote_core::error::DoteResult;
use dote_core::traits::Id;
use dote_models::TeamMember;

#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn get(&self, id: &str) -> DoteResult<Option<TeamMember>>;

    /// Case-insensitive email lookup, used by the mock sign-in
    async fn find_by_email(&self, email: &str) -> DoteResult<Option<TeamMember>>;

    async fn put(&self, member: TeamMember) -> DoteResult<()>;

    async fn delete(&self, id: &str) -> DoteResult<Option<TeamMember>>;

    /// All members sorted by name
    async fn list(&self) -> DoteResult<Vec<TeamMember>>;
}

/// In-memory team store
#[derive(Default)]
pub struct MemoryTeamStore {
    members: DashMap<Id, TeamMember>,
}

impl MemoryTeamStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamStore for MemoryTeamStore {
    async fn get(&self, id: &str) -> DoteResult<Option<TeamMember>> {
        Ok(self.members.get(id).map(|m| m.clone()))
    }

    async fn find_by_email(&self, email: &str) -> DoteResult<Option<TeamMember>> {
        Ok(self
            .members
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email))
            .map(|m| m.clone()))
    }

    async fn put(&self, member: TeamMember) -> DoteResult<()> {
        self.members.insert(member.id.clone(), member);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DoteResult<Option<TeamMember>> {
        Ok(self.members.remove(id).map(|(_, m)| m))
    }

    async fn list(&self) -> DoteResult<Vec<TeamMember>> {
        let mut all: Vec<TeamMember> = self.members.iter().map(|m| m.clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dote_models::Role;

    #[tokio::test]
    async fn find_by_email_ignores_case() {
        let store = MemoryTeamStore::new();
        store
            .put(TeamMember::new("1", "Julia Lima", "julia@dote.com", Role::Creator))
            .await
            .unwrap();

        let found = store.find_by_email("Julia@Dote.com").await.unwrap();
        assert_eq!(found.map(|m| m.id), Some("1".to_string()));
        assert!(store.find_by_email("nobody@dote.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_overwrites_existing_member() {
        let store = MemoryTeamStore::new();
        store
            .put(TeamMember::new("1", "Julia Lima", "julia@dote.com", Role::Creator))
            .await
            .unwrap();

        let mut updated = TeamMember::new("1", "Julia Lima", "julia@dote.com", Role::Gestor);
        updated.bio = Some("Promoted".to_string());
        store.put(updated).await.unwrap();

        let fetched = store.get("1").await.unwrap().unwrap();
        assert_eq!(fetched.role, Role::Gestor);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}

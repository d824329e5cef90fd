//! Directory search and calendar feeds

use std::sync::Arc;

use dote_core::error::DoteResult;
use dote_models::{Client, CommemorativeDate, Role, TeamMember};
use dote_store::{ClientStore, DateStore, TeamStore};

pub struct DirectoryQueries {
    team: Arc<dyn TeamStore>,
    clients: Arc<dyn ClientStore>,
    dates: Arc<dyn DateStore>,
}

impl DirectoryQueries {
    pub fn new(
        team: Arc<dyn TeamStore>,
        clients: Arc<dyn ClientStore>,
        dates: Arc<dyn DateStore>,
    ) -> Self {
        Self {
            team,
            clients,
            dates,
        }
    }

    /// Members whose name or email contains the term, optionally narrowed
    /// to one role. An empty term matches everyone.
    pub async fn search_team(
        &self,
        term: &str,
        role: Option<Role>,
    ) -> DoteResult<Vec<TeamMember>> {
        let needle = term.to_lowercase();
        let members = self.team.list().await?;
        Ok(members
            .into_iter()
            .filter(|m| {
                let matches_term = m.name.to_lowercase().contains(&needle)
                    || m.email.to_lowercase().contains(&needle);
                let matches_role = role.map_or(true, |r| m.role == r);
                matches_term && matches_role
            })
            .collect())
    }

    /// Clients whose name contains the term
    pub async fn search_clients(&self, term: &str) -> DoteResult<Vec<Client>> {
        let needle = term.to_lowercase();
        let clients = self.clients.list().await?;
        Ok(clients
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Dates recurring in the given zero-based month, ordered by day
    pub async fn month_events(&self, month: u32) -> DoteResult<Vec<CommemorativeDate>> {
        let mut events: Vec<CommemorativeDate> = self
            .dates
            .list()
            .await?
            .into_iter()
            .filter(|d| d.month == month)
            .collect();
        events.sort_by_key(|d| d.day);
        Ok(events)
    }

    /// Calendar feed for one client: its own dates plus the agency-wide ones
    pub async fn client_dates(&self, client_id: &str) -> DoteResult<Vec<CommemorativeDate>> {
        let dates = self.dates.list().await?;
        Ok(dates
            .into_iter()
            .filter(|d| d.is_general() || d.client_id.as_deref() == Some(client_id))
            .collect())
    }

    /// Agency-wide dates only, as managed on the settings page
    pub async fn general_dates(&self) -> DoteResult<Vec<CommemorativeDate>> {
        let dates = self.dates.list().await?;
        Ok(dates.into_iter().filter(|d| d.is_general()).collect())
    }
}

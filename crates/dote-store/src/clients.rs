//! Client store

use async_trait::async_trait;
use dashmap::DashMap;
use dote_core::error::DoteResult;
use dote_core::traits::Id;
use dote_models::Client;

#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn get(&self, id: &str) -> DoteResult<Option<Client>>;

    /// Insert or replace the client record
    async fn put(&self, client: Client) -> DoteResult<()>;

    async fn delete(&self, id: &str) -> DoteResult<Option<Client>>;

    /// All clients sorted by name
    async fn list(&self) -> DoteResult<Vec<Client>>;
}

/// In-memory client store
#[derive(Default)]
pub struct MemoryClientStore {
    clients: DashMap<Id, Client>,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn get(&self, id: &str) -> DoteResult<Option<Client>> {
        Ok(self.clients.get(id).map(|c| c.clone()))
    }

    async fn put(&self, client: Client) -> DoteResult<()> {
        self.clients.insert(client.id.clone(), client);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DoteResult<Option<Client>> {
        Ok(self.clients.remove(id).map(|(_, c)| c))
    }

    async fn list(&self) -> DoteResult<Vec<Client>> {
        let mut all: Vec<Client> = self.clients.iter().map(|c| c.clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let store = MemoryClientStore::new();
        store.put(Client::new("2", "Zenith Labs")).await.unwrap();
        store.put(Client::new("1", "Boutique Flora")).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Boutique Flora", "Zenith Labs"]);
    }

    #[tokio::test]
    async fn delete_removes_and_returns() {
        let store = MemoryClientStore::new();
        store.put(Client::new("1", "Boutique Flora")).await.unwrap();

        let removed = store.delete("1").await.unwrap();
        assert_eq!(removed.map(|c| c.name), Some("Boutique Flora".to_string()));
        assert!(store.get("1").await.unwrap().is_none());
    }
}

//! Commemorative date store

use async_trait::async_trait;
use dashmap::DashMap;
use dote_core::error::DoteResult;
use dote_core::traits::Id;
use dote_models::CommemorativeDate;

#[async_trait]
pub trait DateStore: Send + Sync {
    async fn get(&self, id: &str) -> DoteResult<Option<CommemorativeDate>>;

    async fn put(&self, date: CommemorativeDate) -> DoteResult<()>;

    async fn delete(&self, id: &str) -> DoteResult<Option<CommemorativeDate>>;

    /// All dates in calendar order (month, then day)
    async fn list(&self) -> DoteResult<Vec<CommemorativeDate>>;
}

/// In-memory commemorative date store
#[derive(Default)]
pub struct MemoryDateStore {
    dates: DashMap<Id, CommemorativeDate>,
}

impl MemoryDateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DateStore for MemoryDateStore {
    async fn get(&self, id: &str) -> DoteResult<Option<CommemorativeDate>> {
        Ok(self.dates.get(id).map(|d| d.clone()))
    }

    async fn put(&self, date: CommemorativeDate) -> DoteResult<()> {
        self.dates.insert(date.id.clone(), date);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DoteResult<Option<CommemorativeDate>> {
        Ok(self.dates.remove(id).map(|(_, d)| d))
    }

    async fn list(&self) -> DoteResult<Vec<CommemorativeDate>> {
        let mut all: Vec<CommemorativeDate> = self.dates.iter().map(|d| d.clone()).collect();
        all.sort_by_key(|d| (d.month, d.day));
        Ok(all)
    }
}

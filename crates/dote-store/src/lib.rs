//! # dote-store
//!
//! The Entity Store: one async trait per collection plus in-memory
//! implementations. The traits are the seam a persistent backend would
//! implement; everything above them only speaks get/put/delete/list.

use std::sync::Arc;

use dote_core::error::DoteResult;

pub mod clients;
pub mod dates;
pub mod jobs;
pub mod seed;
pub mod team;

pub use clients::{ClientStore, MemoryClientStore};
pub use dates::{DateStore, MemoryDateStore};
pub use jobs::{JobStore, MemoryJobStore};
pub use team::{MemoryTeamStore, TeamStore};

/// All collections behind one cloneable handle
#[derive(Clone)]
pub struct Stores {
    pub jobs: Arc<dyn JobStore>,
    pub clients: Arc<dyn ClientStore>,
    pub team: Arc<dyn TeamStore>,
    pub dates: Arc<dyn DateStore>,
}

impl Stores {
    /// Empty in-memory stores
    pub fn in_memory() -> Self {
        Self {
            jobs: Arc::new(MemoryJobStore::new()),
            clients: Arc::new(MemoryClientStore::new()),
            team: Arc::new(MemoryTeamStore::new()),
            dates: Arc::new(MemoryDateStore::new()),
        }
    }

    /// In-memory stores loaded with the demo fixtures
    pub async fn seeded() -> DoteResult<Self> {
        let stores = Self::in_memory();
        seed::populate(&stores).await?;
        Ok(stores)
    }
}

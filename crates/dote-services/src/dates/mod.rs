//! Commemorative date services

mod create;
mod delete;

pub use create::CreateDateService;
pub use delete::DeleteDateService;

/// Date creation params
#[derive(Debug, Clone, Default)]
pub struct DateParams {
    pub name: Option<String>,
    pub day: Option<u32>,
    /// Zero-based month, 0-11
    pub month: Option<u32>,
    pub client_id: Option<String>,
}

impl DateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

//! Client services
//!
//! Basic record fields go through params; brandbook sections are replaced
//! wholesale through dedicated update methods, matching how the brandbook
//! editor saves one tab at a time.

mod create;
mod delete;
mod set_attributes;
mod update;

pub use create::CreateClientService;
pub use delete::DeleteClientService;
pub use set_attributes::SetClientAttributesService;
pub use update::UpdateClientService;

use dote_models::{ClientPlan, ClientStatus};

/// Client service params for the basic record fields. `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default)]
pub struct ClientParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub plan: Option<ClientPlan>,
    pub status: Option<ClientStatus>,
    pub last_interaction: Option<String>,
}

impl ClientParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_plan(mut self, plan: ClientPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_last_interaction(mut self, label: impl Into<String>) -> Self {
        self.last_interaction = Some(label.into());
        self
    }
}

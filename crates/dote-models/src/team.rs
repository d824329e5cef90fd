//! Team member model

use chrono::NaiveDate;
use dote_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};

/// The six fixed agency roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Gestor,
    Atendimento,
    Designer,
    Creator,
    Videomaker,
    Financeiro,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Gestor,
        Role::Atendimento,
        Role::Designer,
        Role::Creator,
        Role::Videomaker,
        Role::Financeiro,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Inactive,
    Vacation,
}

/// The six boolean capability flags gating dashboard areas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPermissions {
    pub dashboard: bool,
    pub clients: bool,
    pub team: bool,
    pub jobs: bool,
    pub financial: bool,
    pub settings: bool,
}

impl AccessPermissions {
    /// Every flag enabled
    pub fn all() -> Self {
        Self {
            dashboard: true,
            clients: true,
            team: true,
            jobs: true,
            financial: true,
            settings: true,
        }
    }

    /// Static default capability set for a role. Members without an explicit
    /// override fall back to this table.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Gestor => Self::all(),
            Role::Atendimento => Self {
                dashboard: true,
                clients: true,
                jobs: true,
                ..Self::default()
            },
            Role::Designer | Role::Creator | Role::Videomaker => Self {
                dashboard: true,
                jobs: true,
                ..Self::default()
            },
            Role::Financeiro => Self {
                dashboard: true,
                clients: true,
                financial: true,
                ..Self::default()
            },
        }
    }
}

/// Agency team member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Id,
    pub name: String,
    pub role: Role,
    pub status: MemberStatus,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Explicit capability override. When set it replaces the role default
    /// entirely; there is no field-level merge.
    pub permissions: Option<AccessPermissions>,
}

impl TeamMember {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            status: MemberStatus::Active,
            email: email.into(),
            phone: None,
            avatar: None,
            joined_date: None,
            bio: None,
            skills: Vec::new(),
            permissions: None,
        }
    }
}

impl Identifiable for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for TeamMember {
    const TYPE_NAME: &'static str = "TeamMember";
}

//! Section access checks
//!
//! Six dashboard sections, six boolean flags. A member's effective
//! capability set is either their stored override or the role default;
//! an override replaces the default entirely, there is no field-level
//! merge between the two.

use dote_models::{AccessPermissions, TeamMember};

/// The navigable sections of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Clients,
    Team,
    Jobs,
    Financial,
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Clients,
        Section::Team,
        Section::Jobs,
        Section::Financial,
        Section::Settings,
    ];
}

/// The capability set that applies to this member right now
pub fn effective_permissions(member: &TeamMember) -> AccessPermissions {
    member
        .permissions
        .unwrap_or_else(|| AccessPermissions::for_role(member.role))
}

/// Advisory check used by navigation; mutations do not consult it
pub fn can_access(member: &TeamMember, section: Section) -> bool {
    let perms = effective_permissions(member);
    match section {
        Section::Dashboard => perms.dashboard,
        Section::Clients => perms.clients,
        Section::Team => perms.team,
        Section::Jobs => perms.jobs,
        Section::Financial => perms.financial,
        Section::Settings => perms.settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dote_models::Role;

    #[test]
    fn members_without_override_use_the_role_default() {
        let member = TeamMember::new("2", "Roberto Dias", "roberto@dote.com", Role::Designer);

        assert!(can_access(&member, Section::Dashboard));
        assert!(can_access(&member, Section::Jobs));
        assert!(!can_access(&member, Section::Clients));
        assert!(!can_access(&member, Section::Financial));
    }

    #[test]
    fn an_override_replaces_the_role_default_entirely() {
        let mut member = TeamMember::new("1", "Ana Gestora", "ana@dote.com", Role::Gestor);
        member.permissions = Some(AccessPermissions {
            dashboard: true,
            ..AccessPermissions::default()
        });

        // Gestor would normally see everything; the override wins flag by flag
        assert_eq!(
            effective_permissions(&member),
            AccessPermissions {
                dashboard: true,
                ..AccessPermissions::default()
            }
        );
        assert!(can_access(&member, Section::Dashboard));
        assert!(!can_access(&member, Section::Jobs));
        assert!(!can_access(&member, Section::Settings));
    }

    #[test]
    fn every_section_maps_to_its_flag() {
        let mut member = TeamMember::new("3", "Julia Lima", "julia@dote.com", Role::Creator);
        member.permissions = Some(AccessPermissions::all());

        for section in Section::ALL {
            assert!(can_access(&member, section));
        }
    }
}

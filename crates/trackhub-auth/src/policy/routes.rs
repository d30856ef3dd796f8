//! Static route policy table and role-based landing dispatch.

use super::requirement::{AccessRequirement, Destination};

/// The declared access requirement of each destination.
///
/// Static configuration, mirroring the original client's route map:
/// the admin panel requires the admin gate, the role dashboards carry
/// role allowlists (admins may inspect both), and everything behind
/// sign-in defaults to plain authentication.
pub fn requirement_for(destination: Destination) -> AccessRequirement {
    match destination {
        Destination::Home | Destination::Login | Destination::Register => {
            AccessRequirement::Public
        }
        Destination::AdminPanel => AccessRequirement::Admin,
        Destination::PiDashboard => {
            AccessRequirement::RoleIn(vec!["PI".to_string(), "ADMIN".to_string()])
        }
        Destination::MemberDashboard => {
            AccessRequirement::RoleIn(vec!["MEMBER".to_string(), "ADMIN".to_string()])
        }
        Destination::Projects
        | Destination::ProjectDetails
        | Destination::Milestones
        | Destination::Documents
        | Destination::Dashboard => AccessRequirement::Authenticated,
    }
}

/// Where a session lands after reaching the generic dashboard.
///
/// Dispatch is by substring on the uppercased role, so compound roles
/// like `PI_LEAD` or `TEAM_MEMBER` land correctly — intentional fuzzy
/// matching, checked in priority order. Admins stay on the dashboard,
/// which renders the admin panel inline.
pub fn landing_for(role: &str) -> Destination {
    let role = role.to_uppercase();
    if role.contains("ADMIN") {
        Destination::Dashboard
    } else if role.contains("PI") {
        Destination::PiDashboard
    } else if role.contains("MEMBER") {
        Destination::MemberDashboard
    } else {
        Destination::Projects
    }
}

//! The routing decision function.

use crate::session::Session;

use super::matcher::{is_admin_role, role_matches};
use super::requirement::{AccessRequirement, Destination};

/// Outcome of an access check for a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Navigation proceeds to the requested destination.
    Allow,
    /// Navigation is diverted to the given destination.
    Redirect(Destination),
}

/// Decides whether a navigation attempt may proceed.
///
/// Evaluated in order, first match wins:
/// 1. a public destination always allows, even with no session;
/// 2. no session redirects to the sign-in form;
/// 3. an admin-only destination redirects non-admins to the project list;
/// 4. a role-allowlisted destination redirects non-matching roles to the
///    project list;
/// 5. everything else allows.
///
/// Pure and deterministic; the project list is the default destination
/// for authenticated users who are turned away.
pub fn decide(session: Option<&Session>, requirement: &AccessRequirement) -> Decision {
    if *requirement == AccessRequirement::Public {
        return Decision::Allow;
    }

    let Some(session) = session else {
        return Decision::Redirect(Destination::Login);
    };

    match requirement {
        AccessRequirement::Admin if !is_admin_role(&session.role) => {
            Decision::Redirect(Destination::Projects)
        }
        AccessRequirement::RoleIn(allowed) if !role_matches(&session.role, allowed) => {
            Decision::Redirect(Destination::Projects)
        }
        _ => Decision::Allow,
    }
}

//! Access decisions and landing dispatch over resolved sessions.

use std::sync::Arc;

use trackhub_auth::policy::{decide, landing_for, requirement_for};
use trackhub_auth::{
    AccessRequirement, Decision, Destination, MemoryCredentialStore, Session, SessionManager,
};

use crate::helpers;

fn session_with_claims(payload: serde_json::Value) -> Session {
    let mut manager = SessionManager::new(Arc::new(MemoryCredentialStore::new()));
    manager.login(&helpers::credential(payload)).unwrap().clone()
}

#[test]
fn test_admin_route_requires_exact_admin_role() {
    let requirement = requirement_for(Destination::AdminPanel);

    for (role, allowed) in [
        ("ADMIN", true),
        ("ROLE_ADMIN", true),
        ("role_admin", true),
        ("ADMINISTRATOR_ASSISTANT", false),
        ("ROLE_ADMIN_SUPER", false),
        ("USER", false),
    ] {
        let session = session_with_claims(serde_json::json!({ "sub": "u1", "role": role }));
        let expected = if allowed {
            Decision::Allow
        } else {
            Decision::Redirect(Destination::Projects)
        };
        assert_eq!(decide(Some(&session), &requirement), expected, "role {role}");
    }
}

#[test]
fn test_public_routes_allow_without_session() {
    for dest in [Destination::Home, Destination::Login, Destination::Register] {
        assert_eq!(decide(None, &requirement_for(dest)), Decision::Allow);
    }
}

#[test]
fn test_guarded_routes_redirect_anonymous_to_login() {
    for dest in [
        Destination::Projects,
        Destination::Milestones,
        Destination::Documents,
        Destination::Dashboard,
        Destination::AdminPanel,
        Destination::PiDashboard,
        Destination::MemberDashboard,
    ] {
        assert_eq!(
            decide(None, &requirement_for(dest)),
            Decision::Redirect(Destination::Login),
            "destination {dest}"
        );
    }
}

#[test]
fn test_role_dashboards_accept_compound_roles() {
    let pi = session_with_claims(serde_json::json!({ "sub": "u1", "role": "PI_LEAD" }));
    assert_eq!(
        decide(Some(&pi), &requirement_for(Destination::PiDashboard)),
        Decision::Allow
    );
    assert_eq!(
        decide(Some(&pi), &requirement_for(Destination::MemberDashboard)),
        Decision::Redirect(Destination::Projects)
    );

    let member = session_with_claims(serde_json::json!({ "sub": "u2", "role": "TEAM_MEMBER" }));
    assert_eq!(
        decide(Some(&member), &requirement_for(Destination::MemberDashboard)),
        Decision::Allow
    );
}

#[test]
fn test_admin_scenario_end_to_end() {
    let session = session_with_claims(serde_json::json!({
        "sub": "u1",
        "username": "alice",
        "role": "ROLE_ADMIN",
        "exp": helpers::exp_in_an_hour(),
    }));
    assert_eq!(session.role, "ROLE_ADMIN");
    assert!(session.is_admin());
    assert_eq!(
        decide(Some(&session), &AccessRequirement::Admin),
        Decision::Allow
    );
    assert_eq!(landing_for(&session.role), Destination::Dashboard);
}

#[test]
fn test_default_role_lands_on_project_list() {
    let session = session_with_claims(serde_json::json!({ "sub": "u1" }));
    assert_eq!(session.role, "USER");
    assert!(!session.is_admin());
    assert_eq!(landing_for(&session.role), Destination::Projects);
}

#[test]
fn test_member_landing_uses_substring_dispatch() {
    let session = session_with_claims(serde_json::json!({ "sub": "u1", "role": "TEAM_MEMBER" }));
    assert_eq!(landing_for(&session.role), Destination::MemberDashboard);
}

#[test]
fn test_authorities_list_feeds_policy() {
    let session = session_with_claims(serde_json::json!({
        "sub": "u1",
        "authorities": ["ROLE_PI"],
    }));
    assert_eq!(landing_for(&session.role), Destination::PiDashboard);
    assert_eq!(
        decide(Some(&session), &requirement_for(Destination::PiDashboard)),
        Decision::Allow
    );
}

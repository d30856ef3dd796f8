//! Role string matching.
//!
//! Role comparison is deliberately loose. Deployments of the tracker
//! service use compound role strings (`PI_LEAD`, `TEAM_MEMBER`,
//! `ROLE_ADMIN_SUPER`), and the access policy has always matched them by
//! containment rather than equality. That looseness produces surprising
//! allows (`SUPERMEMBER` matches a `MEMBER` allowlist) and is preserved
//! here exactly as existing behavior.

/// Role strings that grant administrator standing, compared after
/// uppercasing.
const ADMIN_ROLES: [&str; 2] = ["ADMIN", "ROLE_ADMIN"];

/// Whether a session role counts as administrator.
///
/// Unlike [`role_matches`], this is an exact comparison (after
/// uppercasing): `ADMINISTRATOR` does not pass the admin gate.
pub fn is_admin_role(role: &str) -> bool {
    let role = role.to_uppercase();
    ADMIN_ROLES.iter().any(|admin| role == *admin)
}

/// Whether a session role satisfies any entry of a required role set.
///
/// Both sides are uppercased, then a required entry matches when any of:
/// - the session role equals it,
/// - the session role equals it with a conventional `ROLE_` prefix,
/// - the session role contains it as a substring.
pub fn role_matches(session_role: &str, required: &[String]) -> bool {
    let session_role = session_role.to_uppercase();
    required.iter().any(|entry| {
        let entry = entry.to_uppercase();
        session_role == entry
            || session_role == format!("ROLE_{entry}")
            || session_role.contains(&entry)
    })
}

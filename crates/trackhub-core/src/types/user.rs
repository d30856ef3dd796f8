//! User account entity as returned by the remote service.

use serde::{Deserialize, Serialize};

/// A user account record.
///
/// Distinct from the resolved session identity: this is the server's view
/// of a user (admin panel listings and the optional `user` field of the
/// login response), not the locally derived session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Server-issued opaque identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Raw role string as stored server-side (e.g. `ROLE_ADMIN`, `PI_LEAD`).
    #[serde(default)]
    pub role: String,
}

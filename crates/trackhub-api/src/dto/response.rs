//! Response DTOs.

use serde::{Deserialize, Serialize};

use trackhub_core::types::UserAccount;

/// Body of a successful sign-in.
///
/// Deployments of the tracker service differ on the field carrying the
/// credential (`token` vs `accessToken`); both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer credential under the legacy field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Bearer credential under the newer field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Token scheme, usually "Bearer".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// The signed-in account, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserAccount>,
}

impl AuthResponse {
    /// The credential, whichever field carried it.
    pub fn credential(&self) -> Option<&str> {
        self.token.as_deref().or(self.access_token.as_deref())
    }
}

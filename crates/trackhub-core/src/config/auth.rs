//! Credential cache configuration.

use serde::{Deserialize, Serialize};

/// Settings for the durable bearer credential cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the file holding the cached bearer credential.
    ///
    /// The credential survives restarts within the same user profile,
    /// the way browser local storage survives page reloads.
    #[serde(default = "default_credential_file")]
    pub credential_file: String,
}

fn default_credential_file() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{home}/.trackhub/credential")
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credential_file: default_credential_file(),
        }
    }
}

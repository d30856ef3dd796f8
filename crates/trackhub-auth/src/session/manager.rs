//! Session lifecycle manager — initialize, login, logout.
//!
//! The manager is the single writer over session state. Views and route
//! guards read the resolved [`Session`]; only the three lifecycle
//! operations here may change it.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use trackhub_core::AppError;

use crate::credential::claims::{Claims, decode_credential};
use crate::credential::store::CredentialStore;
use crate::policy::matcher::is_admin_role;

/// Identity portion of a resolved session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Subject identifier from the credential.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact email (empty when the credential carries none).
    pub email: String,
}

/// The in-memory resolved session.
///
/// A `Session` exists if and only if the last decode of the stored
/// credential succeeded and was unexpired at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Resolved identity.
    pub user: SessionUser,
    /// Canonical role string from the credential claims.
    pub role: String,
    /// The raw credential, attached as the bearer token on API requests.
    credential: String,
}

impl Session {
    fn from_claims(claims: Claims, credential: &str) -> Self {
        Self {
            user: SessionUser {
                id: claims.subject,
                username: claims.username,
                email: claims.email,
            },
            role: claims.role,
            credential: credential.to_string(),
        }
    }

    /// The raw credential backing this session.
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Whether this session carries an administrator role.
    pub fn is_admin(&self) -> bool {
        is_admin_role(&self.role)
    }
}

/// Owns the current session and the credential cache behind it.
#[derive(Debug)]
pub struct SessionManager {
    /// Durable credential cache.
    store: Arc<dyn CredentialStore>,
    /// The resolved session, if any.
    session: Option<Session>,
}

impl SessionManager {
    /// Creates a manager over the given credential store. No session is
    /// resolved until [`initialize`](Self::initialize) or
    /// [`login`](Self::login) runs.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Resolves a session from the cached credential, if one is present,
    /// well-formed, and unexpired.
    ///
    /// A malformed or expired credential is cleared from the cache and
    /// resolves to no session; those failures are never propagated, so a
    /// returning user with a stale credential simply starts logged out.
    pub fn initialize(&mut self) -> Option<&Session> {
        self.initialize_at(Utc::now().timestamp_millis())
    }

    /// [`initialize`](Self::initialize) with an explicit current instant,
    /// in milliseconds since the epoch.
    pub fn initialize_at(&mut self, now_ms: i64) -> Option<&Session> {
        self.session = None;
        let credential = self.store.get()?;

        let resolved = decode_credential(&credential).and_then(|claims| {
            if claims.is_unexpired_at(now_ms) {
                Ok(claims)
            } else {
                Err(AppError::expired("Cached credential has expired"))
            }
        });

        match resolved {
            Ok(claims) => {
                debug!(username = %claims.username, role = %claims.role, "Restored session from cached credential");
                self.session = Some(Session::from_claims(claims, &credential));
            }
            Err(e) => {
                debug!(error = %e, "Discarding cached credential");
                self.store.clear();
            }
        }

        self.session.as_ref()
    }

    /// Accepts a freshly issued credential, persists it, and publishes
    /// the resolved session.
    ///
    /// No expiry check is performed here: the server just issued the
    /// credential, so it is trusted as currently valid. A structurally
    /// invalid credential fails with a decode error, leaving both the
    /// cache and the current session untouched so the sign-in form can
    /// report the failure.
    pub fn login(&mut self, credential: &str) -> Result<&Session, AppError> {
        let claims = decode_credential(credential)?;
        self.store.set(credential);
        info!(username = %claims.username, role = %claims.role, "Signed in");
        Ok(self.session.insert(Session::from_claims(claims, credential)))
    }

    /// Clears the credential cache and resets the session. Idempotent;
    /// never fails.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            info!("Signed out");
        }
        self.store.clear();
    }

    /// The current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a session is currently resolved.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the current session carries an administrator role.
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    /// The raw credential to attach as a bearer token, if signed in.
    pub fn bearer_token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::credential)
    }
}

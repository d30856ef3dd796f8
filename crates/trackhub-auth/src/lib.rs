//! # trackhub-auth
//!
//! Client-side session and authorization derivation for the TrackHub client.
//!
//! ## Modules
//!
//! - `credential` — durable bearer credential cache and payload decoding
//! - `session` — session resolution and lifecycle (initialize, login, logout)
//! - `policy` — route access decisions, role matching, and landing dispatch

pub mod credential;
pub mod policy;
pub mod session;

pub use credential::{Claims, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use policy::{
    AccessRequirement, Decision, Destination, decide, is_admin_role, landing_for, requirement_for,
    role_matches,
};
pub use session::{Session, SessionManager, SessionUser};

//! Session resolution and lifecycle.

pub mod manager;

pub use manager::{Session, SessionManager, SessionUser};

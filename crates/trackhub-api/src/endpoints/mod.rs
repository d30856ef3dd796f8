//! Endpoint groups, one module per resource.

pub mod auth;
pub mod documents;
pub mod milestones;
pub mod projects;

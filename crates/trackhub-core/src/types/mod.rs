//! Domain entity types mirroring the remote tracker service's JSON shapes.

pub mod document;
pub mod milestone;
pub mod project;
pub mod user;

pub use document::Document;
pub use milestone::{Milestone, MilestoneStatus};
pub use project::{Project, ProjectStatus};
pub use user::UserAccount;

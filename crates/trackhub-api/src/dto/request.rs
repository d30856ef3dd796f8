//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use trackhub_core::types::{MilestoneStatus, ProjectStatus};

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Requested role, when the deployment allows self-selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Body for creating or fully updating a project.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    /// Project title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Planned start date.
    pub start_date: NaiveDate,
    /// Planned end date.
    pub end_date: NaiveDate,
}

/// Body for creating or fully updating a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MilestonePayload {
    /// Milestone title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Deadline.
    pub due_date: NaiveDate,
    /// Completion status.
    pub status: MilestoneStatus,
    /// Identifier of the owning project.
    #[validate(length(min = 1, message = "Project is required"))]
    pub project_id: String,
}

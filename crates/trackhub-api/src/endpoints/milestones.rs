//! Milestone CRUD endpoints.

use reqwest::Method;
use validator::Validate;

use trackhub_core::types::Milestone;
use trackhub_core::{AppError, AppResult};

use crate::client::ApiClient;
use crate::dto::request::MilestonePayload;

impl ApiClient {
    /// Lists all milestones visible to the current session.
    pub async fn milestones(&self) -> AppResult<Vec<Milestone>> {
        self.send_json(self.request(Method::GET, "milestones")).await
    }

    /// Lists the milestones of one project.
    pub async fn milestones_for_project(&self, project_id: &str) -> AppResult<Vec<Milestone>> {
        self.send_json(self.request(Method::GET, &format!("milestones/project/{project_id}")))
            .await
    }

    /// Fetches a single milestone by id.
    pub async fn milestone(&self, id: &str) -> AppResult<Milestone> {
        self.send_json(self.request(Method::GET, &format!("milestones/{id}")))
            .await
    }

    /// Creates a milestone.
    pub async fn create_milestone(&self, payload: &MilestonePayload) -> AppResult<Milestone> {
        payload
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.send_json_body(Method::POST, "milestones", payload).await
    }

    /// Replaces a milestone's fields.
    pub async fn update_milestone(
        &self,
        id: &str,
        payload: &MilestonePayload,
    ) -> AppResult<Milestone> {
        payload
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.send_json_body(Method::PUT, &format!("milestones/{id}"), payload)
            .await
    }

    /// Deletes a milestone.
    pub async fn delete_milestone(&self, id: &str) -> AppResult<()> {
        self.send(self.request(Method::DELETE, &format!("milestones/{id}")))
            .await?;
        Ok(())
    }
}

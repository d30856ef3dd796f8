//! Project CRUD endpoints.

use reqwest::Method;
use validator::Validate;

use trackhub_core::types::Project;
use trackhub_core::{AppError, AppResult};

use crate::client::ApiClient;
use crate::dto::request::ProjectPayload;

impl ApiClient {
    /// Lists all projects visible to the current session.
    pub async fn projects(&self) -> AppResult<Vec<Project>> {
        self.send_json(self.request(Method::GET, "projects")).await
    }

    /// Fetches a single project by id.
    pub async fn project(&self, id: &str) -> AppResult<Project> {
        self.send_json(self.request(Method::GET, &format!("projects/{id}")))
            .await
    }

    /// Creates a project.
    pub async fn create_project(&self, payload: &ProjectPayload) -> AppResult<Project> {
        payload
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.send_json_body(Method::POST, "projects", payload).await
    }

    /// Replaces a project's fields.
    pub async fn update_project(&self, id: &str, payload: &ProjectPayload) -> AppResult<Project> {
        payload
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.send_json_body(Method::PUT, &format!("projects/{id}"), payload)
            .await
    }

    /// Deletes a project.
    pub async fn delete_project(&self, id: &str) -> AppResult<()> {
        self.send(self.request(Method::DELETE, &format!("projects/{id}")))
            .await?;
        Ok(())
    }
}

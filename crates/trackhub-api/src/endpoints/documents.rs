//! Document endpoints: listing, multipart upload, binary download.

use bytes::Bytes;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use trackhub_core::types::Document;
use trackhub_core::{AppError, AppResult};

use crate::client::ApiClient;

impl ApiClient {
    /// Lists all documents visible to the current session.
    pub async fn documents(&self) -> AppResult<Vec<Document>> {
        self.send_json(self.request(Method::GET, "documents")).await
    }

    /// Lists the documents of one project.
    pub async fn documents_for_project(&self, project_id: &str) -> AppResult<Vec<Document>> {
        self.send_json(self.request(Method::GET, &format!("documents/project/{project_id}")))
            .await
    }

    /// Uploads a document against a project as multipart form data.
    pub async fn upload_document(
        &self,
        project_id: &str,
        file_name: &str,
        mime_type: &str,
        contents: Vec<u8>,
    ) -> AppResult<Document> {
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| AppError::validation(format!("Invalid MIME type: {e}")))?;
        let form = Form::new()
            .text("projectId", project_id.to_string())
            .part("file", part);

        self.send_json(self.request(Method::POST, "documents/upload").multipart(form))
            .await
    }

    /// Downloads a document's raw bytes.
    pub async fn download_document(&self, id: &str) -> AppResult<Bytes> {
        let response = self
            .send(self.request(Method::GET, &format!("documents/{id}/download")))
            .await?;
        response
            .bytes()
            .await
            .map_err(|e| AppError::network(format!("Download interrupted: {e}")))
    }

    /// Deletes a document.
    pub async fn delete_document(&self, id: &str) -> AppResult<()> {
        self.send(self.request(Method::DELETE, &format!("documents/{id}")))
            .await?;
        Ok(())
    }
}

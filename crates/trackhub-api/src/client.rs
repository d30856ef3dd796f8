//! HTTP client plumbing shared by all endpoint groups.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use trackhub_auth::SessionManager;
use trackhub_core::config::ApiConfig;
use trackhub_core::error::ErrorKind;
use trackhub_core::{AppError, AppResult};

/// Client for the remote tracker service.
///
/// Holds the shared [`SessionManager`]: requests attach the current
/// bearer credential, and a `401` from anywhere forces a logout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Service base URL including the `/api` segment, without trailing slash.
    base_url: String,
    /// Shared session state.
    session: Arc<RwLock<SessionManager>>,
}

impl ApiClient {
    /// Creates a client from configuration over the shared session.
    pub fn new(config: &ApiConfig, session: Arc<RwLock<SessionManager>>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The shared session manager this client reports 401s to.
    pub fn session(&self) -> &Arc<RwLock<SessionManager>> {
        &self.session
    }

    /// Builds a request for a path under the service base URL.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.http.request(method, url)
    }

    /// Sends a request with the bearer credential attached, enforcing the
    /// global 401 policy and mapping error responses to [`AppError`].
    pub(crate) async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let bearer = {
            let session = self.session.read().await;
            session.bearer_token().map(String::from)
        };
        let builder = match bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            AppError::with_source(ErrorKind::Network, "Request to tracker service failed", e)
        })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // The one error policy that crosses component boundaries:
            // any 401 anywhere means the session is no longer honored.
            warn!("Server rejected credential (401); forcing logout");
            self.session.write().await.logout();
            return Err(AppError::authentication(
                "Your session is no longer valid. Please sign in again.",
            ));
        }

        if response.status().is_success() {
            return Ok(response);
        }

        Err(Self::error_from(response).await)
    }

    /// Sends a request and deserializes the JSON response body.
    pub(crate) async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> AppResult<T> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                "Unexpected response body from tracker service",
                e,
            )
        })
    }

    /// Sends a request carrying a JSON body and deserializes the response.
    pub(crate) async fn send_json_body<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send_json(self.request(method, path).json(body)).await
    }

    /// Maps a non-success response to an error, preferring the server's
    /// own `message` field over a generic fallback.
    async fn error_from(response: Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("message")?.as_str().map(String::from))
            .unwrap_or_else(|| generic_message(status).to_string());

        debug!(%status, %message, "Tracker service returned an error");
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::validation(message)
            }
            StatusCode::FORBIDDEN => AppError::authorization(message),
            StatusCode::NOT_FOUND => AppError::not_found(message),
            _ => AppError::internal(message),
        }
    }
}

/// Fallback text when the server supplies no message.
fn generic_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            "The request was rejected. Please check your input."
        }
        StatusCode::FORBIDDEN => "You are not authorized to perform this action.",
        StatusCode::NOT_FOUND => "The requested item was not found.",
        _ => "Something went wrong. Please try again.",
    }
}

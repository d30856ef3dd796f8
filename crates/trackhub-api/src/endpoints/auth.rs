//! Authentication endpoints.

use reqwest::Method;
use validator::Validate;

use trackhub_auth::Session;
use trackhub_core::{AppError, AppResult};

use crate::client::ApiClient;
use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::AuthResponse;

impl ApiClient {
    /// Signs in against the remote service and resolves the session from
    /// the issued credential.
    ///
    /// A structurally invalid credential in an otherwise successful
    /// response propagates as a decode error so the sign-in form can
    /// report it; the previously cached credential is left untouched.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<Session> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let response: AuthResponse = self
            .send_json_body(Method::POST, "auth/login", request)
            .await?;

        let credential = response
            .credential()
            .ok_or_else(|| AppError::serialization("Sign-in response carried no credential"))?
            .to_string();

        let mut session = self.session().write().await;
        Ok(session.login(&credential)?.clone())
    }

    /// Registers a new account. The caller signs in separately afterwards.
    pub async fn signup(&self, request: &SignupRequest) -> AppResult<()> {
        request
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        self.send(self.request(Method::POST, "auth/signup").json(request))
            .await?;
        Ok(())
    }

    /// Signs out: clears the cached credential and resets the session.
    pub async fn logout(&self) {
        self.session().write().await.logout();
    }
}

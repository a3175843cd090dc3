use async_trait::async_trait;
use std::time::Duration;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, User, UserTier, DEFAULT_MAX_CLAIMS},
};
use crate::utils::time;

/// Verifies credentials and returns the signed-in user.
#[async_trait(?Send)]
pub trait Authenticator {
    async fn authenticate(&self, request: LoginRequest) -> Result<User, ApiError>;
}

/// Stand-in for a real backend: waits `latency`, then accepts any credentials.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    latency: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_SIMULATED_LATENCY_MS))
    }
}

#[async_trait(?Send)]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, request: LoginRequest) -> Result<User, ApiError> {
        time::sleep(self.latency).await;
        Ok(simulated_user(&request.email))
    }
}

pub fn simulated_user(email: &str) -> User {
    User {
        id: "1".into(),
        name: display_name_from_email(email),
        email: email.to_string(),
        tier: UserTier::Standard,
        claims_used: 0,
        max_claims: DEFAULT_MAX_CLAIMS,
    }
}

/// Everything before the first `@`.
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<User>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let error = response.json::<ApiError>().await.unwrap_or_else(|_| {
                ApiError::unknown(format!("Login failed with status {}", status.as_u16()))
            });
            Err(error)
        }
    }
}

#[async_trait(?Send)]
impl Authenticator for ApiClient {
    async fn authenticate(&self, request: LoginRequest) -> Result<User, ApiError> {
        self.login(&request).await
    }
}

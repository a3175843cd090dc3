use crate::api::{ApiClient, ApiError, Authenticator, LoginRequest, SimulatedAuthenticator, User};
use crate::config::{AppConfig, AuthMode};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    authenticator: Rc<dyn Authenticator>,
}

impl LoginRepository {
    pub fn new_with_authenticator(authenticator: Rc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let authenticator: Rc<dyn Authenticator> = match config.auth_mode {
            AuthMode::Simulated => Rc::new(SimulatedAuthenticator::new(config.simulated_latency)),
            AuthMode::Http => Rc::new(ApiClient::new_with_base_url(config.api_base_url.clone())),
        };
        Self { authenticator }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        log::debug!("Signing in {}", request.email);
        let result = self.authenticator.authenticate(request).await;
        if let Err(err) = &result {
            log::warn!("Sign-in rejected ({}): {}", err.code, err);
        }
        result
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use async_trait::async_trait;
    use crate::test_support::logging::{capture, records_containing};
    use crate::test_support::timing::assert_waited;
    use std::time::Duration;

    struct Rejecting;

    #[async_trait(?Send)]
    impl Authenticator for Rejecting {
        async fn authenticate(&self, _request: LoginRequest) -> Result<User, ApiError> {
            Err(ApiError::unknown("bad credentials"))
        }
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "alice@example.com".into(),
            password: "anything".into(),
            remember_me: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_config_waits_configured_latency() {
        let config = AppConfig {
            simulated_latency: Duration::from_millis(40),
            ..AppConfig::default()
        };
        let repo = LoginRepository::from_config(&config);
        let start = tokio::time::Instant::now();
        let user = repo.login(request()).await.unwrap();
        assert_waited(start, Duration::from_millis(40));
        assert_eq!(user.name, "alice");
    }

    #[tokio::test]
    async fn rejection_is_passed_through() {
        let repo = LoginRepository::new_with_authenticator(Rc::new(Rejecting));
        let err = repo.login(request()).await.unwrap_err();
        assert_eq!(err.code, "UNKNOWN");
    }

    #[tokio::test(start_paused = true)]
    async fn email_is_only_logged_at_debug_level() {
        capture();
        let repo = LoginRepository::new_with_authenticator(Rc::new(
            SimulatedAuthenticator::new(Duration::from_millis(5)),
        ));
        let request = LoginRequest {
            email: "carol@private.example".into(),
            password: "anything".into(),
            remember_me: false,
        };
        repo.login(request).await.unwrap();

        let records = records_containing("carol@private.example");
        assert!(!records.is_empty());
        assert!(records.iter().all(|(level, _)| *level >= log::Level::Debug));
    }
}

use reqwest::Client;

use crate::config;

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        base.trim_end_matches('/').to_string()
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn explicit_base_url_drops_trailing_slash() {
        let client = ApiClient::new_with_base_url("http://localhost:3000/api/");
        assert_eq!(client.resolved_base_url().await, "http://localhost:3000/api");
    }

    #[tokio::test]
    async fn missing_base_url_uses_config_default() {
        let client = ApiClient::new();
        assert_eq!(client.resolved_base_url().await, config::DEFAULT_API_BASE_URL);
    }
}

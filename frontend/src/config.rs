use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;
pub const PLACEHOLDER_HREF: &str = "#";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Simulated,
    Http,
}

/// One layer of runtime configuration. Every key is optional so layers can be
/// stacked: `window.__CLAIMEASE_ENV`, then `window.__CLAIMEASE_CONFIG`, then
/// `./config.json`. Upper-case keys are accepted for env.js compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "AUTH_MODE")]
    pub auth_mode: Option<AuthMode>,
    #[serde(default, alias = "SIMULATED_LATENCY_MS")]
    pub simulated_latency_ms: Option<u64>,
    #[serde(default, alias = "FORGOT_PASSWORD_URL")]
    pub forgot_password_url: Option<String>,
    #[serde(default, alias = "SIGN_UP_URL")]
    pub sign_up_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_mode: AuthMode,
    pub simulated_latency: Duration,
    pub forgot_password_url: String,
    pub sign_up_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_mode: AuthMode::default(),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
            forgot_password_url: PLACEHOLDER_HREF.to_string(),
            sign_up_url: PLACEHOLDER_HREF.to_string(),
        }
    }
}

impl AppConfig {
    /// Layers are given highest precedence first; the first layer that sets a
    /// key wins and unset keys fall back to the defaults.
    pub fn from_layers(layers: impl IntoIterator<Item = RuntimeConfig>) -> Self {
        let merged = layers
            .into_iter()
            .fold(RuntimeConfig::default(), |acc, layer| RuntimeConfig {
                api_base_url: acc.api_base_url.or(layer.api_base_url),
                auth_mode: acc.auth_mode.or(layer.auth_mode),
                simulated_latency_ms: acc.simulated_latency_ms.or(layer.simulated_latency_ms),
                forgot_password_url: acc.forgot_password_url.or(layer.forgot_password_url),
                sign_up_url: acc.sign_up_url.or(layer.sign_up_url),
            });

        let defaults = Self::default();
        Self {
            api_base_url: non_blank(merged.api_base_url).unwrap_or(defaults.api_base_url),
            auth_mode: merged.auth_mode.unwrap_or(defaults.auth_mode),
            simulated_latency: merged
                .simulated_latency_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_latency),
            forgot_password_url: non_blank(merged.forgot_password_url)
                .unwrap_or(defaults.forgot_password_url),
            sign_up_url: non_blank(merged.sign_up_url).unwrap_or(defaults.sign_up_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
        match serde_json::from_str(&raw) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("Ignoring malformed {}: {}", name, err);
                None
            }
        }
    }

    pub fn env_js() -> Option<RuntimeConfig> {
        // window.__CLAIMEASE_ENV = { API_BASE_URL: "...", AUTH_MODE: "http" }
        read_global("__CLAIMEASE_ENV")
    }

    pub fn window_config() -> Option<RuntimeConfig> {
        // window.__CLAIMEASE_CONFIG = { api_base_url: "..." }
        read_global("__CLAIMEASE_CONFIG")
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn env_js() -> Option<RuntimeConfig> {
        None
    }

    pub fn window_config() -> Option<RuntimeConfig> {
        None
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        None
    }
}

pub async fn load() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let mut layers: Vec<RuntimeConfig> = [globals::env_js(), globals::window_config()]
        .into_iter()
        .flatten()
        .collect();
    if layers.is_empty() {
        if let Some(cfg) = globals::fetch_config_json().await {
            layers.push(cfg);
        }
    }
    let resolved = AppConfig::from_layers(layers);
    log::debug!("Resolved runtime config: {:?}", resolved);
    APP_CONFIG.get_or_init(|| resolved).clone()
}

/// Returns the loaded config, or the defaults when `load` has not finished.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    load().await.api_base_url
}

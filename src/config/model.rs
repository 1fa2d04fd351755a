//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub REST API access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Personal access token. Falls back to `GITHUB_TOKEN` when unset.
    #[serde(default)]
    pub token: Option<String>,
}

impl GithubConfig {
    pub fn resolved_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub initial: i64,
    /// Amount added by the "increase by" key.
    #[serde(default = "default_step")]
    pub step: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial: 0,
            step: default_step(),
        }
    }
}

/// Which async style drives the profile lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectsMode {
    /// A saga reacts to the dispatched request action.
    #[default]
    Saga,
    /// An async action creator dispatches the request and runs the call itself.
    Thunk,
}

impl EffectsMode {
    pub fn label(&self) -> &'static str {
        match self {
            EffectsMode::Saga => "saga",
            EffectsMode::Thunk => "thunk",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default)]
    pub mode: EffectsMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic log output. The terminal belongs to the UI, so logs only go
/// to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}
fn default_user_agent() -> String {
    format!("crabsaga/{}", env!("CARGO_PKG_VERSION"))
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_step() -> i64 {
    5
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabsaga")
        .join("crabsaga.log")
}
fn default_log_level() -> String {
    "info".to_string()
}

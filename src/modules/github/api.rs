//! GitHub REST client: profile lookup and API quota.

use crate::config::GithubConfig;
use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const MAX_USERNAME_LEN: usize = 39;

/// Subset of `GET /users/{username}` that the profile card shows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubProfile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// The `rate` block of `GET /rate_limit`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub reset: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RateLimitBody {
    rate: RateLimit,
}

impl GithubProfile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// Errors from GitHub requests. Messages are captured as strings so the
/// error can sit in state and be cloned into actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("'{0}' not found on GitHub")]
    NotFound(String),

    #[error("GitHub returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turn a non-success response into an [`ApiError`], preferring GitHub's own
/// `message` field when the body has one.
fn status_error(subject: &str, status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound(subject.to_string());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Trim and check a login: ASCII alphanumerics and hyphens, no leading
/// hyphen, at most 39 characters.
pub fn normalize_username(raw: &str) -> Result<String, ApiError> {
    let username = raw.trim();
    let valid = !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && !username.starts_with('-')
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(username.to_string())
    } else {
        Err(ApiError::InvalidUsername(raw.to_string()))
    }
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.resolved_token(),
        })
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, username)
    }

    pub async fn get_user_profile(&self, username: String) -> Result<GithubProfile, ApiError> {
        let username = normalize_username(&username)?;
        self.get_json(&self.profile_url(&username), &username).await
    }

    /// Quota for the current token (or IP when anonymous). Takes no input.
    pub async fn get_rate_limit(&self) -> Result<RateLimit, ApiError> {
        let url = format!("{}/rate_limit", self.base_url);
        let body: RateLimitBody = self.get_json(&url, "rate_limit").await?;
        Ok(body.rate)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, subject: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "GitHub request");

        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(subject, status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

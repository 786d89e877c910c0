//! # Panel Service API Client
//!
//! Blocking HTTP client for the PixelDash service's REST endpoints. All
//! calls here run on background worker threads (see the task modules under
//! `panelui::app`); nothing in this module is async and nothing touches UI
//! state.
//!
//! The mutating endpoints (`POST /api/config`, `POST /api/restart`) answer
//! with a `{success, message?}` envelope even on HTTP error statuses, so
//! those calls parse the body first and only fall back to the raw status
//! code when no envelope came back.

use crate::app::catalog::WidgetDescriptor;
use crate::app::panel_config::PanelConfig;
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Base URL used when neither the environment nor saved UI state names one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable that overrides the backend base URL at startup.
pub const BASE_URL_ENV: &str = "PIXELDASH_API";

/// Success/failure envelope returned by the mutating endpoints.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,

    /// Human-readable detail; absent on most successful responses.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct StatusResponse {
    #[serde(default)]
    running: bool,
}

/// Blocking client bound to one service base URL.
///
/// Cheap to clone; clones share the underlying connection pool, which is how
/// worker threads get their own handle.
#[derive(Debug, Clone)]
pub struct PanelApiClient {
    base_url: String,
    client: Client,
}

impl PanelApiClient {
    /// Creates a client for `base_url`. A trailing slash on the URL is
    /// tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the current configuration document.
    pub fn fetch_config(&self) -> Result<PanelConfig> {
        let url = self.endpoint("/api/config");
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .with_context(|| format!("Failed to parse configuration from {}", url))
    }

    /// Saves a configuration document, returning the service's verdict.
    pub fn save_config(&self, config: &PanelConfig) -> Result<ApiResponse> {
        let url = self.endpoint("/api/config");
        let response = self
            .client
            .post(&url)
            .json(config)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;

        Self::parse_envelope(response, &url)
    }

    /// Fetches the widget descriptor list for the palette.
    pub fn fetch_widgets(&self) -> Result<Vec<WidgetDescriptor>> {
        let url = self.endpoint("/api/widgets");
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .with_context(|| format!("Failed to parse widget list from {}", url))
    }

    /// Asks the service whether the panel renderer is running.
    pub fn fetch_status(&self) -> Result<bool> {
        let url = self.endpoint("/api/status");
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {}", response.status()));
        }

        let status: StatusResponse = response
            .json()
            .with_context(|| format!("Failed to parse status from {}", url))?;
        Ok(status.running)
    }

    /// Requests a service restart.
    pub fn restart_service(&self) -> Result<ApiResponse> {
        let url = self.endpoint("/api/restart");
        let response = self
            .client
            .post(&url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;

        Self::parse_envelope(response, &url)
    }

    /// Reads a `{success, message?}` body, preferring the envelope over the
    /// HTTP status: the service reports failures as `success: false` with a
    /// 500, and the message is worth more than the code.
    fn parse_envelope(response: reqwest::blocking::Response, url: &str) -> Result<ApiResponse> {
        let status = response.status();
        match response.json::<ApiResponse>() {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(anyhow!("HTTP error: {}", status)),
            Err(e) => Err(anyhow!("Malformed response from {}: {}", url, e)),
        }
    }
}

/// The base URL to use at startup: the environment override when present
/// and non-empty, otherwise `fallback`, otherwise the default.
pub fn startup_base_url(fallback: Option<&str>) -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string(),
    }
}

//! Settings file management

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::errors::FormError;
use crate::logs::LogLevel;

/// Command-line front end settings
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[serde(default)]
    pub json_logs: bool,

    /// Backend configuration
    #[serde(default)]
    pub backend: BackendSettings,

    /// Webhook URL configuration
    #[serde(default)]
    pub webhooks: WebhookSettings,

    /// Skip the redeploy confirmation prompt
    #[serde(default)]
    pub assume_yes: bool,
}

impl Settings {
    /// Base URL webhook links are built on; falls back to the backend URL
    pub fn webhook_base_url(&self) -> &str {
        self.webhooks
            .base_url
            .as_deref()
            .unwrap_or(&self.backend.base_url)
    }
}

/// Backend API settings
#[derive(Debug, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL for the backend API
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Access token sent as `X-API-Key`
    #[serde(default, skip_serializing, deserialize_with = "secret_from_str")]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:9000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn secret_from_str<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()).map(SecretString::from))
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Webhook URL settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookSettings {
    /// Public base URL webhook links are built on
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Read settings from a JSON file
pub async fn load_settings(path: &Path) -> Result<Settings, FormError> {
    debug!("Reading settings from {}", path.display());
    let contents = fs::read_to_string(path).await.map_err(|e| {
        FormError::ConfigError(format!("Unable to read {}: {}", path.display(), e))
    })?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

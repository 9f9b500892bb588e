//! Form values and their partial updates

use std::fmt;

use openapi_client::models::Pair;
use serde::{Deserialize, Serialize};

/// Fetch interval used when the stack has no auto-update configured
pub const DEFAULT_FETCH_INTERVAL: &str = "5m";

/// How a stack is kept in sync with its repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mechanism {
    /// Periodic polling
    #[default]
    Interval,

    /// Externally triggered
    Webhook,
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mechanism::Interval => write!(f, "Interval"),
            Mechanism::Webhook => write!(f, "Webhook"),
        }
    }
}

/// Auto-update section of the form.
///
/// Only one of `fetch_interval` / `webhook_url` is active for a given
/// `mechanism`, but both are kept so switching back restores the last value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoUpdateFormConfig {
    pub enabled: bool,
    pub mechanism: Mechanism,
    pub fetch_interval: String,
    pub webhook_url: String,
}

impl Default for AutoUpdateFormConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mechanism: Mechanism::Interval,
            fetch_interval: DEFAULT_FETCH_INTERVAL.to_string(),
            webhook_url: String::new(),
        }
    }
}

/// Editable values of the Git stack form
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub ref_name: String,
    pub repository_authentication: bool,
    pub repository_username: String,
    pub repository_password: String,
    pub env: Vec<Pair>,
    pub auto_update: AutoUpdateFormConfig,
}

// Keeps the password out of logs
impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.repository_password.is_empty() {
            ""
        } else {
            "********"
        };
        f.debug_struct("FormValues")
            .field("ref_name", &self.ref_name)
            .field("repository_authentication", &self.repository_authentication)
            .field("repository_username", &self.repository_username)
            .field("repository_password", &password)
            .field("env", &self.env)
            .field("auto_update", &self.auto_update)
            .finish()
    }
}

/// Top-level partial update of [`FormValues`].
///
/// `auto_update`, when present, replaces the whole section; use
/// [`AutoUpdatePatch`] to change single fields of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub ref_name: Option<String>,
    pub repository_authentication: Option<bool>,
    pub repository_username: Option<String>,
    pub repository_password: Option<String>,
    pub env: Option<Vec<Pair>>,
    pub auto_update: Option<AutoUpdateFormConfig>,
}

impl FormPatch {
    pub fn apply(self, values: &mut FormValues) {
        if let Some(ref_name) = self.ref_name {
            values.ref_name = ref_name;
        }
        if let Some(authentication) = self.repository_authentication {
            values.repository_authentication = authentication;
        }
        if let Some(username) = self.repository_username {
            values.repository_username = username;
        }
        if let Some(password) = self.repository_password {
            values.repository_password = password;
        }
        if let Some(env) = self.env {
            values.env = env;
        }
        if let Some(auto_update) = self.auto_update {
            values.auto_update = auto_update;
        }
    }
}

/// Field-level partial update of [`AutoUpdateFormConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoUpdatePatch {
    pub enabled: Option<bool>,
    pub mechanism: Option<Mechanism>,
    pub fetch_interval: Option<String>,
    pub webhook_url: Option<String>,
}

impl AutoUpdatePatch {
    pub fn apply(self, config: &mut AutoUpdateFormConfig) {
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(mechanism) = self.mechanism {
            config.mechanism = mechanism;
        }
        if let Some(fetch_interval) = self.fetch_interval {
            config.fetch_interval = fetch_interval;
        }
        if let Some(webhook_url) = self.webhook_url {
            config.webhook_url = webhook_url;
        }
    }
}

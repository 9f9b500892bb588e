//! API models
//!
//! Field names follow the backend's PascalCase JSON; environment pairs are
//! the one exception and use lowercase `name`/`value`.

use serde::{Deserialize, Serialize};

/// A single environment variable of a stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Credentials the backend holds for a Git-tracked stack. The password is
/// never served back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GitAuthentication {
    #[serde(default)]
    pub username: String,
}

/// Git tracking configuration of a stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GitConfig {
    #[serde(rename = "URL", default)]
    pub url: String,

    #[serde(default)]
    pub reference_name: String,

    #[serde(default)]
    pub config_file_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<GitAuthentication>,
}

/// Auto-update settings of a stack.
///
/// The backend encodes "disabled" as the absence of both fields; empty
/// strings are normalised to `None` on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoUpdateSettings {
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval: Option<String>,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub webhook: Option<String>,
}

impl AutoUpdateSettings {
    pub fn interval(interval: impl Into<String>) -> Self {
        Self {
            interval: Some(interval.into()),
            webhook: None,
        }
    }

    pub fn webhook(id: impl Into<String>) -> Self {
        Self {
            interval: None,
            webhook: Some(id.into()),
        }
    }

    /// True when neither mechanism is configured
    pub fn is_disabled(&self) -> bool {
        self.interval.is_none() && self.webhook.is_none()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// A deployed stack as served by `GET /stacks/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stack {
    pub id: u64,

    pub endpoint_id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub env: Vec<Pair>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_config: Option<GitConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_update: Option<AutoUpdateSettings>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Pair>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<Pair>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Body of `PUT /stacks/{id}/git/redeploy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackGitRedeployPayload {
    pub repository_reference_name: String,
    pub repository_authentication: bool,
    pub repository_username: String,
    pub repository_password: String,
    pub env: Vec<Pair>,
    pub prune: bool,
}

/// Body of `POST /stacks/{id}/git`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackGitUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_update: Option<AutoUpdateSettings>,
    pub env: Vec<Pair>,
    pub repository_reference_name: String,
    pub repository_authentication: bool,
    pub repository_username: String,
    pub repository_password: String,
}

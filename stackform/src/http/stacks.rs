//! Stack API client

use async_trait::async_trait;
use openapi_client::models::{
    AutoUpdateSettings, Pair, Stack, StackGitRedeployPayload, StackGitUpdatePayload,
};
use tracing::info;

use crate::errors::FormError;
use crate::http::client::HttpClient;
use crate::models::form::{AutoUpdateFormConfig, FormValues, Mechanism};
use crate::models::stack::StackRef;
use crate::services::webhook::webhook_id;
use crate::services::StackService;

impl HttpClient {
    /// Fetch a stack with its Git and auto-update configuration
    pub async fn get_stack(&self, stack: &StackRef) -> Result<Stack, FormError> {
        let path = format!("/stacks/{}", stack.id);
        self.get(&path, &endpoint_query(stack)).await
    }
}

#[async_trait]
impl StackService for HttpClient {
    async fn redeploy_stack(
        &self,
        stack: &StackRef,
        env: &[Pair],
        prune: bool,
        values: &FormValues,
    ) -> Result<(), FormError> {
        info!("Redeploying stack {} from {}", stack.id, values.ref_name);
        let path = format!("/stacks/{}/git/redeploy", stack.id);
        let payload = redeploy_payload(env, prune, values);
        self.put_empty(&path, &endpoint_query(stack), &payload).await
    }

    async fn save_stack_settings(
        &self,
        stack: &StackRef,
        env: &[Pair],
        values: &FormValues,
    ) -> Result<(), FormError> {
        info!("Saving Git settings of stack {}", stack.id);
        let path = format!("/stacks/{}/git", stack.id);
        let payload = update_payload(env, values)?;
        self.post_empty(&path, &endpoint_query(stack), &payload).await
    }
}

fn endpoint_query(stack: &StackRef) -> Vec<(&'static str, String)> {
    vec![("endpointId", stack.endpoint_id.to_string())]
}

/// Credentials only travel when authentication is switched on
fn credentials(values: &FormValues) -> (String, String) {
    if values.repository_authentication {
        (
            values.repository_username.clone(),
            values.repository_password.clone(),
        )
    } else {
        (String::new(), String::new())
    }
}

pub fn redeploy_payload(env: &[Pair], prune: bool, values: &FormValues) -> StackGitRedeployPayload {
    let (username, password) = credentials(values);
    StackGitRedeployPayload {
        repository_reference_name: values.ref_name.clone(),
        repository_authentication: values.repository_authentication,
        repository_username: username,
        repository_password: password,
        env: env.to_vec(),
        prune,
    }
}

pub fn update_payload(
    env: &[Pair],
    values: &FormValues,
) -> Result<StackGitUpdatePayload, FormError> {
    let (username, password) = credentials(values);
    Ok(StackGitUpdatePayload {
        auto_update: auto_update_settings(&values.auto_update)?,
        env: env.to_vec(),
        repository_reference_name: values.ref_name.clone(),
        repository_authentication: values.repository_authentication,
        repository_username: username,
        repository_password: password,
    })
}

/// Server-side shape of the auto-update section; `None` disables it
pub fn auto_update_settings(
    config: &AutoUpdateFormConfig,
) -> Result<Option<AutoUpdateSettings>, FormError> {
    if !config.enabled {
        return Ok(None);
    }

    match config.mechanism {
        Mechanism::Interval => {
            if config.fetch_interval.trim().is_empty() {
                return Err(FormError::ValidationError(
                    "Fetch interval is required".to_string(),
                ));
            }
            Ok(Some(AutoUpdateSettings::interval(config.fetch_interval.trim())))
        }
        Mechanism::Webhook => {
            let id = webhook_id(&config.webhook_url).ok_or_else(|| {
                FormError::ValidationError(format!(
                    "Webhook URL carries no identifier: {:?}",
                    config.webhook_url
                ))
            })?;
            Ok(Some(AutoUpdateSettings::webhook(id)))
        }
    }
}

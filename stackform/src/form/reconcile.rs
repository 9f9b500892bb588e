//! Initial form state derived from the stack's server-side configuration

use std::sync::Arc;

use openapi_client::models::{AutoUpdateSettings, Stack};
use tracing::{debug, warn};

use crate::models::form::{AutoUpdateFormConfig, FormValues, Mechanism};
use crate::models::stack::FormModel;
use crate::services::{IdGenerator, WebhookUrls};

/// Result of reconciling a stack into form values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialForm {
    pub values: FormValues,

    /// The stack already has credentials; the password field starts blank
    pub is_edit: bool,
}

/// Derives form defaults from what the backend persisted
pub struct AutoUpdateReconciler {
    ids: Arc<dyn IdGenerator>,
    webhooks: Arc<dyn WebhookUrls>,
}

impl AutoUpdateReconciler {
    pub fn new(ids: Arc<dyn IdGenerator>, webhooks: Arc<dyn WebhookUrls>) -> Self {
        Self { ids, webhooks }
    }

    /// Build the full initial form for `stack`
    pub fn reconcile(&self, stack: &Stack, model: &FormModel) -> InitialForm {
        let mut values = FormValues {
            ref_name: model.reference_name.clone(),
            env: stack.env.clone(),
            auto_update: self.reconcile_auto_update(stack.auto_update.as_ref()),
            ..Default::default()
        };

        let mut is_edit = false;
        if let Some(authentication) = stack
            .git_config
            .as_ref()
            .and_then(|git| git.authentication.as_ref())
        {
            values.repository_username = authentication.username.clone();
            values.repository_authentication = true;
            is_edit = true;
        }

        InitialForm { values, is_edit }
    }

    /// Map the server's presence-encoded settings onto an explicit config.
    ///
    /// An interval wins when both an interval and a webhook are set. A webhook
    /// URL is always filled in so switching mechanism needs no round trip.
    pub fn reconcile_auto_update(
        &self,
        source: Option<&AutoUpdateSettings>,
    ) -> AutoUpdateFormConfig {
        let mut config = AutoUpdateFormConfig::default();

        let source = source.filter(|s| !s.is_disabled());
        let interval = source.and_then(|s| s.interval.as_deref()).filter(|s| !s.is_empty());
        let webhook = source.and_then(|s| s.webhook.as_deref()).filter(|s| !s.is_empty());

        match (interval, webhook) {
            (Some(interval), webhook) => {
                if webhook.is_some() {
                    warn!("Stack has both an interval and a webhook; using the interval");
                }
                config.enabled = true;
                config.mechanism = Mechanism::Interval;
                config.fetch_interval = interval.to_string();
            }
            (None, Some(webhook)) => {
                config.enabled = true;
                config.mechanism = Mechanism::Webhook;
                config.webhook_url = self.webhooks.webhook_url_for(webhook);
            }
            (None, None) => {}
        }

        if config.webhook_url.is_empty() {
            let id = self.ids.generate_random_id();
            debug!("Generated webhook id {}", id);
            config.webhook_url = self.webhooks.webhook_url_for(&id);
        }

        config
    }
}

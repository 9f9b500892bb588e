//! Stack webhook URLs

use url::Url;

use crate::errors::FormError;
use crate::services::WebhookUrls;

/// Builds `{base}/stacks/webhooks/{id}` links
#[derive(Debug, Clone)]
pub struct StackWebhooks {
    base_url: String,
}

impl StackWebhooks {
    pub fn new(base_url: &str) -> Result<Self, FormError> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(FormError::ConfigError(format!(
                "Webhook base URL cannot be a base: {}",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl WebhookUrls for StackWebhooks {
    fn webhook_url_for(&self, id: &str) -> String {
        format!("{}/stacks/webhooks/{}", self.base_url, id)
    }
}

/// Webhook identifier carried by a webhook URL (its last path segment)
pub fn webhook_id(webhook_url: &str) -> Option<String> {
    let segment = match Url::parse(webhook_url) {
        Ok(url) => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        Err(_) => webhook_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .map(str::to_string),
    };
    segment.filter(|s| !s.is_empty())
}

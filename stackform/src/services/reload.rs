//! View reload against the backend

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::app::summary::print_summary;
use crate::errors::FormError;
use crate::form::reconcile::{AutoUpdateReconciler, InitialForm};
use crate::http::client::HttpClient;
use crate::models::stack::{FormModel, StackRef};
use crate::services::{IdGenerator, ViewReloader, WebhookUrls};

/// Re-fetches the stack after a redeploy and shows it as a freshly opened
/// form would
pub struct StackReloader {
    http_client: Arc<HttpClient>,
    stack: StackRef,
    reconciler: AutoUpdateReconciler,
}

impl StackReloader {
    pub fn new(
        http_client: Arc<HttpClient>,
        stack: StackRef,
        ids: Arc<dyn IdGenerator>,
        webhooks: Arc<dyn WebhookUrls>,
    ) -> Self {
        Self {
            http_client,
            stack,
            reconciler: AutoUpdateReconciler::new(ids, webhooks),
        }
    }

    /// Fetch the stack and rebuild the form values from it
    pub async fn refresh(&self) -> Result<InitialForm, FormError> {
        let stack = self.http_client.get_stack(&self.stack).await?;
        info!("Reloaded stack {} ({})", stack.id, stack.name);
        Ok(self.reconciler.reconcile(&stack, &FormModel::from_stack(&stack)))
    }
}

#[async_trait]
impl ViewReloader for StackReloader {
    async fn reload_current_view(&self) -> Result<(), FormError> {
        let refreshed = self.refresh().await?;
        print_summary(self.stack.id, &refreshed.values, false);
        Ok(())
    }
}

//! Collaborators the form core calls out to
//!
//! Every seam is a trait so the orchestration can run against the real
//! backend and terminal, or against fakes in tests.

pub mod confirm;
pub mod env;
pub mod ids;
pub mod notify;
pub mod reload;
pub mod webhook;

use std::sync::Arc;

use async_trait::async_trait;
use openapi_client::models::Pair;

use crate::errors::FormError;
use crate::models::form::FormValues;
use crate::models::stack::StackRef;

/// What a confirmation dialog shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

/// Asks the user to confirm a destructive action
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// `false` when declined or dismissed
    async fn confirm(&self, options: &ConfirmOptions) -> bool;
}

/// Backend operations on a Git-tracked stack
#[async_trait]
pub trait StackService: Send + Sync {
    /// Pull the latest revision and redeploy
    async fn redeploy_stack(
        &self,
        stack: &StackRef,
        env: &[Pair],
        prune: bool,
        values: &FormValues,
    ) -> Result<(), FormError>;

    /// Persist Git and auto-update settings without redeploying
    async fn save_stack_settings(
        &self,
        stack: &StackRef,
        env: &[Pair],
        values: &FormValues,
    ) -> Result<(), FormError>;
}

/// Refreshes everything the current view shows
#[async_trait]
pub trait ViewReloader: Send + Sync {
    async fn reload_current_view(&self) -> Result<(), FormError>;
}

/// Produces opaque identifiers for new webhooks
pub trait IdGenerator: Send + Sync {
    fn generate_random_id(&self) -> String;
}

/// Turns a webhook identifier into the URL a Git provider calls
pub trait WebhookUrls: Send + Sync {
    fn webhook_url_for(&self, id: &str) -> String;
}

/// User-visible outcome reporting
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);

    fn notify_failure(&self, title: &str, error: &FormError, message: &str);
}

/// Strips malformed or incomplete environment entries
pub trait EnvSanitizer: Send + Sync {
    fn sanitize_env(&self, entries: &[Pair]) -> Vec<Pair>;
}

/// The full set of collaborators a form instance uses
#[derive(Clone)]
pub struct Services {
    pub confirmer: Arc<dyn Confirmer>,
    pub stacks: Arc<dyn StackService>,
    pub reloader: Arc<dyn ViewReloader>,
    pub notifier: Arc<dyn Notifier>,
    pub ids: Arc<dyn IdGenerator>,
    pub webhooks: Arc<dyn WebhookUrls>,
    pub sanitizer: Arc<dyn EnvSanitizer>,
}

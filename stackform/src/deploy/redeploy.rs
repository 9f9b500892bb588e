//! Redeploy from the latest repository revision

use std::sync::Arc;

use tracing::{error, info};

use crate::deploy::Outcome;
use crate::errors::FormError;
use crate::form::guard::{Operation, OperationGuard};
use crate::models::form::FormValues;
use crate::models::stack::StackRef;
use crate::services::{
    ConfirmOptions, Confirmer, EnvSanitizer, Notifier, Services, StackService, ViewReloader,
};

/// Failure message shown when a redeploy fails
pub const REDEPLOY_FAILED: &str = "Failed redeploying stack";

/// Warning shown before local drift is overwritten
pub fn redeploy_confirmation() -> ConfirmOptions {
    ConfirmOptions {
        title: "Are you sure?".to_string(),
        message: "Any changes to this stack made locally will be overridden by the \
                  definition in git and may cause a service interruption. Do you wish to continue"
            .to_string(),
        confirm_label: "Update".to_string(),
    }
}

/// Confirm, redeploy, then reload the view
pub struct RedeployOrchestrator {
    confirmer: Arc<dyn Confirmer>,
    stacks: Arc<dyn StackService>,
    reloader: Arc<dyn ViewReloader>,
    notifier: Arc<dyn Notifier>,
    sanitizer: Arc<dyn EnvSanitizer>,
    guard: OperationGuard,
}

impl RedeployOrchestrator {
    pub fn new(services: &Services, guard: OperationGuard) -> Self {
        Self {
            confirmer: services.confirmer.clone(),
            stacks: services.stacks.clone(),
            reloader: services.reloader.clone(),
            notifier: services.notifier.clone(),
            sanitizer: services.sanitizer.clone(),
            guard,
        }
    }

    /// Redeploy `stack` with `values`.
    ///
    /// The local snapshot is left alone on success; the reload replaces the
    /// whole view.
    pub async fn redeploy(&self, stack: &StackRef, values: &FormValues) -> Outcome {
        if !self.confirmer.confirm(&redeploy_confirmation()).await {
            info!("Redeploy of stack {} declined", stack.id);
            return Outcome::Declined;
        }

        let _in_flight = self.guard.begin(Operation::Redeploy);

        match self.run(stack, values).await {
            Ok(()) => {
                info!("Stack {} redeployed", stack.id);
                Outcome::Completed
            }
            Err(err) => {
                error!("Redeploy of stack {} failed: {}", stack.id, err);
                self.notifier.notify_failure("Failure", &err, REDEPLOY_FAILED);
                Outcome::Failed(err)
            }
        }
    }

    async fn run(&self, stack: &StackRef, values: &FormValues) -> Result<(), FormError> {
        let env = self.sanitizer.sanitize_env(&values.env);
        self.stacks.redeploy_stack(stack, &env, false, values).await?;
        self.reloader.reload_current_view().await
    }
}

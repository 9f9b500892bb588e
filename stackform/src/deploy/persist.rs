//! Save Git settings without redeploying

use std::sync::Arc;

use tracing::{error, info};

use crate::deploy::Outcome;
use crate::form::guard::{Operation, OperationGuard};
use crate::form::store::FormStateStore;
use crate::models::stack::StackRef;
use crate::services::{EnvSanitizer, Notifier, Services, StackService};

pub const SAVE_SUCCEEDED: &str = "Save stack settings successfully";
pub const SAVE_FAILED: &str = "Unable to save stack settings";

/// Persists the form and moves the saved snapshot forward on success
pub struct SettingsPersister {
    stacks: Arc<dyn StackService>,
    notifier: Arc<dyn Notifier>,
    sanitizer: Arc<dyn EnvSanitizer>,
    guard: OperationGuard,
}

impl SettingsPersister {
    pub fn new(services: &Services, guard: OperationGuard) -> Self {
        Self {
            stacks: services.stacks.clone(),
            notifier: services.notifier.clone(),
            sanitizer: services.sanitizer.clone(),
            guard,
        }
    }

    /// Save the store's current values. The snapshot is only committed when
    /// the backend accepts them.
    pub async fn save(&self, stack: &StackRef, store: &mut FormStateStore) -> Outcome {
        let _in_flight = self.guard.begin(Operation::Save);

        let env = self.sanitizer.sanitize_env(&store.values().env);
        let result = self
            .stacks
            .save_stack_settings(stack, &env, store.values())
            .await;

        match result {
            Ok(()) => {
                store.commit_snapshot();
                info!("Settings of stack {} saved", stack.id);
                self.notifier.notify_success(SAVE_SUCCEEDED);
                Outcome::Completed
            }
            Err(err) => {
                error!("Saving settings of stack {} failed: {}", stack.id, err);
                self.notifier.notify_failure("Failure", &err, SAVE_FAILED);
                Outcome::Failed(err)
            }
        }
    }
}

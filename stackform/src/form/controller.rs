//! The Git stack redeploy form

use openapi_client::models::{Pair, Stack};
use tracing::debug;

use crate::deploy::persist::SettingsPersister;
use crate::deploy::redeploy::RedeployOrchestrator;
use crate::deploy::Outcome;
use crate::form::guard::{OperationGuard, OperationState};
use crate::form::reconcile::AutoUpdateReconciler;
use crate::form::store::FormStateStore;
use crate::models::form::{AutoUpdatePatch, FormPatch, FormValues};
use crate::models::stack::{FormModel, StackRef};
use crate::services::Services;

/// One open form for one stack.
///
/// Operations are driven one at a time by the owner; the guard only tells
/// the owner when submitting is allowed.
pub struct StackGitForm {
    stack: StackRef,
    store: FormStateStore,
    guard: OperationGuard,
    is_edit: bool,
    redeployer: RedeployOrchestrator,
    persister: SettingsPersister,
}

impl StackGitForm {
    /// Open the form on `stack`, reconciling its persisted configuration
    pub fn init(stack: &Stack, model: &FormModel, services: &Services) -> Self {
        let reconciler = AutoUpdateReconciler::new(services.ids.clone(), services.webhooks.clone());
        let initial = reconciler.reconcile(stack, model);
        debug!("Initial form values for stack {}: {:?}", stack.id, initial.values);

        let guard = OperationGuard::new();
        Self {
            stack: StackRef::from(stack),
            store: FormStateStore::new(initial.values),
            is_edit: initial.is_edit,
            redeployer: RedeployOrchestrator::new(services, guard.clone()),
            persister: SettingsPersister::new(services, guard.clone()),
            guard,
        }
    }

    pub fn stack(&self) -> &StackRef {
        &self.stack
    }

    pub fn values(&self) -> &FormValues {
        self.store.values()
    }

    pub fn saved_values(&self) -> &FormValues {
        self.store.saved()
    }

    /// Whether the stack came with credentials
    pub fn is_edit(&self) -> bool {
        self.is_edit
    }

    /// Handle observing the in-flight flags
    pub fn guard(&self) -> OperationGuard {
        self.guard.clone()
    }

    pub fn operation_state(&self) -> OperationState {
        self.guard.state()
    }

    pub fn on_change(&mut self, partial: FormPatch) {
        self.store.patch(partial);
    }

    pub fn on_change_ref(&mut self, value: impl Into<String>) {
        self.on_change(FormPatch {
            ref_name: Some(value.into()),
            ..Default::default()
        });
    }

    pub fn on_change_auto_update(&mut self, partial: AutoUpdatePatch) {
        self.store.patch_auto_update(partial);
    }

    pub fn handle_env_var_change(&mut self, entries: Vec<Pair>) {
        self.store.set_env(entries);
    }

    pub fn is_submit_button_disabled(&self) -> bool {
        !self.guard.can_submit()
    }

    /// Unsaved changes against the last successful save
    pub fn save_settings_form_changed(&self) -> bool {
        self.store.is_dirty()
    }

    /// Confirm and redeploy from the repository
    pub async fn submit(&self) -> Outcome {
        self.redeployer.redeploy(&self.stack, self.store.values()).await
    }

    /// Persist settings without redeploying
    pub async fn save_git_settings(&mut self) -> Outcome {
        self.persister.save(&self.stack, &mut self.store).await
    }
}

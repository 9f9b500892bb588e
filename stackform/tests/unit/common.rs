//! Fakes for the form's collaborators

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use openapi_client::models::{AutoUpdateSettings, Pair, Stack};

use stackform::errors::FormError;
use stackform::form::controller::StackGitForm;
use stackform::form::guard::{OperationGuard, OperationState};
use stackform::models::form::FormValues;
use stackform::models::stack::{FormModel, StackRef};
use stackform::services::env::RemoveInvalidEnvVars;
use stackform::services::{
    ConfirmOptions, Confirmer, IdGenerator, Notifier, Services, StackService, ViewReloader,
    WebhookUrls,
};

/// Records the in-flight flags each time a collaborator is entered
#[derive(Default)]
pub struct Probe {
    guard: Mutex<Option<OperationGuard>>,
    seen: Mutex<Vec<(&'static str, OperationState)>>,
}

impl Probe {
    pub fn watch(&self, guard: OperationGuard) {
        *self.guard.lock().unwrap() = Some(guard);
    }

    fn record(&self, step: &'static str) {
        if let Some(guard) = self.guard.lock().unwrap().as_ref() {
            self.seen.lock().unwrap().push((step, guard.state()));
        }
    }

    pub fn seen(&self) -> Vec<(&'static str, OperationState)> {
        self.seen.lock().unwrap().clone()
    }
}

pub struct FakeConfirmer {
    pub answer: AtomicBool,
    pub asked: Mutex<Vec<ConfirmOptions>>,
    probe: Arc<Probe>,
}

#[async_trait]
impl Confirmer for FakeConfirmer {
    async fn confirm(&self, options: &ConfirmOptions) -> bool {
        self.probe.record("confirm");
        self.asked.lock().unwrap().push(options.clone());
        self.answer.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Redeploy {
        stack: StackRef,
        env: Vec<Pair>,
        prune: bool,
        values: FormValues,
    },
    Save {
        stack: StackRef,
        env: Vec<Pair>,
        values: FormValues,
    },
}

pub struct FakeStacks {
    pub fail_redeploy: AtomicBool,
    pub fail_save: AtomicBool,
    pub calls: Mutex<Vec<Call>>,
    probe: Arc<Probe>,
}

#[async_trait]
impl StackService for FakeStacks {
    async fn redeploy_stack(
        &self,
        stack: &StackRef,
        env: &[Pair],
        prune: bool,
        values: &FormValues,
    ) -> Result<(), FormError> {
        self.probe.record("redeploy");
        tokio::task::yield_now().await;
        self.calls.lock().unwrap().push(Call::Redeploy {
            stack: *stack,
            env: env.to_vec(),
            prune,
            values: values.clone(),
        });
        if self.fail_redeploy.load(Ordering::SeqCst) {
            return Err(FormError::BackendError("500: git fetch failed".to_string()));
        }
        Ok(())
    }

    async fn save_stack_settings(
        &self,
        stack: &StackRef,
        env: &[Pair],
        values: &FormValues,
    ) -> Result<(), FormError> {
        self.probe.record("save");
        tokio::task::yield_now().await;
        self.calls.lock().unwrap().push(Call::Save {
            stack: *stack,
            env: env.to_vec(),
            values: values.clone(),
        });
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(FormError::BackendError("409: conflict".to_string()));
        }
        Ok(())
    }
}

pub struct FakeReloader {
    pub fail: AtomicBool,
    pub reloads: AtomicUsize,
    probe: Arc<Probe>,
}

#[async_trait]
impl ViewReloader for FakeReloader {
    async fn reload_current_view(&self) -> Result<(), FormError> {
        self.probe.record("reload");
        self.reloads.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(FormError::BackendError("404: stack not found".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub failures: Mutex<Vec<(String, String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn notify_failure(&self, title: &str, error: &FormError, message: &str) {
        self.failures.lock().unwrap().push((
            title.to_string(),
            error.to_string(),
            message.to_string(),
        ));
    }
}

#[derive(Default)]
pub struct SeqIds {
    next: AtomicUsize,
}

impl IdGenerator for SeqIds {
    fn generate_random_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub struct Hooks;

impl WebhookUrls for Hooks {
    fn webhook_url_for(&self, id: &str) -> String {
        format!("https://hooks.example.com/api/stacks/webhooks/{}", id)
    }
}

pub struct Harness {
    pub probe: Arc<Probe>,
    pub confirmer: Arc<FakeConfirmer>,
    pub stacks: Arc<FakeStacks>,
    pub reloader: Arc<FakeReloader>,
    pub notifier: Arc<RecordingNotifier>,
    pub services: Services,
}

impl Harness {
    pub fn new() -> Self {
        let probe = Arc::new(Probe::default());
        let confirmer = Arc::new(FakeConfirmer {
            answer: AtomicBool::new(true),
            asked: Mutex::new(Vec::new()),
            probe: probe.clone(),
        });
        let stacks = Arc::new(FakeStacks {
            fail_redeploy: AtomicBool::new(false),
            fail_save: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
            probe: probe.clone(),
        });
        let reloader = Arc::new(FakeReloader {
            fail: AtomicBool::new(false),
            reloads: AtomicUsize::new(0),
            probe: probe.clone(),
        });
        let notifier = Arc::new(RecordingNotifier::default());

        let services = Services {
            confirmer: confirmer.clone(),
            stacks: stacks.clone(),
            reloader: reloader.clone(),
            notifier: notifier.clone(),
            ids: Arc::new(SeqIds::default()),
            webhooks: Arc::new(Hooks),
            sanitizer: Arc::new(RemoveInvalidEnvVars),
        };

        Self {
            probe,
            confirmer,
            stacks,
            reloader,
            notifier,
            services,
        }
    }

    /// Open a form and start watching its flags
    pub fn open(&self, stack: &Stack, model: &FormModel) -> StackGitForm {
        let form = StackGitForm::init(stack, model, &self.services);
        self.probe.watch(form.guard());
        form
    }

    pub fn calls(&self) -> Vec<Call> {
        self.stacks.calls.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<(String, String, String)> {
        self.notifier.failures.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notifier.successes.lock().unwrap().clone()
    }
}

/// Stack 1 on endpoint 2 with `A=1` and a 5 minute interval
pub fn interval_stack() -> Stack {
    Stack {
        id: 1,
        endpoint_id: 2,
        name: "web".to_string(),
        env: vec![Pair::new("A", "1")],
        git_config: None,
        auto_update: Some(AutoUpdateSettings::interval("5m")),
    }
}

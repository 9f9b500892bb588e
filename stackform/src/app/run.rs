//! One form session against the backend

use std::sync::Arc;

use tracing::info;

use crate::app::options::{Action, CliOptions, FormEdits};
use crate::app::summary::print_summary;
use crate::deploy::Outcome;
use crate::errors::FormError;
use crate::form::controller::StackGitForm;
use crate::http::client::HttpClient;
use crate::models::form::{AutoUpdatePatch, FormPatch, Mechanism};
use crate::models::stack::{FormModel, StackRef};
use crate::services::confirm::{AssumeYes, PromptConfirmer};
use crate::services::env::RemoveInvalidEnvVars;
use crate::services::ids::UuidGenerator;
use crate::services::notify::TerminalNotifier;
use crate::services::reload::StackReloader;
use crate::services::webhook::StackWebhooks;
use crate::services::{Confirmer, EnvSanitizer, IdGenerator, Services, WebhookUrls};
use crate::storage::settings::Settings;

/// Open the form on the requested stack, apply the edits and run the action.
///
/// Returns `false` when the action ran and failed.
pub async fn run(options: CliOptions, mut settings: Settings) -> Result<bool, FormError> {
    let stack_ref = match (options.stack_id, options.endpoint_id) {
        (Some(id), Some(endpoint_id)) => StackRef::new(id, endpoint_id),
        _ => {
            return Err(FormError::ConfigError(
                "Both --stack=<id> and --endpoint=<id> are required".to_string(),
            ))
        }
    };

    let http_client = Arc::new(HttpClient::new(
        &settings.backend.base_url,
        settings.backend.api_key.take(),
        settings.backend.timeout(),
    )?);

    info!("Fetching stack {} from {}", stack_ref.id, http_client.base_url());
    let stack = http_client.get_stack(&stack_ref).await?;

    let confirmer: Arc<dyn Confirmer> = if options.assume_yes || settings.assume_yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(PromptConfirmer)
    };
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);
    let webhooks: Arc<dyn WebhookUrls> = Arc::new(StackWebhooks::new(settings.webhook_base_url())?);
    let services = Services {
        confirmer,
        stacks: http_client.clone(),
        reloader: Arc::new(StackReloader::new(
            http_client.clone(),
            stack_ref,
            ids.clone(),
            webhooks.clone(),
        )),
        notifier: Arc::new(TerminalNotifier),
        ids,
        webhooks,
        sanitizer: Arc::new(RemoveInvalidEnvVars),
    };

    let mut form = StackGitForm::init(&stack, &FormModel::from_stack(&stack), &services);
    apply_edits(&mut form, &options.edits, services.sanitizer.as_ref());
    print_summary(form.stack().id, form.values(), form.save_settings_form_changed());

    let outcome = match options.action {
        Action::Show => return Ok(true),
        Action::Redeploy => form.submit().await,
        Action::Save => form.save_git_settings().await,
    };

    Ok(!matches!(outcome, Outcome::Failed(_)))
}

/// Feed command-line edits through the form's change handlers
pub fn apply_edits(form: &mut StackGitForm, edits: &FormEdits, sanitizer: &dyn EnvSanitizer) {
    if let Some(ref_name) = &edits.ref_name {
        form.on_change_ref(ref_name.clone());
    }

    if edits.username.is_some() || edits.password.is_some() {
        form.on_change(FormPatch {
            repository_authentication: Some(true),
            repository_username: edits.username.clone(),
            repository_password: edits.password.clone(),
            ..Default::default()
        });
    }

    if !edits.env.is_empty() {
        form.handle_env_var_change(sanitizer.sanitize_env(&edits.env));
    }

    if let Some(interval) = &edits.interval {
        form.on_change_auto_update(AutoUpdatePatch {
            enabled: Some(true),
            mechanism: Some(Mechanism::Interval),
            fetch_interval: Some(interval.clone()),
            ..Default::default()
        });
    } else if edits.webhook {
        form.on_change_auto_update(AutoUpdatePatch {
            enabled: Some(true),
            mechanism: Some(Mechanism::Webhook),
            ..Default::default()
        });
    } else if edits.disable_auto_update {
        form.on_change_auto_update(AutoUpdatePatch {
            enabled: Some(false),
            ..Default::default()
        });
    }
}

//! Form initialization and editing

use openapi_client::models::{AutoUpdateSettings, GitAuthentication, GitConfig, Pair};

use stackform::models::form::{
    AutoUpdateFormConfig, AutoUpdatePatch, FormPatch, FormValues, Mechanism,
};
use stackform::models::stack::{FormModel, StackRef};

use crate::common::{interval_stack, Harness};

#[test]
fn test_init_from_interval_stack() {
    let harness = Harness::new();
    let form = harness.open(&interval_stack(), &FormModel::new("main"));

    assert_eq!(form.stack(), &StackRef::new(1, 2));
    assert_eq!(
        form.values(),
        &FormValues {
            ref_name: "main".to_string(),
            env: vec![Pair::new("A", "1")],
            auto_update: AutoUpdateFormConfig {
                enabled: true,
                mechanism: Mechanism::Interval,
                fetch_interval: "5m".to_string(),
                webhook_url: "https://hooks.example.com/api/stacks/webhooks/id-1".to_string(),
            },
            ..Default::default()
        }
    );
    assert!(!form.save_settings_form_changed());
    assert!(!form.is_submit_button_disabled());
    assert!(!form.is_edit());
}

#[test]
fn test_init_from_webhook_stack() {
    let harness = Harness::new();
    let mut stack = interval_stack();
    stack.auto_update = Some(AutoUpdateSettings::webhook("f00d"));

    let form = harness.open(&stack, &FormModel::new("main"));
    let auto_update = &form.values().auto_update;
    assert!(auto_update.enabled);
    assert_eq!(auto_update.mechanism, Mechanism::Webhook);
    assert_eq!(
        auto_update.webhook_url,
        "https://hooks.example.com/api/stacks/webhooks/f00d"
    );
}

#[test]
fn test_init_without_auto_update() {
    let harness = Harness::new();
    let mut stack = interval_stack();
    stack.auto_update = None;

    let form = harness.open(&stack, &FormModel::new("main"));
    let auto_update = &form.values().auto_update;
    assert!(!auto_update.enabled);
    assert_eq!(auto_update.mechanism, Mechanism::Interval);
    assert_eq!(auto_update.fetch_interval, "5m");
    assert!(!auto_update.webhook_url.is_empty());
    assert!(!form.save_settings_form_changed());
}

#[test]
fn test_init_with_existing_credentials() {
    let harness = Harness::new();
    let mut stack = interval_stack();
    stack.git_config = Some(GitConfig {
        url: "https://example.com/repo.git".to_string(),
        reference_name: "refs/heads/main".to_string(),
        config_file_path: "docker-compose.yml".to_string(),
        authentication: Some(GitAuthentication {
            username: "bob".to_string(),
        }),
    });

    let form = harness.open(&stack, &FormModel::from_stack(&stack));
    assert!(form.is_edit());
    assert_eq!(form.values().ref_name, "refs/heads/main");
    assert!(form.values().repository_authentication);
    assert_eq!(form.values().repository_username, "bob");
    assert_eq!(form.values().repository_password, "");
    assert!(!form.save_settings_form_changed());
}

#[test]
fn test_edits_mark_form_changed() {
    let harness = Harness::new();
    let mut form = harness.open(&interval_stack(), &FormModel::new("main"));

    form.on_change_ref("dev");
    assert!(form.save_settings_form_changed());
    assert_eq!(form.values().env, vec![Pair::new("A", "1")]);

    form.on_change_ref("main");
    assert!(!form.save_settings_form_changed());
}

#[test]
fn test_auto_update_edits_are_non_destructive() {
    let harness = Harness::new();
    let mut form = harness.open(&interval_stack(), &FormModel::new("main"));
    let generated = form.values().auto_update.webhook_url.clone();

    form.on_change_auto_update(AutoUpdatePatch {
        mechanism: Some(Mechanism::Webhook),
        ..Default::default()
    });
    form.on_change_auto_update(AutoUpdatePatch {
        mechanism: Some(Mechanism::Interval),
        fetch_interval: Some("30s".to_string()),
        ..Default::default()
    });

    let auto_update = &form.values().auto_update;
    assert_eq!(auto_update.webhook_url, generated);
    assert_eq!(auto_update.fetch_interval, "30s");
    assert!(auto_update.enabled);
    assert_eq!(form.values().ref_name, "main");
}

#[test]
fn test_env_changes() {
    let harness = Harness::new();
    let mut form = harness.open(&interval_stack(), &FormModel::new("main"));

    form.handle_env_var_change(vec![Pair::new("A", "1"), Pair::new("B", "2")]);
    assert!(form.save_settings_form_changed());

    form.handle_env_var_change(vec![Pair::new("A", "1")]);
    assert!(!form.save_settings_form_changed());
}

#[test]
fn test_password_is_not_exempt() {
    let harness = Harness::new();
    let mut form = harness.open(&interval_stack(), &FormModel::new("main"));

    form.on_change(FormPatch {
        repository_password: Some("hunter2".to_string()),
        ..Default::default()
    });
    assert!(form.save_settings_form_changed());
    assert_eq!(form.saved_values().repository_password, "");
}

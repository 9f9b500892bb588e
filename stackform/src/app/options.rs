//! Command-line options

use std::path::PathBuf;

use openapi_client::models::Pair;

use crate::errors::FormError;

/// What to do once the form is filled in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    /// Only report unsaved changes
    #[default]
    Show,

    /// Redeploy from the repository
    Redeploy,

    /// Save settings without redeploying
    Save,
}

/// Edits applied to the form before the action runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEdits {
    pub ref_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,

    /// Replaces the stack's environment when non-empty
    pub env: Vec<Pair>,

    pub interval: Option<String>,
    pub webhook: bool,
    pub disable_auto_update: bool,
}

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub settings_path: Option<PathBuf>,
    pub stack_id: Option<u64>,
    pub endpoint_id: Option<u64>,
    pub edits: FormEdits,
    pub action: Action,
    pub assume_yes: bool,
    pub version: bool,
}

impl CliOptions {
    /// Parse `--key=value` and `--flag` arguments (program name excluded)
    pub fn parse<I>(args: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();

        for arg in args {
            let (key, value) = match arg.split_once('=') {
                Some((key, value)) => (key.trim_start_matches('-'), Some(value)),
                None if arg.starts_with("--") => (arg.trim_start_matches('-'), None),
                None => {
                    return Err(FormError::ConfigError(format!(
                        "Unexpected argument: {}",
                        arg
                    )))
                }
            };

            match (key, value) {
                ("settings", Some(v)) => options.settings_path = Some(PathBuf::from(v)),
                ("stack", Some(v)) => options.stack_id = Some(parse_id("stack", v)?),
                ("endpoint", Some(v)) => options.endpoint_id = Some(parse_id("endpoint", v)?),
                ("ref", Some(v)) => options.edits.ref_name = Some(v.to_string()),
                ("username", Some(v)) => options.edits.username = Some(v.to_string()),
                ("password", Some(v)) => options.edits.password = Some(v.to_string()),
                ("env", Some(v)) => options.edits.env.push(parse_env(v)?),
                ("interval", Some(v)) => options.edits.interval = Some(v.to_string()),
                ("webhook", None) => options.edits.webhook = true,
                ("no-auto-update", None) => options.edits.disable_auto_update = true,
                ("redeploy", None) => options.set_action(Action::Redeploy)?,
                ("save", None) => options.set_action(Action::Save)?,
                ("yes", None) => options.assume_yes = true,
                ("version", None) => options.version = true,
                _ => {
                    return Err(FormError::ConfigError(format!(
                        "Unknown or malformed option: {}",
                        arg
                    )))
                }
            }
        }

        let auto_update_edits = [
            options.edits.interval.is_some(),
            options.edits.webhook,
            options.edits.disable_auto_update,
        ];
        if auto_update_edits.iter().filter(|set| **set).count() > 1 {
            return Err(FormError::ConfigError(
                "--interval, --webhook and --no-auto-update are mutually exclusive".to_string(),
            ));
        }

        Ok(options)
    }

    fn set_action(&mut self, action: Action) -> Result<(), FormError> {
        if self.action != Action::Show && self.action != action {
            return Err(FormError::ConfigError(
                "--redeploy and --save are mutually exclusive".to_string(),
            ));
        }
        self.action = action;
        Ok(())
    }
}

fn parse_id(name: &str, value: &str) -> Result<u64, FormError> {
    value
        .parse()
        .map_err(|_| FormError::ConfigError(format!("Invalid --{} id: {}", name, value)))
}

fn parse_env(value: &str) -> Result<Pair, FormError> {
    match value.split_once('=') {
        Some((name, value)) => Ok(Pair::new(name, value)),
        None => Err(FormError::ConfigError(format!(
            "Expected --env=NAME=VALUE, got: {}",
            value
        ))),
    }
}

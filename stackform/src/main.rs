//! Stackform - Entry Point
//!
//! Edit, save and redeploy the Git settings of a deployed stack.

use std::env;
use std::process::ExitCode;

use stackform::app::options::CliOptions;
use stackform::app::run::run;
use stackform::logs::{init_logging, LogOptions};
use stackform::storage::settings::{load_settings, Settings};
use stackform::utils::version_info;

use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let options = match CliOptions::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: stackform --stack=<id> --endpoint=<id> [--settings=<file>] [--ref=<name>] [--username=<user> --password=<pass>] [--env=NAME=VALUE]... [--interval=<5m> | --webhook | --no-auto-update] [--redeploy | --save] [--yes]");
            return ExitCode::from(2);
        }
    };

    // Print version and exit
    if options.version {
        match serde_json::to_string_pretty(&version_info()) {
            Ok(version) => println!("{version}"),
            Err(e) => eprintln!("{e}"),
        }
        return ExitCode::SUCCESS;
    }

    let settings = match &options.settings_path {
        Some(path) => match load_settings(path).await {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Unable to read settings file: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let log_options = LogOptions {
        log_level: settings.log_level,
        json_format: settings.json_logs,
    };
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(options, settings).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

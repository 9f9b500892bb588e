//! Terminal notifications

use colored::Colorize;
use tracing::{error, info};

use crate::errors::FormError;
use crate::services::Notifier;

/// Prints outcomes to the terminal and mirrors them as log events
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        info!("{}", message);
        println!("{} {}", "✔".green().bold(), message);
    }

    fn notify_failure(&self, title: &str, error: &FormError, message: &str) {
        error!("{}: {} ({})", title, message, error);
        eprintln!(
            "{} {}: {}\n  {}",
            "✖".red().bold(),
            title.red().bold(),
            message,
            error.to_string().dimmed()
        );
    }
}

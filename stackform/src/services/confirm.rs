//! Confirmation prompts

use async_trait::async_trait;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::services::{ConfirmOptions, Confirmer};

/// Asks on stdin; anything but yes declines
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirmer;

#[async_trait]
impl Confirmer for PromptConfirmer {
    async fn confirm(&self, options: &ConfirmOptions) -> bool {
        let prompt = format!(
            "{}\n{}\n{} [y/N] ",
            options.title.yellow().bold(),
            options.message,
            options.confirm_label
        );

        let mut stdout = tokio::io::stdout();
        if let Err(e) = stdout.write_all(prompt.as_bytes()).await {
            warn!("Unable to show confirmation prompt: {}", e);
            return false;
        }
        let _ = stdout.flush().await;

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(_) => is_yes(&line),
            Err(e) => {
                warn!("Unable to read confirmation answer: {}", e);
                false
            }
        }
    }
}

/// Confirms everything; for non-interactive runs
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

#[async_trait]
impl Confirmer for AssumeYes {
    async fn confirm(&self, options: &ConfirmOptions) -> bool {
        warn!("Auto-confirming: {}", options.title);
        true
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

//! Human-readable form summary

use colored::Colorize;

use crate::models::form::{FormValues, Mechanism};

/// Render what the form currently holds for `stack_id`
pub fn render_summary(stack_id: u64, values: &FormValues, unsaved: bool) -> String {
    let mut lines = vec![
        format!("{} {}", "Stack".bold(), stack_id),
        format!("  reference:   {}", values.ref_name),
    ];
    if values.repository_authentication {
        lines.push(format!("  username:    {}", values.repository_username));
    }
    lines.push(format!("  env vars:    {}", values.env.len()));

    let auto_update = &values.auto_update;
    let mode = if !auto_update.enabled {
        "disabled".dimmed().to_string()
    } else {
        match auto_update.mechanism {
            Mechanism::Interval => format!("every {}", auto_update.fetch_interval),
            Mechanism::Webhook => format!("webhook {}", auto_update.webhook_url),
        }
    };
    lines.push(format!("  auto update: {}", mode));

    if unsaved {
        lines.push(format!("  {}", "unsaved changes".yellow()));
    }
    lines.join("\n")
}

pub fn print_summary(stack_id: u64, values: &FormValues, unsaved: bool) {
    println!("{}", render_summary(stack_id, values, unsaved));
}

//! Environment variable sanitation

use openapi_client::models::Pair;
use tracing::debug;

use crate::services::EnvSanitizer;

/// Drops entries without a usable name
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveInvalidEnvVars;

impl EnvSanitizer for RemoveInvalidEnvVars {
    fn sanitize_env(&self, entries: &[Pair]) -> Vec<Pair> {
        let kept: Vec<Pair> = entries
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .cloned()
            .collect();

        if kept.len() != entries.len() {
            debug!(
                "Dropped {} invalid environment entries",
                entries.len() - kept.len()
            );
        }
        kept
    }
}

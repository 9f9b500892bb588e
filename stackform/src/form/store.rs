//! Form state with its last-saved snapshot

use openapi_client::models::Pair;

use crate::models::form::{AutoUpdatePatch, FormPatch, FormValues};

/// Current form values plus the snapshot they are compared against
#[derive(Debug, Clone)]
pub struct FormStateStore {
    values: FormValues,
    saved: FormValues,
}

impl FormStateStore {
    /// Create a store whose snapshot equals `values`
    pub fn new(values: FormValues) -> Self {
        Self {
            saved: values.clone(),
            values,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Last successfully persisted values
    pub fn saved(&self) -> &FormValues {
        &self.saved
    }

    /// Merge top-level fields; a present `auto_update` replaces the section
    pub fn patch(&mut self, partial: FormPatch) {
        partial.apply(&mut self.values);
    }

    /// Merge into the auto-update section only
    pub fn patch_auto_update(&mut self, partial: AutoUpdatePatch) {
        partial.apply(&mut self.values.auto_update);
    }

    /// Replace the environment wholesale. Entries are expected to be
    /// sanitized already.
    pub fn set_env(&mut self, entries: Vec<Pair>) {
        self.values.env = entries;
    }

    /// True when any field, password and env order included, differs from
    /// the snapshot
    pub fn is_dirty(&self) -> bool {
        self.values != self.saved
    }

    /// Take a new snapshot of the current values
    pub fn commit_snapshot(&mut self) {
        self.saved = self.values.clone();
    }
}

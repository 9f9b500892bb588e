//! Stack identity and form inputs

use openapi_client::models::Stack;
use serde::{Deserialize, Serialize};

/// Identifies a deployed stack; fixed for the lifetime of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackRef {
    pub id: u64,
    pub endpoint_id: u64,
}

impl StackRef {
    pub fn new(id: u64, endpoint_id: u64) -> Self {
        Self { id, endpoint_id }
    }
}

impl From<&Stack> for StackRef {
    fn from(stack: &Stack) -> Self {
        Self {
            id: stack.id,
            endpoint_id: stack.endpoint_id,
        }
    }
}

/// Git model the form is opened with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormModel {
    pub reference_name: String,
}

impl FormModel {
    pub fn new(reference_name: impl Into<String>) -> Self {
        Self {
            reference_name: reference_name.into(),
        }
    }

    /// Model taken from the stack's own Git configuration
    pub fn from_stack(stack: &Stack) -> Self {
        Self {
            reference_name: stack
                .git_config
                .as_ref()
                .map(|git| git.reference_name.clone())
                .unwrap_or_default(),
        }
    }
}

//! In-flight tracking for the redeploy and save operations

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The two operations that must not overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Redeploy,
}

/// Point-in-time view of the in-flight flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationState {
    pub saving: bool,
    pub redeploying: bool,
}

#[derive(Debug, Default)]
struct Flags {
    saving: AtomicBool,
    redeploying: AtomicBool,
}

impl Flags {
    fn flag(&self, operation: Operation) -> &AtomicBool {
        match operation {
            Operation::Save => &self.saving,
            Operation::Redeploy => &self.redeploying,
        }
    }
}

/// Shared in-flight flags of one form.
///
/// Clones observe the same flags. The guard does not queue or reject; it
/// only exposes whether submitting is currently allowed.
#[derive(Debug, Clone, Default)]
pub struct OperationGuard {
    flags: Arc<Flags>,
}

impl OperationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        let state = self.state();
        !(state.saving || state.redeploying)
    }

    pub fn is_saving(&self) -> bool {
        self.flags.saving.load(Ordering::SeqCst)
    }

    pub fn is_redeploying(&self) -> bool {
        self.flags.redeploying.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> OperationState {
        OperationState {
            saving: self.is_saving(),
            redeploying: self.is_redeploying(),
        }
    }

    /// Raise the flag of `operation` until the returned token is dropped
    pub fn begin(&self, operation: Operation) -> InFlight {
        self.flags.flag(operation).store(true, Ordering::SeqCst);
        InFlight {
            flags: self.flags.clone(),
            operation,
        }
    }
}

/// Clears its operation's flag when dropped
#[derive(Debug)]
#[must_use = "the flag is cleared as soon as the token is dropped"]
pub struct InFlight {
    flags: Arc<Flags>,
    operation: Operation,
}

impl InFlight {
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flags.flag(self.operation).store(false, Ordering::SeqCst);
    }
}

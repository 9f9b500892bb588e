//! Redeploy and save-settings orchestration

pub mod persist;
pub mod redeploy;

use crate::errors::FormError;

/// How an orchestrated operation ended. Failures have already been
/// reported to the user when this is returned.
#[derive(Debug)]
pub enum Outcome {
    /// The user declined the confirmation; nothing happened
    Declined,

    /// The backend accepted the operation
    Completed,

    /// The operation failed
    Failed(FormError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Outcome::Declined)
    }

    pub fn error(&self) -> Option<&FormError> {
        match self {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

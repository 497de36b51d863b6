//! Two-step confirmation for destructive actions such as clearing scores.

use serde::{Deserialize, Serialize};

/// Where a two-step confirmation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClearConfirmation {
    #[default]
    Idle,
    /// First request seen, waiting for the second
    Confirming,
}

impl ClearConfirmation {
    /// Register a request. Returns true when the action should run now.
    pub fn request(&mut self) -> bool {
        match self {
            ClearConfirmation::Idle => {
                *self = ClearConfirmation::Confirming;
                false
            }
            ClearConfirmation::Confirming => {
                *self = ClearConfirmation::Idle;
                true
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = ClearConfirmation::Idle;
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, ClearConfirmation::Confirming)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ClearConfirmation::Idle)
    }
}

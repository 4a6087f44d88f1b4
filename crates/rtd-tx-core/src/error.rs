use thiserror::Error;

use crate::ports::PortError;
use crate::state_machine::TransitionError;

/// Why a submitted transaction was not confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionFailure {
    /// The ledger answered with a status other than `success`.
    Reported {
        status: String,
        error: Option<String>,
    },
    MissingEffects,
    MissingStatus,
}

#[derive(Debug, Error)]
pub enum ConfirmationError {
    #[error("transaction signing failed: {0}")]
    Signing(#[source] PortError),
    #[error("transaction submission failed: {0}")]
    Submission(#[source] PortError),
    #[error("Transaction execution failed.")]
    ExecutionFailed(ExecutionFailure),
    #[error(transparent)]
    IllegalTransition(#[from] TransitionError),
}

impl ConfirmationError {
    pub fn is_signing(&self) -> bool {
        matches!(self, Self::Signing(_))
    }

    pub fn is_submission(&self) -> bool {
        matches!(self, Self::Submission(_))
    }

    pub fn is_execution_failed(&self) -> bool {
        matches!(self, Self::ExecutionFailed(_))
    }
}

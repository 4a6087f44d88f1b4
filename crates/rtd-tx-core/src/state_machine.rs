use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationState {
    Idle,
    Signing,
    Signed,
    Submitting,
    Completed,
    Failed,
}

impl ConfirmationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationAction {
    Sign,
    SignSucceeded,
    SignFailed,
    Submit,
    SubmitFailed,
    ExecutionSucceeded,
    ExecutionFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    pub from: ConfirmationState,
    pub to: ConfirmationState,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal confirmation transition: {from:?} --{action:?}-->")]
pub struct TransitionError {
    pub from: ConfirmationState,
    pub action: ConfirmationAction,
}

pub fn transition(
    from: ConfirmationState,
    action: ConfirmationAction,
) -> Result<(ConfirmationState, StateTransition), TransitionError> {
    use ConfirmationAction as A;
    use ConfirmationState as S;

    let (to, reason) = match (from, action) {
        (S::Idle, A::Sign) => (S::Signing, "signature requested"),
        (S::Signing, A::SignSucceeded) => (S::Signed, "wallet returned signature"),
        (S::Signing, A::SignFailed) => (S::Failed, "signing failed"),
        (S::Signed, A::Submit) => (S::Submitting, "signed transaction submitted"),
        (S::Submitting, A::SubmitFailed) => (S::Failed, "submission failed"),
        (S::Submitting, A::ExecutionSucceeded) => (S::Completed, "ledger reported success"),
        (S::Submitting, A::ExecutionFailed) => (S::Failed, "ledger reported failure"),
        _ => return Err(TransitionError { from, action }),
    };

    Ok((to, StateTransition { from, to, reason }))
}

use tracing::{debug, warn};

use crate::domain::{ExecutionOptions, ExecutionResult, TransactionIntent, SUCCESS_STATUS};
use crate::error::{ConfirmationError, ExecutionFailure};
use crate::ports::{ExecutorPort, SignerPort};
use crate::state_machine::{
    transition, ConfirmationAction, ConfirmationState, StateTransition, TransitionError,
};

/// Outcome of a confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub digest: Option<String>,
    pub transitions: Vec<StateTransition>,
}

/// Signs an intent with the wallet, submits it to the node and reduces the
/// response to confirmed or failed. Holds no state between calls.
pub struct TransactionExecutor<S, E>
where
    S: SignerPort,
    E: ExecutorPort,
{
    pub signer: S,
    pub executor: E,
}

impl<S, E> TransactionExecutor<S, E>
where
    S: SignerPort,
    E: ExecutorPort,
{
    pub fn new(signer: S, executor: E) -> Self {
        Self { signer, executor }
    }

    /// Returns `true` once the ledger reports `success`; every other outcome
    /// is an error.
    pub async fn sign_and_execute(
        &self,
        intent: TransactionIntent,
        options: Option<ExecutionOptions>,
    ) -> Result<bool, ConfirmationError> {
        self.confirm(intent, options).await.map(|_| true)
    }

    pub async fn confirm(
        &self,
        intent: TransactionIntent,
        options: Option<ExecutionOptions>,
    ) -> Result<Confirmation, ConfirmationError> {
        let options = options.unwrap_or_default();
        let mut walk = Walk::default();

        walk.step(ConfirmationAction::Sign)?;
        debug!(intent_len = intent.as_bytes().len(), "requesting transaction signature");
        let signed = match self.signer.sign_transaction(&intent).await {
            Ok(signed) => {
                walk.step(ConfirmationAction::SignSucceeded)?;
                signed
            }
            Err(e) => {
                walk.step(ConfirmationAction::SignFailed)?;
                warn!(error = %e, "transaction signing failed");
                return Err(ConfirmationError::Signing(e));
            }
        };
        drop(intent);

        walk.step(ConfirmationAction::Submit)?;
        debug!(show_effects = options.show_effects, "submitting signed transaction");
        let result = match self
            .executor
            .execute_transaction_block(signed, &options)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                walk.step(ConfirmationAction::SubmitFailed)?;
                warn!(error = %e, "transaction submission failed");
                return Err(ConfirmationError::Submission(e));
            }
        };

        match inspect_result(&result) {
            Ok(()) => {
                walk.step(ConfirmationAction::ExecutionSucceeded)?;
                debug!(digest = ?result.digest, "transaction confirmed");
                Ok(Confirmation {
                    digest: result.digest,
                    transitions: walk.transitions,
                })
            }
            Err(failure) => {
                walk.step(ConfirmationAction::ExecutionFailed)?;
                warn!(digest = ?result.digest, ?failure, "transaction execution failed");
                Err(ConfirmationError::ExecutionFailed(failure))
            }
        }
    }
}

/// Only the exact tag `success` counts as applied.
pub fn inspect_result(result: &ExecutionResult) -> Result<(), ExecutionFailure> {
    let effects = result
        .effects
        .as_ref()
        .ok_or(ExecutionFailure::MissingEffects)?;
    let status = effects
        .status
        .as_ref()
        .ok_or(ExecutionFailure::MissingStatus)?;
    match status.status.as_deref() {
        Some(SUCCESS_STATUS) => Ok(()),
        Some(other) => Err(ExecutionFailure::Reported {
            status: other.to_owned(),
            error: status.error.clone(),
        }),
        None => Err(ExecutionFailure::MissingStatus),
    }
}

#[derive(Debug)]
struct Walk {
    state: ConfirmationState,
    transitions: Vec<StateTransition>,
}

impl Default for Walk {
    fn default() -> Self {
        Self {
            state: ConfirmationState::Idle,
            transitions: Vec::with_capacity(4),
        }
    }
}

impl Walk {
    fn step(&mut self, action: ConfirmationAction) -> Result<(), TransitionError> {
        let (next, record) = transition(self.state, action)?;
        self.state = next;
        self.transitions.push(record);
        Ok(())
    }
}

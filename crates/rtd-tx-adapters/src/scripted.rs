use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use rtd_tx_core::{
    ExecutionOptions, ExecutionResult, ExecutorPort, PortError, SignedTransaction,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSubmission {
    pub bytes: String,
    pub signature: String,
    pub options: ExecutionOptions,
}

/// In-memory executor answering from a queue. An empty queue answers with a
/// transport error.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: Mutex<VecDeque<Result<ExecutionResult, PortError>>>,
    submissions: Mutex<Vec<RecordedSubmission>>,
}

impl ScriptedExecutor {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn push_status(&self, status: &str) -> Result<(), PortError> {
        self.push(Ok(ExecutionResult::with_status(status)))
    }

    pub fn push(&self, response: Result<ExecutionResult, PortError>) -> Result<(), PortError> {
        self.responses
            .lock()
            .map_err(|e| PortError::Transport(format!("scripted lock poisoned: {e}")))?
            .push_back(response);
        Ok(())
    }

    pub fn submissions(&self) -> Result<Vec<RecordedSubmission>, PortError> {
        self.submissions
            .lock()
            .map(|g| g.clone())
            .map_err(|e| PortError::Transport(format!("scripted lock poisoned: {e}")))
    }
}

#[async_trait]
impl ExecutorPort for ScriptedExecutor {
    async fn execute_transaction_block(
        &self,
        signed: SignedTransaction,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, PortError> {
        self.submissions
            .lock()
            .map_err(|e| PortError::Transport(format!("scripted lock poisoned: {e}")))?
            .push(RecordedSubmission {
                bytes: signed.bytes,
                signature: signed.signature,
                options: options.clone(),
            });
        self.responses
            .lock()
            .map_err(|e| PortError::Transport(format!("scripted lock poisoned: {e}")))?
            .pop_front()
            .unwrap_or_else(|| Err(PortError::Transport("no scripted response queued".to_owned())))
    }
}

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use rtd_tx_core::{
    ExecutionOptions, ExecutionResult, ExecutorPort, PortError, SignedTransaction, SignerPort,
    TransactionIntent,
};

#[derive(Debug)]
pub struct StubSigner {
    calls: AtomicUsize,
    reject: Option<PortError>,
}

impl StubSigner {
    pub fn approving() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reject: None,
        }
    }

    pub fn failing(err: PortError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reject: Some(err),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignerPort for StubSigner {
    async fn sign_transaction(
        &self,
        _intent: &TransactionIntent,
    ) -> Result<SignedTransaction, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reject {
            Some(err) => Err(err.clone()),
            None => Ok(SignedTransaction {
                bytes: "0xAA".to_owned(),
                signature: "0xBB".to_owned(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct StubExecutor {
    responses: Mutex<VecDeque<Result<ExecutionResult, PortError>>>,
    submissions: Mutex<Vec<(SignedTransaction, ExecutionOptions)>>,
}

impl StubExecutor {
    pub fn answering(result: ExecutionResult) -> Self {
        let stub = Self::default();
        stub.push(Ok(result));
        stub
    }

    pub fn push(&self, response: Result<ExecutionResult, PortError>) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.submissions.lock().expect("submissions lock").len()
    }

    pub fn last_submission(&self) -> Option<(String, String, ExecutionOptions)> {
        self.submissions
            .lock()
            .expect("submissions lock")
            .last()
            .map(|(signed, options)| {
                (
                    signed.bytes.clone(),
                    signed.signature.clone(),
                    options.clone(),
                )
            })
    }
}

#[async_trait]
impl ExecutorPort for StubExecutor {
    async fn execute_transaction_block(
        &self,
        signed: SignedTransaction,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, PortError> {
        self.submissions
            .lock()
            .expect("submissions lock")
            .push((signed, options.clone()));
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(PortError::Transport("no scripted response".to_owned())))
    }
}

pub fn intent(tag: u8) -> TransactionIntent {
    TransactionIntent::new(vec![tag; 8])
}

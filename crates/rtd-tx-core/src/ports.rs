use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ExecutionOptions, ExecutionResult, SignedTransaction, TransactionIntent};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("capability unavailable: {0}")]
    Unavailable(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Wallet side of the flow. May suspend for as long as the user takes to
/// approve.
#[async_trait]
pub trait SignerPort: Send + Sync {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
    ) -> Result<SignedTransaction, PortError>;
}

/// Node side of the flow.
#[async_trait]
pub trait ExecutorPort: Send + Sync {
    async fn execute_transaction_block(
        &self,
        signed: SignedTransaction,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, PortError>;
}

#[async_trait]
impl<'a, T: SignerPort + ?Sized> SignerPort for &'a T {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
    ) -> Result<SignedTransaction, PortError> {
        (**self).sign_transaction(intent).await
    }
}

#[async_trait]
impl<T: SignerPort + ?Sized> SignerPort for Arc<T> {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
    ) -> Result<SignedTransaction, PortError> {
        (**self).sign_transaction(intent).await
    }
}

#[async_trait]
impl<'a, T: ExecutorPort + ?Sized> ExecutorPort for &'a T {
    async fn execute_transaction_block(
        &self,
        signed: SignedTransaction,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, PortError> {
        (**self).execute_transaction_block(signed, options).await
    }
}

#[async_trait]
impl<T: ExecutorPort + ?Sized> ExecutorPort for Arc<T> {
    async fn execute_transaction_block(
        &self,
        signed: SignedTransaction,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, PortError> {
        (**self).execute_transaction_block(signed, options).await
    }
}

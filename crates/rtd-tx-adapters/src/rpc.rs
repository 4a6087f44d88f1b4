use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use rtd_tx_core::{
    ExecuteRequestType, ExecutionOptions, ExecutionResult, ExecutorPort, PortError,
    SignedTransaction,
};

use crate::jsonrpc::{JsonRpcClient, RpcCallError};
use crate::AdapterConfig;

pub const EXECUTE_METHOD: &str = "rtd_executeTransactionBlock";

/// Submits signed transactions to a full node over JSON-RPC.
#[derive(Debug, Clone)]
pub struct RpcExecutorAdapter {
    client: JsonRpcClient,
    request_type: Option<ExecuteRequestType>,
}

impl RpcExecutorAdapter {
    pub fn with_config(config: &AdapterConfig) -> Result<Self, PortError> {
        let client = JsonRpcClient::new(config.rpc_url(), config.rpc_timeout_ms)
            .map_err(|e| PortError::Unavailable(format!("rpc executor: {e}")))?;
        Ok(Self {
            client,
            request_type: config.request_type,
        })
    }

    pub fn url(&self) -> &str {
        self.client.url()
    }

    fn params(
        &self,
        signed: SignedTransaction,
        options: &ExecutionOptions,
    ) -> Result<Value, PortError> {
        let encode = |e: serde_json::Error| {
            PortError::Protocol(format!("execute params encode failed: {e}"))
        };
        let mut params = vec![
            Value::String(signed.bytes),
            Value::Array(vec![Value::String(signed.signature)]),
            serde_json::to_value(options).map_err(encode)?,
        ];
        if let Some(request_type) = self.request_type {
            params.push(serde_json::to_value(request_type).map_err(encode)?);
        }
        Ok(Value::Array(params))
    }
}

#[async_trait]
impl ExecutorPort for RpcExecutorAdapter {
    async fn execute_transaction_block(
        &self,
        signed: SignedTransaction,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, PortError> {
        let params = self.params(signed, options)?;
        let result = self
            .client
            .call(EXECUTE_METHOD, params)
            .await
            .map_err(|e| match e {
                RpcCallError::Remote { .. } | RpcCallError::MissingResult => {
                    PortError::Protocol(format!("execute failed: {e}"))
                }
                other => PortError::Transport(format!("execute failed: {other}")),
            })?;
        let result = ExecutionResult::from_value(result);
        debug!(digest = ?result.digest, status = ?result.status_tag(), "execute response");
        Ok(result)
    }
}

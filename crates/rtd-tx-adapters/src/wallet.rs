use async_trait::async_trait;
use tracing::debug;

use rtd_tx_core::{PortError, SignedTransaction, SignerPort, TransactionIntent};

use crate::jsonrpc::{JsonRpcClient, RpcCallError};
use crate::AdapterConfig;

pub const SIGN_METHOD: &str = "rtd_signTransaction";

/// EIP-1193 style code a wallet returns when the user declines.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Forwards signing requests to a wallet bridge speaking JSON-RPC. The call
/// stays pending until the user answers in the wallet.
#[derive(Debug, Clone)]
pub struct WalletProxySigner {
    client: JsonRpcClient,
}

impl WalletProxySigner {
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Result<Self, PortError> {
        let client = JsonRpcClient::new(url, timeout_ms)
            .map_err(|e| PortError::Unavailable(format!("wallet proxy: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_config(config: &AdapterConfig) -> Result<Self, PortError> {
        let url = config
            .wallet_proxy_url
            .as_deref()
            .ok_or_else(|| PortError::Unavailable("wallet proxy URL not configured".to_owned()))?;
        Self::new(url, config.rpc_timeout_ms)
    }
}

#[async_trait]
impl SignerPort for WalletProxySigner {
    async fn sign_transaction(
        &self,
        intent: &TransactionIntent,
    ) -> Result<SignedTransaction, PortError> {
        let params = serde_json::json!({ "transaction": intent.to_base64() });
        let result = self
            .client
            .call(SIGN_METHOD, params)
            .await
            .map_err(|e| match e {
                RpcCallError::Remote { code, message } if code == USER_REJECTED_CODE => {
                    PortError::Rejected(message)
                }
                RpcCallError::Unreachable { .. } => PortError::Unavailable(e.to_string()),
                RpcCallError::Remote { .. } | RpcCallError::MissingResult => {
                    PortError::Protocol(format!("wallet proxy: {e}"))
                }
                other => PortError::Transport(format!("wallet proxy: {other}")),
            })?;
        let signed: SignedTransaction = serde_json::from_value(result)
            .map_err(|e| PortError::Protocol(format!("wallet proxy signature decode failed: {e}")))?;
        debug!(signature_len = signed.signature.len(), "wallet returned signature");
        Ok(signed)
    }
}

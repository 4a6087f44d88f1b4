//! Explicit network + node client handle. Everything that needs the node is
//! handed this value instead of looking one up globally.

use std::sync::Arc;

use tracing::info;

use rtd_tx_core::{PortError, SignerPort, TransactionExecutor};

use crate::{AdapterConfig, Network, RpcExecutorAdapter, WalletProxySigner};

#[derive(Debug, Clone)]
pub struct RtdClientContext {
    network: Network,
    executor: Arc<RpcExecutorAdapter>,
}

impl RtdClientContext {
    pub fn new(config: &AdapterConfig) -> Result<Self, PortError> {
        let executor = RpcExecutorAdapter::with_config(config)?;
        info!(network = %config.network, url = executor.url(), "rtd client ready");
        Ok(Self {
            network: config.network,
            executor: Arc::new(executor),
        })
    }

    pub fn for_network(network: Network) -> Result<Self, PortError> {
        Self::new(&AdapterConfig::for_network(network))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn executor(&self) -> Arc<RpcExecutorAdapter> {
        Arc::clone(&self.executor)
    }

    pub fn transaction_executor<S: SignerPort>(
        &self,
        signer: S,
    ) -> TransactionExecutor<S, Arc<RpcExecutorAdapter>> {
        TransactionExecutor::new(signer, self.executor())
    }

    /// Wallet proxy signer from config, paired with this context's node.
    pub fn wallet_executor(
        &self,
        config: &AdapterConfig,
    ) -> Result<TransactionExecutor<WalletProxySigner, Arc<RpcExecutorAdapter>>, PortError> {
        Ok(self.transaction_executor(WalletProxySigner::with_config(config)?))
    }
}

use rtd_tx_core::ExecuteRequestType;
use thiserror::Error;

use crate::network::Network;

const ENV_NETWORK: &str = "RTD_NETWORK";
const ENV_RPC_URL: &str = "RTD_RPC_URL";
const ENV_RPC_TIMEOUT_MS: &str = "RTD_RPC_TIMEOUT_MS";
const ENV_WALLET_PROXY_URL: &str = "RTD_WALLET_PROXY_URL";
const ENV_EXECUTE_REQUEST_TYPE: &str = "RTD_EXECUTE_REQUEST_TYPE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub network: Network,
    /// Overrides the network's public full node when set.
    pub rpc_url: Option<String>,
    pub rpc_timeout_ms: u64,
    pub wallet_proxy_url: Option<String>,
    pub request_type: Option<ExecuteRequestType>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            rpc_url: None,
            rpc_timeout_ms: 30_000,
            wallet_proxy_url: None,
            request_type: None,
        }
    }
}

impl AdapterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let mut cfg = Self::default();

        if let Some(raw) = get(ENV_NETWORK) {
            cfg.network = raw.parse().map_err(|reason| ConfigError::Invalid {
                var: ENV_NETWORK,
                reason,
            })?;
        }
        cfg.rpc_url = get(ENV_RPC_URL);
        if let Some(raw) = get(ENV_RPC_TIMEOUT_MS) {
            cfg.rpc_timeout_ms = raw.parse().map_err(|e| ConfigError::Invalid {
                var: ENV_RPC_TIMEOUT_MS,
                reason: format!("{e}"),
            })?;
        }
        cfg.wallet_proxy_url = get(ENV_WALLET_PROXY_URL);
        if let Some(raw) = get(ENV_EXECUTE_REQUEST_TYPE) {
            cfg.request_type = Some(raw.parse().map_err(|reason| ConfigError::Invalid {
                var: ENV_EXECUTE_REQUEST_TYPE,
                reason,
            })?);
        }

        Ok(cfg)
    }

    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.fullnode_url())
    }
}

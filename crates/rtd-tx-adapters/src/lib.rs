pub mod client;
pub mod config;
pub mod deterministic;
mod jsonrpc;
pub mod network;
pub mod rpc;
pub mod scripted;
pub mod telemetry;
pub mod wallet;

pub use client::RtdClientContext;
pub use config::{AdapterConfig, ConfigError};
pub use deterministic::DeterministicSigner;
pub use network::Network;
pub use rpc::RpcExecutorAdapter;
pub use scripted::ScriptedExecutor;
pub use telemetry::init_tracing;
pub use wallet::WalletProxySigner;

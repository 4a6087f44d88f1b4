use std::str::FromStr;

use alloy::primitives::Bytes;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status tag the ledger reports for an applied transaction.
pub const SUCCESS_STATUS: &str = "success";

/// Unsigned transaction payload built by the caller. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIntent(Bytes);

impl TransactionIntent {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(encoded.trim()).map(Self::new)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }
}

/// Output of the signing capability. Consumed by exactly one submission.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub bytes: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionOptions {
    pub show_effects: bool,
    pub show_input: bool,
    pub show_events: bool,
    pub show_object_changes: bool,
    pub show_balance_changes: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            show_effects: true,
            show_input: false,
            show_events: false,
            show_object_changes: false,
            show_balance_changes: false,
        }
    }
}

impl ExecutionOptions {
    pub fn with_input(mut self) -> Self {
        self.show_input = true;
        self
    }

    pub fn with_events(mut self) -> Self {
        self.show_events = true;
        self
    }

    pub fn with_object_changes(mut self) -> Self {
        self.show_object_changes = true;
        self
    }

    pub fn with_balance_changes(mut self) -> Self {
        self.show_balance_changes = true;
        self
    }
}

/// How long the node should hold the response before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecuteRequestType {
    WaitForEffectsCert,
    WaitForLocalExecution,
}

impl FromStr for ExecuteRequestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "WaitForEffectsCert" | "wait_for_effects_cert" => Ok(Self::WaitForEffectsCert),
            "WaitForLocalExecution" | "wait_for_local_execution" => {
                Ok(Self::WaitForLocalExecution)
            }
            other => Err(format!("unknown execute request type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ExecutionStatus>,
}

/// Response of the execution capability. Every field is optional and a field
/// of the wrong type decodes as absent, so any node answer can be judged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    #[serde(default, deserialize_with = "lenient")]
    pub digest: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub effects: Option<Effects>,
}

impl ExecutionResult {
    /// Never fails; a result that is not an object carries no effects.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn with_status(status: &str) -> Self {
        Self {
            digest: None,
            effects: Some(Effects {
                status: Some(ExecutionStatus {
                    status: Some(status.to_owned()),
                    error: None,
                }),
            }),
        }
    }

    pub fn status_tag(&self) -> Option<&str> {
        self.effects
            .as_ref()?
            .status
            .as_ref()?
            .status
            .as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status_tag() == Some(SUCCESS_STATUS)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

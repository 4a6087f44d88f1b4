use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub(crate) enum RpcCallError {
    #[error("{url} unreachable: {reason}")]
    Unreachable { url: String, reason: String },
    #[error("request failed: {0}")]
    Request(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("json decode failed: {0}")]
    Decode(String),
    #[error("rpc error {code}: {message}")]
    Remote { code: i64, message: String },
    #[error("response missing result")]
    MissingResult,
}

#[derive(Debug, Clone)]
pub(crate) struct JsonRpcClient {
    url: String,
    http: reqwest::Client,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl JsonRpcClient {
    pub(crate) fn new(url: impl Into<String>, timeout_ms: u64) -> Result<Self, RpcCallError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RpcCallError::Request(format!("http client init failed: {e}")))?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) async fn call(&self, method: &str, params: Value) -> Result<Value, RpcCallError> {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        trace!(id, method, url = %self.url, "json-rpc request");

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    RpcCallError::Unreachable {
                        url: self.url.clone(),
                        reason: e.to_string(),
                    }
                } else {
                    RpcCallError::Request(e.to_string())
                }
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RpcCallError::Request(e.to_string()))?;
        let parsed: Result<Value, _> = serde_json::from_str(&body);

        // Remote errors may arrive with a non-2xx status; surface them first.
        if let Ok(Value::Object(ref obj)) = parsed {
            if let Some(err) = obj.get("error").filter(|e| !e.is_null()) {
                return Err(RpcCallError::Remote {
                    code: err.get("code").and_then(Value::as_i64).unwrap_or_default(),
                    message: err
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                        .unwrap_or_else(|| err.to_string()),
                });
            }
        }
        if !status.is_success() {
            return Err(RpcCallError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut body = parsed.map_err(|e| RpcCallError::Decode(e.to_string()))?;
        match body.get_mut("result").map(Value::take) {
            Some(Value::Null) | None => Err(RpcCallError::MissingResult),
            Some(result) => Ok(result),
        }
    }
}

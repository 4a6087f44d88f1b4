#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};
use tiny_http::{Response, Server, StatusCode};

use rtd_tx_core::TransactionIntent;

pub struct MockRpc {
    pub url: String,
    pub requests: Arc<Mutex<Vec<Value>>>,
    _join: thread::JoinHandle<()>,
}

impl MockRpc {
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("requests lock").clone()
    }
}

/// Serves up to 16 JSON-RPC requests, answering each with `handler(request)`.
pub fn spawn_mock_rpc<F>(handler: F) -> MockRpc
where
    F: Fn(&Value) -> (u16, Value) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").expect("start server");
    let url = format!("http://{}", server.server_addr());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    let join = thread::spawn(move || {
        for _ in 0..16 {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);
            let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            let (code, response) = handler(&payload);
            if let Ok(mut g) = seen.lock() {
                g.push(payload);
            }
            let response =
                Response::from_string(response.to_string()).with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    MockRpc {
        url,
        requests,
        _join: join,
    }
}

pub fn rpc_result(request: &Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": request.get("id").cloned().unwrap_or(Value::Null),
        "result": result,
    })
}

pub fn rpc_error(request: &Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": request.get("id").cloned().unwrap_or(Value::Null),
        "error": { "code": code, "message": message },
    })
}

pub fn effects_with_status(status: &str) -> Value {
    json!({
        "digest": "5mDXf2bS3Yp9sHcN1QFqgTq3r7yK7hDUXaxCw5vJZ4aW",
        "effects": {
            "messageVersion": "v1",
            "status": { "status": status }
        }
    })
}

pub fn sample_intent() -> TransactionIntent {
    TransactionIntent::new(vec![0x00, 0x00, 0x02, 0x01, 0xAA, 0xBB])
}

//! Uniform response envelope returned by every client call

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Result of a single client call.
///
/// Built once by the client and read-only afterwards; failures are
/// expressed through `success == false` and an `error` entry in `data`
/// rather than through `Err`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    status_code: u16,
    data: Map<String, Value>,
    headers: BTreeMap<String, String>,
    response_time: f64,
    success: bool,
}

impl ApiResponse {
    pub fn new(
        status_code: u16,
        data: Value,
        headers: BTreeMap<String, String>,
        response_time: f64,
        success: bool,
    ) -> Self {
        Self {
            status_code,
            data: into_object(data),
            headers,
            response_time,
            success,
        }
    }

    /// 200 response with a JSON content type
    pub fn ok(data: Value, response_time: f64) -> Self {
        Self::new(200, data, json_headers(), response_time, true)
    }

    /// Structured failure with a JSON content type and `{"error": message}`
    pub fn error(status_code: u16, message: impl Into<String>, response_time: f64) -> Self {
        Self::new(
            status_code,
            serde_json::json!({ "error": message.into() }),
            json_headers(),
            response_time,
            false,
        )
    }

    /// Failure that never reached the remote side; no headers are available
    pub fn transport_error(message: impl Into<String>, response_time: f64) -> Self {
        Self::new(
            500,
            serde_json::json!({ "error": message.into() }),
            BTreeMap::new(),
            response_time,
            false,
        )
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Wall-clock seconds between call start and construction
    pub fn response_time(&self) -> f64 {
        self.response_time
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error_message(&self) -> Option<&str> {
        self.data.get("error").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

fn json_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

/// Payloads are always objects; anything else is wrapped under `value`.
fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}

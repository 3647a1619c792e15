//! Response decoding and API error mapping.

use std::time::SystemTime;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::retry::parse_retry_after;
use crate::transport::HttpResponseParts;

pub(crate) fn parse_body_json(resp: &HttpResponseParts) -> Option<serde_json::Value> {
    let s = std::str::from_utf8(&resp.body).ok()?;
    serde_json::from_str(s).ok()
}

/// Decode a 2xx body into `T`; map any other status to [`Error::Api`].
pub(crate) fn decode<T: DeserializeOwned>(resp: HttpResponseParts) -> Result<T, Error> {
    if !(200..300).contains(&resp.status) {
        return Err(api_error(&resp));
    }
    if resp.body.is_empty() {
        // 204-style responses decode as null (unit and Option targets).
        return serde_json::from_value(serde_json::Value::Null).map_err(Error::Json);
    }
    serde_json::from_slice(&resp.body).map_err(Error::Json)
}

fn api_error(resp: &HttpResponseParts) -> Error {
    let message = parse_body_json(resp)
        .and_then(|v| error_message(&v))
        .unwrap_or_else(|| {
            let body = String::from_utf8_lossy(&resp.body);
            if body.trim().is_empty() {
                format!("HTTP {}", resp.status)
            } else {
                body.into_owned()
            }
        });
    Error::Api {
        status: resp.status,
        message,
        retry_after: parse_retry_after(&resp.headers, SystemTime::now()),
    }
}

/// Pull a human-readable message out of the API error body
/// (`{"error": {"name": ..., "message": ...}}`).
fn error_message(body: &serde_json::Value) -> Option<String> {
    let error = body.get("error")?;
    if let Some(message) = error.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    error.get("name").and_then(|n| n.as_str()).map(String::from)
}

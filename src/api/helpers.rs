//! Response builders shared by the API handlers.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::DocsumError;

/// Returns a 200 OK response with `body` serialized as JSON.
#[must_use]
pub fn ok_json<T: Serialize>(body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(body) => json!({
            "statusCode": 200,
            "headers": { "Content-Type": "application/json" },
            "body": body
        }),
        Err(e) => err_response(500, &format!("Failed to serialize response: {e}")),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "ok": false, "error": message }).to_string()
    })
}

/// Maps a crate error onto its HTTP status and message.
#[must_use]
pub fn error_response(error: &DocsumError) -> Value {
    err_response(error.status_code(), &error.to_string())
}

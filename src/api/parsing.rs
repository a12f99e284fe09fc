use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::UploadRequest;
use crate::errors::DocsumError;
use crate::utils::filename::secure_filename;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path from a function URL / HTTP API (`rawPath`) or REST API
/// (`path`) event.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

/// Upper-case HTTP method of the event.
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Request body as text, undoing the gateway's base64 wrapping when
/// `isBase64Encoded` is set.
pub fn extract_body(payload: &Value) -> Result<String, DocsumError> {
    let Some(body) = payload.get("body") else {
        return Err(DocsumError::ParseError("Missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(DocsumError::ParseError("Invalid body format".to_string()));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if encoded {
        let raw = STANDARD.decode(body_str)?;
        String::from_utf8(raw)
            .map_err(|e| DocsumError::ParseError(format!("Body is not valid UTF-8: {}", e)))
    } else {
        Ok(body_str.to_string())
    }
}

pub fn parse_upload_request(body: &str) -> Result<UploadRequest, DocsumError> {
    Ok(serde_json::from_str(body)?)
}

/// Validates an upload and decodes its content.
///
/// Returns the sanitized file name together with the file bytes.
pub fn decode_upload(
    request: &UploadRequest,
    max_content_length: usize,
) -> Result<(String, Vec<u8>), DocsumError> {
    let Some(content) = request.content.as_deref() else {
        return Err(DocsumError::MissingFile(
            "No file part in request".to_string(),
        ));
    };

    if request.filename.trim().is_empty() {
        return Err(DocsumError::MissingFile("No file selected".to_string()));
    }

    let content = content.trim();
    // Every 4 base64 characters carry 3 bytes; reject obviously oversized
    // uploads before allocating for them.
    if content.len() / 4 * 3 > max_content_length.saturating_add(3) {
        return Err(DocsumError::PayloadTooLarge {
            limit: max_content_length,
        });
    }

    let bytes = STANDARD.decode(content)?;
    if bytes.len() > max_content_length {
        return Err(DocsumError::PayloadTooLarge {
            limit: max_content_length,
        });
    }

    Ok((secure_filename(&request.filename), bytes))
}

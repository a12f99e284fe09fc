//! API Lambda handler - thin router that delegates to the analysis flow.
//!
//! This module handles:
//! - Route and method matching
//! - Service status (`GET /`, `GET /health`)
//! - Document uploads (`POST /api/summarize`)

use super::{analyze, helpers, parsing};
use crate::core::config::AppConfig;
use crate::extract::is_ocr_available;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

pub use self::function_handler as handler;

pub const SERVICE_NAME: &str = "docsum";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Status,
    Summarize,
}

fn match_route(path: &str) -> Option<Route> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() || trimmed.ends_with("/health") {
        Some(Route::Status)
    } else if trimmed.ends_with("/api/summarize") {
        Some(Route::Summarize)
    } else {
        None
    }
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Fails only when configuration cannot be loaded; request problems are
/// reported as JSON error responses.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    Ok(route_request(&config, &event.payload).await)
}

/// Routes one HTTP event and produces the gateway response.
pub async fn route_request(config: &AppConfig, payload: &Value) -> Value {
    let request_id = Uuid::new_v4();
    let path = parsing::request_path(payload).unwrap_or("/");
    let method = parsing::request_method(payload).unwrap_or_else(|| "GET".to_string());
    info!(%request_id, %method, %path, "API request received");

    let Some(route) = match_route(path) else {
        warn!(%request_id, %path, "Unknown route");
        return helpers::err_response(404, "Not found");
    };

    match (route, method.as_str()) {
        (Route::Status, "GET") => handle_status(config).await,
        (Route::Summarize, "POST") => handle_summarize(config, payload, request_id).await,
        _ => {
            warn!(%request_id, %method, %path, "Method not allowed");
            helpers::err_response(405, "Method not allowed")
        }
    }
}

async fn handle_status(config: &AppConfig) -> Value {
    let config = config.clone();
    let ocr_available = tokio::task::spawn_blocking(move || is_ocr_available(&config))
        .await
        .unwrap_or(false);

    helpers::ok_json(&json!({
        "ok": true,
        "service": SERVICE_NAME,
        "ocr_available": ocr_available
    }))
}

async fn handle_summarize(config: &AppConfig, payload: &Value, request_id: Uuid) -> Value {
    let request = match parsing::extract_body(payload)
        .and_then(|body| parsing::parse_upload_request(&body))
    {
        Ok(request) => request,
        Err(e) => {
            error!(%request_id, "Invalid upload request: {}", e);
            return helpers::error_response(&e);
        }
    };

    match analyze::analyze_upload(config, &request).await {
        Ok(report) => {
            info!(
                %request_id,
                extracted_chars = report.extracted_chars,
                suggestions = report.suggestions.len(),
                "Document analyzed"
            );
            helpers::ok_json(&report)
        }
        Err(e) => {
            error!(%request_id, status = e.status_code(), "Failed to analyze document: {}", e);
            helpers::error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_routes_with_stage_prefixes() {
        assert_eq!(match_route("/"), Some(Route::Status));
        assert_eq!(match_route(""), Some(Route::Status));
        assert_eq!(match_route("/prod/health"), Some(Route::Status));
        assert_eq!(match_route("/api/summarize/"), Some(Route::Summarize));
        assert_eq!(match_route("/prod/api/summarize"), Some(Route::Summarize));
        assert_eq!(match_route("/api/other"), None);
    }
}

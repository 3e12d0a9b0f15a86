//! Structured request logging middleware for the todo HTTP API
//!
//! Emits one `tracing` event per request with timing and a truncated
//! summary of the JSON body fields.

use crate::error::ApiError;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde_json::Value;
use std::time::Instant;

/// Largest request body buffered for logging, matching axum's `DefaultBodyLimit`
pub const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// Maximum length for body values before truncation
const MAX_PARAM_LENGTH: usize = 30;

/// Truncation suffix for long values
const TRUNCATION_SUFFIX: &str = "...";

/// Request logging middleware
///
/// Only requests under `/todos` are logged. The event carries `method`,
/// `path`, `status`, `elapsed_ms` and, for requests with a JSON body, a
/// `params` summary such as `title="Buy milk", completed="false"`.
///
/// Bodies larger than [`MAX_LOGGED_BODY`] are answered with 413 and never
/// reach the router.
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if !path.starts_with("/todos") {
        return next.run(request).await;
    }

    let start_time = Instant::now();
    let method = request.method().clone();

    let (parts, body) = request.into_parts();
    let body_bytes = match Limited::new(body, MAX_LOGGED_BODY).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            let response = ApiError::BadRequest {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: format!("Request body exceeds {MAX_LOGGED_BODY} bytes"),
            }
            .into_response();
            log_request(&method, &path, &response, start_time, "");
            return response;
        }
        Err(e) => {
            tracing::warn!(%method, %path, error = %e, "Failed to read request body");
            let response = next.run(Request::from_parts(parts, Body::empty())).await;
            log_request(&method, &path, &response, start_time, "");
            return response;
        }
    };

    let params_summary = if body_bytes.is_empty() {
        String::new()
    } else {
        match serde_json::from_slice::<Value>(&body_bytes) {
            Ok(json) => format_params_summary(&json),
            Err(_) => "invalid_json".to_string(),
        }
    };

    let response = next.run(Request::from_parts(parts, Body::from(body_bytes))).await;
    log_request(&method, &path, &response, start_time, &params_summary);

    response
}

fn log_request(
    method: &axum::http::Method,
    path: &str,
    response: &Response,
    start_time: Instant,
    params: &str,
) {
    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        params,
        "HTTP request"
    );
}

/// Format body fields into a summary string with truncation
fn format_params_summary(params: &Value) -> String {
    match params {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                if is_sensitive_parameter(key) {
                    format!("{key}=\"[REDACTED]\"")
                } else {
                    format!("{key}=\"{}\"", format_parameter_value(value))
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        _ => format_parameter_value(params),
    }
}

/// Format a single value with truncation
fn format_parameter_value(value: &Value) -> String {
    let value_str = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{...{} fields}}", obj.len()),
        Value::Null => "null".to_string(),
    };

    truncate_string(&value_str, MAX_PARAM_LENGTH)
}

/// Truncate to at most `max_length` characters, suffix included
fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let kept = max_length.saturating_sub(TRUNCATION_SUFFIX.len());
        let mut truncated: String = input.chars().take(kept).collect();
        truncated.push_str(TRUNCATION_SUFFIX);
        truncated
    }
}

/// Check if a field should be redacted
fn is_sensitive_parameter(key: &str) -> bool {
    const SENSITIVE_KEYS: [&str; 4] = ["password", "token", "secret", "key"];

    let key_lower = key.to_lowercase();
    SENSITIVE_KEYS.iter().any(|sensitive| key_lower.contains(sensitive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("this is a very long string", 10), "this is...");
        assert_eq!(truncate_string("exactly10c", 10), "exactly10c");
        assert_eq!(truncate_string("ééééééééééééé", 6), "ééé...");
    }

    #[test]
    fn test_format_parameter_value() {
        assert_eq!(format_parameter_value(&json!("milk")), "milk");
        assert_eq!(format_parameter_value(&json!(42)), "42");
        assert_eq!(format_parameter_value(&json!(false)), "false");
        assert_eq!(format_parameter_value(&json!(null)), "null");
        assert_eq!(format_parameter_value(&json!(["a", "b"])), "[2 items]");
        assert_eq!(format_parameter_value(&json!({"a": 1})), "{...1 fields}");
    }

    #[test]
    fn test_format_params_summary() {
        let params = json!({
            "title": "Buy milk",
            "description": "A very long description that keeps going and going",
            "completed": true
        });

        let summary = format_params_summary(&params);
        assert!(summary.contains("title=\"Buy milk\""));
        assert!(summary.contains("description=\"A very long description tha...\""));
        assert!(summary.contains("completed=\"true\""));
    }

    #[test]
    fn test_sensitive_parameter_redaction() {
        let params = json!({
            "title": "Rotate credentials",
            "api_key": "abc123",
            "password": "hunter2"
        });

        let summary = format_params_summary(&params);
        assert!(summary.contains("title=\"Rotate credentials\""));
        assert!(summary.contains("api_key=\"[REDACTED]\""));
        assert!(summary.contains("password=\"[REDACTED]\""));
        assert!(!summary.contains("hunter2"));
    }

    #[test]
    fn test_is_sensitive_parameter() {
        assert!(is_sensitive_parameter("password"));
        assert!(is_sensitive_parameter("ACCESS_TOKEN"));
        assert!(is_sensitive_parameter("client_secret"));
        assert!(!is_sensitive_parameter("title"));
        assert!(!is_sensitive_parameter("description"));
        assert!(!is_sensitive_parameter("completed"));
    }
}

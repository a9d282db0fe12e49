use reqwest::{Client, Response};
use std::time::Duration;

use crate::utils::{Result, TranslatorError};

const MAX_ERROR_BODY: usize = 400;

pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Passes successful responses through and turns the rest into `Api` errors.
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TranslatorError::Api {
        status: status.as_u16(),
        message: extract_error_message(&body),
    })
}

/// Pulls `error.message` (Google style) or `message` out of a JSON error body,
/// falling back to a truncated copy of the raw body.
pub fn extract_error_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
        if let Some(msg) = v.get("error_description").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = v.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &trimmed[..end])
    } else {
        trimmed.to_string()
    }
}

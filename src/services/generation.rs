//! Generation Service Client
//!
//! Sends the prompt to the local generation backend and classifies the
//! response. The fetch runs on the wasm event loop; classification is a pure
//! function so the error taxonomy is testable off-target.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Endpoint of the generation backend.
pub const GENERATE_URL: &str = "http://127.0.0.1:8000/generate";

/// Fallback shown when the service rejects a request without a detail field.
const GENERIC_REJECTION: &str = "Failed to generate design.";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    language: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response.
    #[error("Error: could not reach the generation service")]
    Transport,
    /// The service answered with a failure status.
    #[error("Error: {0}")]
    ServiceRejected(String),
    /// Success status, but no usable `generated_code` field in the body.
    #[error("Error: the service did not return generated code")]
    MalformedResponse,
}

/// Classifies a generation response from its HTTP status and parsed JSON body
/// (`Value::Null` when the body was absent or not JSON).
///
/// On success the generated code is returned exactly as the service sent it,
/// byte for byte; an empty `generated_code` counts as malformed.
pub fn classify_response(status: u16, body: Value) -> Result<String, GenerationError> {
    if !(200..300).contains(&status) {
        let detail = body
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_REJECTION)
            .to_string();
        return Err(GenerationError::ServiceRejected(detail));
    }
    match body.get("generated_code").and_then(Value::as_str) {
        Some(code) if !code.is_empty() => Ok(code.to_string()),
        _ => Err(GenerationError::MalformedResponse),
    }
}

/// POSTs `prompt` (and the target `language`) to the generation service.
/// Exactly one request per call; no retries, no timeout beyond the browser's.
pub async fn generate(prompt: &str, language: &str) -> Result<String, GenerationError> {
    let payload = serde_json::to_string(&GenerateRequest { prompt, language })
        .map_err(|_| GenerationError::Transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(GENERATE_URL, &opts)
        .map_err(|_| GenerationError::Transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| GenerationError::Transport)?;

    let window = web_sys::window().ok_or(GenerationError::Transport)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| GenerationError::Transport)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| GenerationError::Transport)?;

    let status = resp.status();
    // A non-JSON body is classified like a missing one.
    let body = match resp.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|js| serde_wasm_bindgen::from_value::<Value>(js).ok())
            .unwrap_or(Value::Null),
        Err(_) => Value::Null,
    };

    classify_response(status, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Success Classification Tests
    // ========================================================================

    #[test]
    fn test_ok_response_yields_exact_content() {
        let body = json!({ "generated_code": "<h1>Hi</h1>" });
        assert_eq!(classify_response(200, body), Ok("<h1>Hi</h1>".to_string()));
    }

    #[test]
    fn test_ok_response_preserves_whitespace() {
        // No trimming: surrounding whitespace survives byte for byte.
        let body = json!({ "generated_code": "  <p>pad</p>\n" });
        assert_eq!(
            classify_response(201, body),
            Ok("  <p>pad</p>\n".to_string())
        );
    }

    #[test]
    fn test_ok_response_ignores_extra_fields() {
        let body = json!({ "generated_code": "<div/>", "detail": "unused" });
        assert_eq!(classify_response(200, body), Ok("<div/>".to_string()));
    }

    // ========================================================================
    // Rejection Classification Tests
    // ========================================================================

    #[test]
    fn test_rejection_surfaces_detail() {
        let body = json!({ "detail": "rate limited" });
        let err = classify_response(500, body).unwrap_err();
        assert_eq!(
            err,
            GenerationError::ServiceRejected("rate limited".to_string())
        );
        assert_eq!(err.to_string(), "Error: rate limited");
    }

    #[test]
    fn test_rejection_without_detail_uses_fallback() {
        let err = classify_response(502, json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Error: Failed to generate design.");
    }

    #[test]
    fn test_rejection_with_non_json_body_uses_fallback() {
        let err = classify_response(400, Value::Null).unwrap_err();
        assert_eq!(
            err,
            GenerationError::ServiceRejected(GENERIC_REJECTION.to_string())
        );
    }

    // ========================================================================
    // Malformed Response Tests
    // ========================================================================

    #[test]
    fn test_ok_status_without_generated_code_is_malformed() {
        assert_eq!(
            classify_response(200, json!({ "something_else": 1 })),
            Err(GenerationError::MalformedResponse)
        );
    }

    #[test]
    fn test_ok_status_with_empty_generated_code_is_malformed() {
        assert_eq!(
            classify_response(200, json!({ "generated_code": "" })),
            Err(GenerationError::MalformedResponse)
        );
    }

    #[test]
    fn test_ok_status_with_non_string_generated_code_is_malformed() {
        assert_eq!(
            classify_response(200, json!({ "generated_code": 42 })),
            Err(GenerationError::MalformedResponse)
        );
    }
}

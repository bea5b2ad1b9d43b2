// Envelope building module
// The uniform JSON wrapper carried by every /health and /bfhl response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::logger;

/// Uniform response wrapper: success flag, contact email, and at most one
/// of `data` / `error`. `data` is only ever present on success.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl Envelope {
    /// Bare success envelope, as returned by `/health`.
    pub fn ok(official_email: &str) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: None,
            error: None,
        }
    }

    /// Success envelope carrying a computation result.
    pub fn success(official_email: &str, data: Value) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Failure envelope carrying a stable error code.
    pub fn failure(official_email: &str, code: &'static str) -> Self {
        Self {
            is_success: false,
            official_email: official_email.to_string(),
            data: None,
            error: Some(code),
        }
    }
}

/// Build a JSON response from an envelope.
///
/// Serialization failure degrades to a plain 500 body; response building
/// itself never panics.
pub fn envelope_response(
    status: StatusCode,
    envelope: &Envelope,
    enable_cors: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(envelope) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize envelope: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"is_success":false,"error":"internal_server_error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

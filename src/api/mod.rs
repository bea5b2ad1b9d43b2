// API module entry
// Endpoint handlers for /health and /bfhl plus the envelope contract.

mod error;
mod request;
mod response;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

pub use error::{ComputeError, ValidationError};
pub use request::Operation;
pub use response::{envelope_response, Envelope};

/// `GET /health`: unconditional success envelope, no input.
pub fn handle_health(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let envelope = Envelope::ok(state.official_email());
    envelope_response(StatusCode::OK, &envelope, state.config.http.enable_cors)
}

/// `POST /bfhl`: validate the single-key JSON body, run the selected
/// operation, and wrap the outcome in the standard envelope.
///
/// Validation failures map to 400 with their stable code; computation
/// faults map to the generic 500 envelope and never leak detail.
pub async fn handle_bfhl(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let email = state.official_email().to_string();
    let enable_cors = state.config.http.enable_cors;

    let body_bytes = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            return validation_failure(&email, ValidationError::InvalidJson, enable_cors);
        }
    };

    let body: Value = match serde_json::from_slice(&body_bytes) {
        Ok(value) => value,
        Err(_) => {
            return validation_failure(&email, ValidationError::InvalidJson, enable_cors);
        }
    };

    match Operation::from_body(&body) {
        Ok(operation) => match operation.execute() {
            Ok(data) => {
                let envelope = Envelope::success(&email, data);
                envelope_response(StatusCode::OK, &envelope, enable_cors)
            }
            Err(fault) => {
                logger::log_error(&format!("Computation fault on /bfhl: {fault}"));
                let envelope = Envelope::failure(&email, "internal_server_error");
                envelope_response(StatusCode::INTERNAL_SERVER_ERROR, &envelope, enable_cors)
            }
        },
        Err(invalid) => validation_failure(&email, invalid, enable_cors),
    }
}

fn validation_failure(
    email: &str,
    error: ValidationError,
    enable_cors: bool,
) -> Response<Full<Bytes>> {
    let envelope = Envelope::failure(email, error.code());
    envelope_response(StatusCode::BAD_REQUEST, &envelope, enable_cors)
}

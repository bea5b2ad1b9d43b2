//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method and body-size checks,
//! endpoint dispatch, and access logging.

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::api;
use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;

/// Main entry point for HTTP request handling.
///
/// Routes `GET /health` and `POST /bfhl`; everything else gets an
/// infrastructure response (404/405/413/preflight). Emits one access-log
/// line per request when enabled.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let response = dispatch(req, &state, &method, &path).await;

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
    method: &Method,
    path: &str,
) -> Response<Full<Bytes>> {
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    match (method, path) {
        (&Method::GET, "/health") => api::handle_health(state),
        (&Method::POST, "/bfhl") => api::handle_bfhl(req, state).await,
        (&Method::OPTIONS, _) => http::build_options_response(state.config.http.enable_cors),
        (_, "/health" | "/bfhl") => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            http::build_405_response()
        }
        _ => http::build_404_response(),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

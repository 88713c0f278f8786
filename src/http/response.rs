//! HTTP response building module
//!
//! Every builder attaches the permissive CORS header set: the fixture exists
//! to be called cross-origin from browser clients under test.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Attach the CORS header trio carried by every route.
fn with_cors(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
        .header("Access-Control-Allow-Headers", "Content-Type")
}

/// Build a JSON response with the given status.
///
/// Serialization failure degrades to a canned 500 body instead of panicking.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_string(body) {
        Ok(payload) => json_raw(status, Bytes::from(payload)),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response body: {e}"));
            json_raw(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"Internal server error"}"#),
            )
        }
    }
}

/// Build a JSON response from pre-rendered bytes.
pub fn json_raw(status: StatusCode, payload: Bytes) -> Response<Full<Bytes>> {
    with_cors(Response::builder().status(status))
        .header("Content-Type", "application/json")
        .body(Full::new(payload))
        .unwrap_or_else(|e| {
            log_build_error(status.as_u16(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the OPTIONS preflight response: status 200, headers only, empty body.
pub fn preflight() -> Response<Full<Bytes>> {
    with_cors(Response::builder().status(StatusCode::OK))
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response (unknown route, GET and POST alike).
pub fn not_found() -> Response<Full<Bytes>> {
    json_raw(
        StatusCode::NOT_FOUND,
        Bytes::from_static(br#"{"error":"Not found"}"#),
    )
}

/// Build 405 Method Not Allowed response for methods outside the fixture.
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    with_cors(Response::builder().status(StatusCode::METHOD_NOT_ALLOWED))
        .header("Content-Type", "application/json")
        .header("Allow", ALLOWED_METHODS)
        .body(Full::new(Bytes::from_static(
            br#"{"error":"Method not allowed"}"#,
        )))
        .unwrap_or_else(|e| {
            log_build_error(405, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

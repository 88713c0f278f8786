//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method and path dispatch to the
//! scripted scenarios, plus the `Server` header and access logging.

use crate::config::Config;
use crate::handler::scenarios;
use crate::http::response;
use crate::logger::{self, RequestLog};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, SERVER};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

// Path fragments the fixture recognizes. Matching is substring containment,
// as in the original QA tool, so gateway-prefixed variants keep working.
const ORDER_PATH: &str = "/api/v1/order";
const PRODUCTS_PATH: &str = "/api/products";
const PROFILE_PATH: &str = "/api/user/profile";

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    cfg: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(ToOwned::to_owned);

    let mut response = dispatch(&method, &path, query.as_deref()).await;

    if let Ok(value) = HeaderValue::from_str(&cfg.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    if cfg.logging.access_log {
        let entry = RequestLog::new(method.as_str(), &path, query.as_deref())
            .with_status(response.status().as_u16())
            .with_duration(started.elapsed());
        logger::log_access(&entry, &cfg.logging.format);
    }

    Ok(response)
}

/// Route a request to one scripted behavior.
///
/// Every arm answers; the fixture has no passthrough and no real errors.
pub async fn dispatch(method: &Method, path: &str, query: Option<&str>) -> Response<Full<Bytes>> {
    match method {
        &Method::OPTIONS => response::preflight(),
        &Method::POST if path.contains(ORDER_PATH) => scenarios::reject_order().await,
        &Method::POST => response::not_found(),
        &Method::GET if path.contains(PRODUCTS_PATH) => scenarios::list_products(query).await,
        &Method::GET if path.contains(PROFILE_PATH) => scenarios::profile_timeout().await,
        &Method::GET => response::not_found(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            response::method_not_allowed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;
    use std::time::Duration;

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_always_422_after_delay() {
        let start = tokio::time::Instant::now();
        let resp = dispatch(&Method::POST, "/api/v1/order", None).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_unknown_route_is_404() {
        let resp = dispatch(&Method::POST, "/api/v1/cart", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_bytes(resp).await,
            br#"{"error":"Not found"}"#.as_slice()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_products_dispatch_with_filter() {
        let start = tokio::time::Instant::now();
        let resp = dispatch(&Method::GET, "/api/products", Some("category=456")).await;
        assert!(start.elapsed() >= Duration::from_millis(800));
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_products_path_matches_on_containment() {
        let resp = dispatch(&Method::GET, "/gateway/api/products/list", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_unknown_route_is_404() {
        let resp = dispatch(&Method::GET, "/api/orders", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_profile_hangs_full_minute_then_504() {
        let start = tokio::time::Instant::now();
        let resp = dispatch(&Method::GET, "/api/user/profile", None).await;
        assert!(start.elapsed() >= Duration::from_secs(60));
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_options_preflight_any_path() {
        for path in ["/", "/api/v1/order", "/api/user/profile"] {
            let resp = dispatch(&Method::OPTIONS, path, None).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get("Access-Control-Allow-Origin").unwrap(),
                "*"
            );
            assert!(body_bytes(resp).await.is_empty());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_foreign_method_is_405() {
        let resp = dispatch(&Method::DELETE, "/api/v1/order", None).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, POST, OPTIONS");
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_route_carries_cors() {
        let responses = [
            dispatch(&Method::OPTIONS, "/", None).await,
            dispatch(&Method::POST, "/api/v1/order", None).await,
            dispatch(&Method::POST, "/nope", None).await,
            dispatch(&Method::GET, "/api/products", Some("category=999")).await,
            dispatch(&Method::GET, "/nope", None).await,
            dispatch(&Method::PUT, "/", None).await,
        ];
        for resp in responses {
            assert_eq!(
                resp.headers().get("Access-Control-Allow-Origin").unwrap(),
                "*",
                "missing CORS on {}",
                resp.status()
            );
        }
    }
}

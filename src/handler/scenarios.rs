//! Scripted scenario behaviors.
//!
//! Each endpoint answers with a canned response after a fixed delay. The
//! delays are part of the fixture contract, not tunables: clients under test
//! are expected to observe them.

use std::time::Duration;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::json;

use crate::catalog;
use crate::http::{query, response};
use crate::logger;

/// Simulated processing time before the order is rejected.
const ORDER_DELAY: Duration = Duration::from_millis(500);
/// Simulated query time before the product listing is returned.
const PRODUCTS_DELAY: Duration = Duration::from_millis(800);
/// How long the profile endpoint hangs before giving up with a 504.
const PROFILE_HANG: Duration = Duration::from_secs(60);

/// Order placement: always rejected with 422, whatever the request body.
pub async fn reject_order() -> Response<Full<Bytes>> {
    tokio::time::sleep(ORDER_DELAY).await;
    order_rejected()
}

pub fn order_rejected() -> Response<Full<Bytes>> {
    response::json(
        StatusCode::UNPROCESSABLE_ENTITY,
        &json!({
            "error_code": "insufficient_stock",
            "message": "Wireless Headphones are out of stock. Only 3 items available."
        }),
    )
}

/// Product listing, optionally filtered by the `category` query parameter.
pub async fn list_products(raw_query: Option<&str>) -> Response<Full<Bytes>> {
    tokio::time::sleep(PRODUCTS_DELAY).await;
    products(raw_query)
}

/// An unknown category answers 200 with an empty array, not an error: the
/// silent-empty case is one of the behaviors clients are tested against.
/// An empty `category=` counts as no filter.
pub fn products(raw_query: Option<&str>) -> Response<Full<Bytes>> {
    let category = query::first_value(raw_query, "category").filter(|v| !v.is_empty());

    let listing: Vec<&catalog::Product> = match category {
        Some(id) => catalog::products_in(id)
            .map(|products| products.iter().collect())
            .unwrap_or_default(),
        None => catalog::all_products().collect(),
    };

    response::json(StatusCode::OK, &listing)
}

/// Profile lookup: hang for the full timeout window, then answer 504.
///
/// A client with its own shorter timeout never sees the response; one
/// without observes the gateway giving up.
pub async fn profile_timeout() -> Response<Full<Bytes>> {
    logger::log_profile_hang(PROFILE_HANG);
    tokio::time::sleep(PROFILE_HANG).await;
    gateway_timeout()
}

pub fn gateway_timeout() -> Response<Full<Bytes>> {
    response::json(
        StatusCode::GATEWAY_TIMEOUT,
        &json!({
            "error": "Gateway Timeout",
            "message": "The server did not respond in time"
        }),
    )
}

//! Logger module
//!
//! Provides logging utilities for the mock server:
//! - Startup banner listing the scripted endpoints
//! - Access logging in plain or JSON format
//! - Error and warning logging

mod format;

pub use format::RequestLog;

use crate::catalog;
use crate::config::Config;
use std::net::SocketAddr;
use std::time::Duration;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let legend = catalog::categories()
        .map(|c| format!("{}={}", c.id, c.name))
        .collect::<Vec<_>>()
        .join(", ");

    println!("======================================");
    println!("Mock API server ready for QA runs");
    println!("Listening on: http://{addr}");
    println!("Scripted endpoints:");
    println!("  POST /api/v1/order            - rejects with 422 after 0.5s");
    println!("  GET  /api/products?category=X - product listing after 0.8s ({legend})");
    println!("  GET  /api/user/profile        - hangs 60s, then 504");
    if config.logging.access_log {
        println!("Access log format: {}", config.logging.format);
    }
    println!("======================================\n");
}

/// Write one formatted access log line
pub fn log_access(entry: &RequestLog, format: &str) {
    println!("{}", entry.format(format));
}

pub fn log_profile_hang(hang: Duration) {
    println!(
        "[Profile] Request received - simulating upstream hang ({}s)...",
        hang.as_secs()
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

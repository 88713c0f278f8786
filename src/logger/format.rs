//! Access log format module
//!
//! Supports two line formats:
//! - `plain` (timestamped human-readable line, the default)
//! - `json` (JSON structured logging)

use chrono::{DateTime, Local};
use std::time::Duration;

/// One handled request, ready to be formatted as an access log line
#[derive(Debug, Clone)]
pub struct RequestLog {
    /// Request timestamp
    pub time: DateTime<Local>,
    /// HTTP method (GET, POST, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// Response status code
    pub status: u16,
    /// Request handling time in milliseconds (includes the scripted delay)
    pub duration_ms: u64,
}

impl RequestLog {
    /// Create a new entry with the current timestamp
    pub fn new(method: &str, path: &str, query: Option<&str>) -> Self {
        Self {
            time: Local::now(),
            method: method.to_owned(),
            path: path.to_owned(),
            query: query.map(ToOwned::to_owned),
            status: 200,
            duration_ms: 0,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Format the entry according to the configured format
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_plain(),
        }
    }

    /// `[2026-08-07 14:03:21] GET /api/products?category=456 - 200 (801ms)`
    fn format_plain(&self) -> String {
        format!(
            "[{}] {} {}{} - {} ({}ms)",
            self.time.format("%Y-%m-%d %H:%M:%S"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.status,
            self.duration_ms,
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "status": self.status,
            "duration_ms": self.duration_ms,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> RequestLog {
        RequestLog::new("GET", "/api/products", Some("category=456"))
            .with_status(200)
            .with_duration(Duration::from_millis(801))
    }

    #[test]
    fn test_format_plain() {
        let log = create_test_entry().format("plain");
        assert!(log.contains("GET /api/products?category=456"));
        assert!(log.contains("200"));
        assert!(log.contains("(801ms)"));
    }

    #[test]
    fn test_format_plain_without_query() {
        let log = RequestLog::new("POST", "/api/v1/order", None)
            .with_status(422)
            .format("plain");
        assert!(log.contains("POST /api/v1/order - 422"));
        assert!(!log.contains('?'));
    }

    #[test]
    fn test_format_json() {
        let entry = create_test_entry();
        let parsed: serde_json::Value = serde_json::from_str(&entry.format("json")).unwrap();
        assert_eq!(parsed["method"], "GET");
        assert_eq!(parsed["path"], "/api/products");
        assert_eq!(parsed["query"], "category=456");
        assert_eq!(parsed["status"], 200);
        assert_eq!(parsed["duration_ms"], 801);
    }

    #[test]
    fn test_unknown_format_falls_back_to_plain() {
        let log = create_test_entry().format("combined");
        assert!(log.starts_with('['));
        assert!(log.contains("GET /api/products"));
    }
}

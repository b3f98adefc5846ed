//! Inspection Target
//!
//! A read-only, per-request view of the incoming request as handed over by
//! the host HTTP server. The engine never mutates it, and nothing is
//! retained once the decision is made.

use std::collections::HashMap;

use serde_json::Value;

/// Read-only view of an inbound request
#[derive(Debug, Clone)]
pub struct InspectionTarget {
    /// HTTP method
    pub method: String,
    /// Decoded route path
    pub path: String,
    /// Raw original URL (path + query string, undecoded)
    pub original_url: String,
    /// Parsed query parameters (nested mapping; `Null` when absent)
    pub query: Value,
    /// Parsed request body (nested mapping; absent for body-less methods)
    pub body: Option<Value>,
    /// Flat header mapping, keys lowercased
    pub headers: HashMap<String, String>,
    /// Client IP as reported by the server
    pub client_ip: String,
}

impl InspectionTarget {
    /// Start building a target from method and decoded path
    ///
    /// `original_url` defaults to the path until set explicitly.
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            original_url: path.to_string(),
            query: Value::Null,
            body: None,
            headers: HashMap::new(),
            client_ip: String::new(),
        }
    }

    /// Set the raw original URL (path + query string)
    pub fn original_url(mut self, url: &str) -> Self {
        self.original_url = url.to_string();
        self
    }

    /// Set the parsed query mapping
    pub fn query(mut self, query: Value) -> Self {
        self.query = query;
        self
    }

    /// Set the parsed body mapping
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a request header (name is lowercased)
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Set the client IP
    pub fn client_ip(mut self, ip: &str) -> Self {
        self.client_ip = ip.to_string();
        self
    }

    /// Header value by lowercase name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let target = InspectionTarget::new("GET", "/api/bookmarks");
        assert_eq!(target.method, "GET");
        assert_eq!(target.original_url, "/api/bookmarks");
        assert!(target.query.is_null());
        assert!(target.body.is_none());
    }

    #[test]
    fn test_header_names_lowercased() {
        let target = InspectionTarget::new("GET", "/")
            .header("User-Agent", "curl/8.0")
            .header("X-Forwarded-For", "203.0.113.9");
        assert_eq!(target.header_value("user-agent"), Some("curl/8.0"));
        assert_eq!(target.header_value("x-forwarded-for"), Some("203.0.113.9"));
    }

    #[test]
    fn test_full_target() {
        let target = InspectionTarget::new("POST", "/api/bookmarks")
            .original_url("/api/bookmarks?sort=asc")
            .query(json!({"sort": "asc"}))
            .body(json!({"title": "docs", "url": "https://example.com"}))
            .client_ip("198.51.100.7");
        assert_eq!(target.original_url, "/api/bookmarks?sort=asc");
        assert!(target.body.is_some());
        assert_eq!(target.client_ip, "198.51.100.7");
    }
}

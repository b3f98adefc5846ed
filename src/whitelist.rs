//! Route Whitelist
//!
//! Exact-prefix exemption for routes that legitimately carry rich content.
//! A whitelisted request receives no inspection at all, including header
//! checks.

/// Prefix matcher over the raw original URL
///
/// Matching is a plain `starts_with` on the full URL (including the query
/// string), not a route-segment match. This is intentionally preserved
/// from the observed deployment and is imprecise: `/api/blog` also exempts
/// `/api/bloggers`. Tightening it would change which legitimate requests
/// are inspected, so the imprecision is documented rather than fixed.
#[derive(Debug, Clone)]
pub struct RouteWhitelist {
    prefixes: Vec<String>,
}

impl RouteWhitelist {
    /// Create a whitelist from literal prefixes
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Whether any configured prefix matches the URL
    pub fn is_whitelisted(&self, url: &str) -> bool {
        self.prefixes.iter().any(|prefix| url.starts_with(prefix))
    }

    /// Configured prefixes
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitelist() -> RouteWhitelist {
        RouteWhitelist::new(vec!["/api/blog".to_string(), "/api/contact".to_string()])
    }

    #[test]
    fn test_prefix_match() {
        let wl = whitelist();
        assert!(wl.is_whitelisted("/api/blog"));
        assert!(wl.is_whitelisted("/api/blog/42/comments"));
        assert!(wl.is_whitelisted("/api/contact?subject=hi"));
        assert!(!wl.is_whitelisted("/api/bookmarks"));
        assert!(!wl.is_whitelisted("/blog"));
    }

    #[test]
    fn test_prefix_imprecision_is_preserved() {
        // Documented behavior, not a bug to fix: prefixes are not
        // segment-aware.
        assert!(whitelist().is_whitelisted("/api/bloggers"));
    }

    #[test]
    fn test_empty_whitelist() {
        let wl = RouteWhitelist::new(Vec::new());
        assert!(!wl.is_whitelisted("/api/blog"));
    }
}

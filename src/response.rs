//! Decision & Response Emitter
//!
//! Converts a block decision into the terminal 403 response and writes the
//! structured audit log. The response body is fixed: the caller never
//! learns which rule or category matched, only internal logs do.

use serde::Serialize;
use tracing::warn;

use crate::detection::{truncate_chars, Location, WafDecision};
use crate::target::InspectionTarget;

/// HTTP status for blocked requests
pub const BLOCK_STATUS: u16 = 403;

/// Content type of the block response
pub const BLOCK_CONTENT_TYPE: &str = "application/json";

/// Characters of raw url/header values kept in logs
const LOG_VALUE_MAX_CHARS: usize = 200;

#[derive(Serialize)]
struct BlockBody {
    message: &'static str,
    code: &'static str,
}

const BLOCK_BODY: BlockBody = BlockBody {
    message: "Request blocked by security policy",
    code: "WAF_BLOCKED",
};

/// Terminal response for a blocked request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockResponse {
    /// HTTP status code (always 403)
    pub status: u16,
    /// Content type (always `application/json`)
    pub content_type: &'static str,
    /// Serialized JSON body
    pub body: String,
}

impl BlockResponse {
    /// Build the fixed block response
    pub fn new() -> Self {
        Self {
            status: BLOCK_STATUS,
            content_type: BLOCK_CONTENT_TYPE,
            // Serialization of a static struct cannot fail.
            body: serde_json::to_string(&BLOCK_BODY).unwrap_or_default(),
        }
    }
}

impl Default for BlockResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit the terminal response for a decision, logging blocks
///
/// `Allow` yields `None`: control returns to the caller's next stage with
/// no response written. `Block` yields the fixed 403 response and records
/// a structured log entry with the truncated sample — never the full
/// untruncated payload, to bound log volume and keep payload content out
/// of the log stream.
pub fn emit(target: &InspectionTarget, decision: &WafDecision) -> Option<BlockResponse> {
    let detection = match decision {
        WafDecision::Allow => return None,
        WafDecision::Block(detection) => detection,
    };

    // For URL and header blocks the raw offending value is useful to
    // operators; truncate it separately from the sample.
    let raw_value = match &detection.location {
        Location::Url => Some(truncate_chars(&target.original_url, LOG_VALUE_MAX_CHARS)),
        Location::Header(name) => target
            .header_value(name)
            .map(|v| truncate_chars(v, LOG_VALUE_MAX_CHARS)),
        _ => None,
    };

    warn!(
        category = %detection.category,
        location = %detection.location,
        rule_id = detection.rule_id,
        rule_name = %detection.rule_name,
        pattern = %detection.pattern,
        sample = %detection.sample,
        raw_value = raw_value.as_deref().unwrap_or(""),
        client_ip = %target.client_ip,
        method = %target.method,
        path = %target.path,
        "Request blocked"
    );

    Some(BlockResponse::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::Detection;
    use crate::rules::AttackCategory;

    fn block_decision(location: Location) -> WafDecision {
        WafDecision::Block(Detection {
            category: AttackCategory::Xss,
            rule_id: 941100,
            rule_name: "XSS: Script tag".to_string(),
            pattern: "<script".to_string(),
            sample: "<script>alert(1)</script>".to_string(),
            location,
        })
    }

    #[test]
    fn test_fixed_body() {
        let response = BlockResponse::new();
        assert_eq!(response.status, 403);
        assert_eq!(response.content_type, "application/json");

        let parsed: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(parsed["message"], "Request blocked by security policy");
        assert_eq!(parsed["code"], "WAF_BLOCKED");
        // Field order is part of the contract.
        assert!(response.body.starts_with(r#"{"message""#));
    }

    #[test]
    fn test_allow_emits_nothing() {
        let target = InspectionTarget::new("GET", "/api/bookmarks");
        assert!(emit(&target, &WafDecision::Allow).is_none());
    }

    #[test]
    fn test_block_emits_response() {
        let target = InspectionTarget::new("GET", "/api/bookmarks")
            .original_url("/api/bookmarks?q=<script>alert(1)</script>")
            .client_ip("203.0.113.9");
        let response = emit(&target, &block_decision(Location::Url)).unwrap();
        assert_eq!(response.status, 403);
        assert_eq!(response, BlockResponse::new());
    }

    #[test]
    fn test_block_body_never_names_the_rule() {
        let target = InspectionTarget::new("GET", "/");
        let response = emit(&target, &block_decision(Location::Path)).unwrap();
        assert!(!response.body.contains("941100"));
        assert!(!response.body.contains("script"));
    }
}
